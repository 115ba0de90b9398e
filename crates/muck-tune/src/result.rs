//! Outcome of a set request
//!
//! Every outcome carries a stable integer code shared with the script
//! runtime: 0 set, 1 unknown, 2 syntax, 3 bad value, 4 denied, 5 reset.

use std::fmt;

use crate::codec::CodecError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
	/// New value stored
	Set,
	/// Reset to the compiled-in default
	Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
	/// No parameter by that name
	Unknown,
	/// Value text cannot be read as the parameter's type
	Syntax,
	/// Value parsed but is not acceptable
	BadValue,
	/// Caller's level is below the write level
	Denied,
}

pub type SetResult = Result<SetOutcome, SetError>;

impl SetOutcome {
	pub fn code(self) -> i32 {
		match self {
			SetOutcome::Set => 0,
			SetOutcome::Default => 5,
		}
	}

	pub fn message(self) -> &'static str {
		match self {
			SetOutcome::Set => "Parameter set.",
			SetOutcome::Default => "Parameter reset to default.",
		}
	}
}

impl SetError {
	pub fn code(self) -> i32 {
		match self {
			SetError::Unknown => 1,
			SetError::Syntax => 2,
			SetError::BadValue => 3,
			SetError::Denied => 4,
		}
	}

	pub fn message(self) -> &'static str {
		match self {
			SetError::Unknown => "Unknown parameter.",
			SetError::Syntax => "Bad parameter syntax.",
			SetError::BadValue => "Bad parameter value.",
			SetError::Denied => "Permission denied.",
		}
	}
}

impl From<CodecError> for SetError {
	fn from(err: CodecError) -> Self {
		match err {
			CodecError::Syntax => SetError::Syntax,
			CodecError::BadValue => SetError::BadValue,
		}
	}
}

impl fmt::Display for SetError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.message())
	}
}

impl std::error::Error for SetError {}

/// Integer code of a set result
pub fn result_code(result: &SetResult) -> i32 {
	match result {
		Ok(outcome) => outcome.code(),
		Err(err) => err.code(),
	}
}

/// User-facing message of a set result
pub fn result_message(result: &SetResult) -> &'static str {
	match result {
		Ok(outcome) => outcome.message(),
		Err(err) => err.message(),
	}
}


// vim: ts=4
