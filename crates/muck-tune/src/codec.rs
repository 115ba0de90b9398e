//! Text codec for parameter values
//!
//! Parsing distinguishes text that cannot be read as the parameter's type
//! (`Syntax`) from text that parses but is not acceptable (`BadValue`).

use muck_types::object_model::ObjectModel;

use crate::entry::{TuneSlot, TuneValue};
use crate::prelude::*;

/// Text forms accepted for true
pub const TRUE_WORDS: [&str; 5] = ["yes", "y", "true", "on", "1"];
/// Text forms accepted for false
pub const FALSE_WORDS: [&str; 5] = ["no", "n", "false", "off", "0"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
	Syntax,
	BadValue,
}

pub fn parse_bool(text: &str) -> Result<bool, CodecError> {
	let text = text.trim();
	if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(text)) {
		Ok(true)
	} else if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(text)) {
		Ok(false)
	} else {
		Err(CodecError::Syntax)
	}
}

pub fn parse_int(text: &str) -> Result<i32, CodecError> {
	text.trim().parse::<i32>().map_err(|_| CodecError::Syntax)
}

/// Whole seconds; a negative span parses but is rejected
pub fn parse_time(text: &str) -> Result<i64, CodecError> {
	let secs = text.trim().parse::<i64>().map_err(|_| CodecError::Syntax)?;
	if secs < 0 {
		return Err(CodecError::BadValue);
	}
	Ok(secs)
}

/// `#<n>`, checked against the object model. `#-1` is only allowed when the
/// parameter is nullable.
pub fn parse_ref(
	text: &str,
	allowed: TypeRestriction,
	nullable: bool,
	world: &dyn ObjectModel,
) -> Result<Dbref, CodecError> {
	let obj: Dbref = text.parse().map_err(|_| CodecError::Syntax)?;
	if obj.is_nothing() && nullable {
		return Ok(obj);
	}
	if !world.resolve_and_validate(obj, allowed) {
		return Err(CodecError::BadValue);
	}
	Ok(obj)
}

/// Empty text stores null on nullable parameters. Line breaks would corrupt
/// the parameter file and are rejected.
pub fn parse_str(text: &str, nullable: bool) -> Result<Option<String>, CodecError> {
	if text.contains(['\n', '\r']) {
		return Err(CodecError::BadValue);
	}
	if text.is_empty() && nullable {
		return Ok(None);
	}
	Ok(Some(text.to_string()))
}

pub fn format_value(value: &TuneValue) -> String {
	match value {
		TuneValue::Bool(true) => "yes".to_string(),
		TuneValue::Bool(false) => "no".to_string(),
		TuneValue::Time(secs) => secs.to_string(),
		TuneValue::Int(i) => i.to_string(),
		TuneValue::Ref(obj) => obj.to_string(),
		TuneValue::Str(s) => s.clone().unwrap_or_default(),
	}
}

impl TuneSlot {
	/// Parse `text` as this slot's type and store it. On error the slot is
	/// left untouched.
	pub(crate) fn assign_text(
		&mut self,
		text: &str,
		nullable: bool,
		world: &dyn ObjectModel,
	) -> Result<(), CodecError> {
		match self {
			TuneSlot::Bool { value, .. } => *value = parse_bool(text)?,
			TuneSlot::Time { value, .. } => *value = parse_time(text)?,
			TuneSlot::Int { value, .. } => *value = parse_int(text)?,
			TuneSlot::Ref { value, allowed, .. } => {
				*value = parse_ref(text, *allowed, nullable, world)?;
			}
			TuneSlot::Str { value, .. } => *value = parse_str(text, nullable)?,
		}
		Ok(())
	}
}


// vim: ts=4
