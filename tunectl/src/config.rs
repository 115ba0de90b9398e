//! Environment configuration

use std::collections::HashSet;
use std::path::PathBuf;

use muck_types::prelude::*;

pub const DEFAULT_PARMFILE: &str = "data/parmfile.cfg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Parameter file read at start and written back on change
	pub parmfile: PathBuf,
	/// Level commands run at
	pub level: MuckerLevel,
	/// Modules reported active in listings and snapshots
	pub modules: HashSet<String>,
}

impl Config {
	pub fn from_env() -> MuckResult<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Build from any key lookup: `TUNE_PARMFILE`, `TUNE_LEVEL`, `TUNE_MODULES`
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> MuckResult<Self> {
		let parmfile =
			PathBuf::from(lookup("TUNE_PARMFILE").unwrap_or_else(|| DEFAULT_PARMFILE.to_string()));

		let level = match lookup("TUNE_LEVEL") {
			Some(level) => level.parse().map_err(|_| {
				Error::ConfigError(format!("TUNE_LEVEL: unknown level '{}'", level))
			})?,
			None => MuckerLevel::God,
		};

		let modules = lookup("TUNE_MODULES")
			.unwrap_or_default()
			.split(',')
			.map(|m| m.trim().to_ascii_lowercase())
			.filter(|m| !m.is_empty())
			.collect();

		Ok(Self { parmfile, level, modules })
	}
}


// vim: ts=4
