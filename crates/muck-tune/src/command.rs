//! `@tune` command front end
//!
//! ```text
//! @tune                  list every readable parameter
//! @tune <pattern>        list matching parameters
//! @tune <name>=<value>   set a parameter
//! @tune %<name>          reset a parameter to its default
//! @tune save|load        write or read the parameter file
//! @tune restore          reset every parameter to its default
//! ```
//!
//! File IO is left to the caller: `save` and `load` come back as a
//! `FileRequest` naming the `file_parameters` path.

use itertools::Itertools;

use crate::codec;
use crate::entry::DEFAULT_MARKER;
use crate::pattern::NamePattern;
use crate::prelude::*;
use crate::registry::TuneRegistry;
use crate::result::result_message;

/// Level required for save, load and restore
pub const ADMIN_LEVEL: MuckerLevel = MuckerLevel::Wizard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuneCommand {
	List(String),
	Set { name: String, value: String },
	Save,
	Load,
	Restore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRequest {
	Save(String),
	Load(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TuneReply {
	pub lines: Vec<String>,
	pub file: Option<FileRequest>,
	/// True if any parameter value changed
	pub changed: bool,
}

impl TuneReply {
	fn line(line: impl Into<String>) -> Self {
		Self { lines: vec![line.into()], ..Default::default() }
	}
}

impl TuneCommand {
	pub fn parse(arg: &str) -> Self {
		let arg = arg.trim();
		if arg.eq_ignore_ascii_case("save") {
			return TuneCommand::Save;
		}
		if arg.eq_ignore_ascii_case("load") {
			return TuneCommand::Load;
		}
		if arg.eq_ignore_ascii_case("restore") {
			return TuneCommand::Restore;
		}
		if let Some((name, value)) = arg.split_once('=') {
			return TuneCommand::Set { name: name.trim().to_string(), value: value.trim().to_string() };
		}
		if arg.starts_with(DEFAULT_MARKER) {
			return TuneCommand::Set { name: arg.to_string(), value: String::new() };
		}
		TuneCommand::List(arg.to_string())
	}
}

impl TuneRegistry {
	pub fn execute(&mut self, level: MuckerLevel, command: &TuneCommand) -> TuneReply {
		match command {
			TuneCommand::List(pattern) => {
				TuneReply { lines: self.display(pattern, level), ..Default::default() }
			}
			TuneCommand::Set { name, value } => {
				let result = self.set_parameter(level, name, value);
				TuneReply {
					lines: vec![result_message(&result).to_string()],
					file: None,
					changed: result.is_ok(),
				}
			}
			TuneCommand::Restore => {
				if level < ADMIN_LEVEL {
					return TuneReply::line("Permission denied.");
				}
				self.load_defaults();
				TuneReply { changed: true, ..TuneReply::line("Parameters restored to defaults.") }
			}
			TuneCommand::Save | TuneCommand::Load => {
				if level < ADMIN_LEVEL {
					return TuneReply::line("Permission denied.");
				}
				let path = match self.get_str("file_parameters") {
					Some(path) if !path.is_empty() => path.to_string(),
					_ => return TuneReply::line("No parameter file configured."),
				};
				if *command == TuneCommand::Save {
					TuneReply { file: Some(FileRequest::Save(path)), ..TuneReply::line("Saving parameters.") }
				} else {
					TuneReply { file: Some(FileRequest::Load(path)), ..TuneReply::line("Loading parameters.") }
				}
			}
		}
	}

	/// Listing lines for parameters matching `pattern` that `level` may read
	pub fn display(&self, pattern: &str, level: MuckerLevel) -> Vec<String> {
		let matcher = NamePattern::new(pattern);
		let shown: Vec<_> = self
			.entries()
			.filter(|e| e.can_read(level) && matcher.matches(e.name()))
			.sorted_by(|a, b| a.display_order(b))
			.collect();

		if shown.is_empty() {
			return vec!["No matching parameters.".to_string()];
		}

		let mut lines = Vec::with_capacity(shown.len() + 8);
		for (group, entries) in &shown.iter().chunk_by(|e| e.group()) {
			lines.push(format!("{}:", group));
			for entry in entries {
				lines.push(format!(
					"({})  {:<28} = {}{}",
					entry.tune_type().short_tag(),
					entry.name(),
					codec::format_value(&entry.value()),
					if entry.is_default() { "" } else { "  [custom]" }
				));
			}
		}
		lines.push("*done*".to_string());
		lines
	}
}


// vim: ts=4
