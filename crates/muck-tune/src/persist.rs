//! Parameter file load and save
//!
//! # Format
//!
//! One directive per line:
//!
//! ```text
//! # comment
//! dump_interval=3600
//! %max_pennies=10000
//! ```
//!
//! `name=value` sets a custom value. `%name=value` records the default; on
//! load it resets the parameter and the value text is not used. Saved files
//! list every parameter, defaults included, ordered by group then name.

use itertools::Itertools;
use std::io::{BufRead, Write};

use muck_types::object_model::Notifier;

use crate::codec;
use crate::entry::DEFAULT_MARKER;
use crate::prelude::*;
use crate::registry::TuneRegistry;
use crate::result::{SetOutcome, result_message};

const COMMENT_MARKER: char = '#';

/// Player to report per-line load results to
#[derive(Clone, Copy)]
pub struct NotifyTarget<'a> {
	pub notifier: &'a dyn Notifier,
	pub player: Dbref,
}

/// Tally of a load run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
	/// Lines consumed, including comments and blanks
	pub lines_read: usize,
	/// Custom values stored
	pub applied: usize,
	/// Parameters reset to default
	pub reset: usize,
	/// Directives that were rejected
	pub failed: usize,
	/// Non-blank lines without `=`
	pub ignored: usize,
}

impl TuneRegistry {
	/// Load directives from a reader. `max_lines` caps the lines read;
	/// `None` reads to the end. Bad directives are counted, never fatal; only
	/// read errors abort.
	pub fn load_from_source<R: BufRead>(
		&mut self,
		source: R,
		notify: Option<NotifyTarget<'_>>,
		max_lines: Option<usize>,
	) -> MuckResult<LoadReport> {
		let mut report = LoadReport::default();
		for line in source.lines().take(max_lines.unwrap_or(usize::MAX)) {
			let line = line?;
			self.apply_line(&line, notify, &mut report);
		}
		log_report(&report);
		Ok(report)
	}

	/// Load directives from in-memory text
	pub fn load_from_str(
		&mut self,
		text: &str,
		notify: Option<NotifyTarget<'_>>,
		max_lines: Option<usize>,
	) -> LoadReport {
		let mut report = LoadReport::default();
		for line in text.lines().take(max_lines.unwrap_or(usize::MAX)) {
			self.apply_line(line, notify, &mut report);
		}
		log_report(&report);
		report
	}

	fn apply_line(&mut self, line: &str, notify: Option<NotifyTarget<'_>>, report: &mut LoadReport) {
		report.lines_read += 1;
		let line = line.trim_end_matches(['\r', '\n']);
		if line.starts_with(COMMENT_MARKER) || line.trim().is_empty() {
			return;
		}

		let Some((name, value)) = line.split_once('=') else {
			report.ignored += 1;
			debug!("Ignoring parameter line {}: no '='", report.lines_read);
			if let Some(target) = notify {
				target
					.notifier
					.notify(target.player, &format!("Ignored line {}.", report.lines_read));
			}
			return;
		};
		let name = name.trim();

		// Loading is trusted: apply with full privilege whoever is notified
		let result = self.set_parameter(MuckerLevel::God, name, value);
		match result {
			Ok(SetOutcome::Set) => report.applied += 1,
			Ok(SetOutcome::Default) => report.reset += 1,
			Err(err) => {
				report.failed += 1;
				debug!("Parameter line {} ({}) rejected: {:?}", report.lines_read, name, err);
			}
		}

		if let Some(target) = notify {
			let name = name.strip_prefix(DEFAULT_MARKER).unwrap_or(name);
			target
				.notifier
				.notify(target.player, &format!("{}: {}", name, result_message(&result)));
		}
	}

	/// Every parameter as a file line, ordered by group then name
	pub fn save_lines(&self) -> Vec<String> {
		self.entries()
			.sorted_by(|a, b| a.display_order(b))
			.map(|entry| {
				if entry.is_default() {
					format!(
						"{}{}={}",
						DEFAULT_MARKER,
						entry.name(),
						codec::format_value(&entry.default_value())
					)
				} else {
					format!("{}={}", entry.name(), codec::format_value(&entry.value()))
				}
			})
			.collect()
	}

	pub fn save_to_string(&self) -> String {
		let mut out = String::new();
		for line in self.save_lines() {
			out.push_str(&line);
			out.push('\n');
		}
		out
	}

	pub fn save_to_sink<W: Write>(&self, mut sink: W) -> MuckResult<()> {
		let lines = self.save_lines();
		for line in &lines {
			writeln!(sink, "{}", line)?;
		}
		sink.flush()?;
		info!("Saved {} parameters", lines.len());
		Ok(())
	}
}

fn log_report(report: &LoadReport) {
	info!(
		"Parameter load: {} lines, {} set, {} reset, {} failed, {} ignored",
		report.lines_read, report.applied, report.reset, report.failed, report.ignored
	);
}


// vim: ts=4
