//! Structured parameter export for the script runtime

use serde::Serialize;

use muck_types::array::PackedArray;

use crate::entry::{TuneEntry, TuneType, TuneValue};
use crate::pattern::NamePattern;
use crate::prelude::*;
use crate::registry::TuneRegistry;

/// One exported parameter. `mlev` and `readmlev` both carry the read level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TuneRecord {
	#[serde(rename = "type")]
	pub tune_type: TuneType,
	pub group: String,
	pub name: String,
	pub value: TuneValue,
	pub mlev: MuckerLevel,
	pub readmlev: MuckerLevel,
	pub writemlev: MuckerLevel,
	pub label: String,
	pub default: TuneValue,
	pub active: bool,
	pub nullable: bool,
	/// Allowed object kind, dbref parameters only
	#[serde(skip_serializing_if = "Option::is_none")]
	pub objtype: Option<String>,
}

impl TuneRecord {
	fn from_entry(entry: &TuneEntry, active: bool) -> Self {
		Self {
			tune_type: entry.tune_type(),
			group: entry.group().to_string(),
			name: entry.name().to_string(),
			value: entry.value(),
			mlev: entry.read_level(),
			readmlev: entry.read_level(),
			writemlev: entry.write_level(),
			label: entry.label().to_string(),
			default: entry.default_value(),
			active,
			nullable: entry.is_nullable(),
			objtype: entry.allowed_kind().map(|k| k.as_str().to_string()),
		}
	}
}

impl TuneRegistry {
	/// Records for every parameter matching `pattern` that `level` may read
	pub fn build_snapshot(
		&self,
		pattern: &str,
		level: MuckerLevel,
		pinned: bool,
	) -> PackedArray<TuneRecord> {
		let pattern = NamePattern::new(pattern);
		let records: Vec<TuneRecord> = self
			.entries()
			.filter(|entry| entry.can_read(level) && pattern.matches(entry.name()))
			.map(|entry| TuneRecord::from_entry(entry, self.is_active(entry)))
			.collect();
		debug!("Built parameter snapshot with {} records", records.len());
		PackedArray::new(records, pinned)
	}
}


// vim: ts=4
