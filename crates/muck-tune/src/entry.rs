//! Tunable parameter definitions and runtime entries
//!
//! A `TuneDef` is a compile-time table row. The registry turns each row into a
//! `TuneEntry`: shared metadata plus a `TuneSlot` holding the typed current and
//! default values.

use serde::Serialize;

use crate::prelude::*;

/// Prefix marking a reset-to-default request, and a default line in saved files
pub const DEFAULT_MARKER: char = '%';

/// Value type of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TuneType {
	Boolean,
	Timespan,
	Integer,
	Dbref,
	String,
}

impl TuneType {
	/// Type tag used in script exports
	pub fn as_str(self) -> &'static str {
		match self {
			TuneType::Boolean => "boolean",
			TuneType::Timespan => "timespan",
			TuneType::Integer => "integer",
			TuneType::Dbref => "dbref",
			TuneType::String => "string",
		}
	}

	/// Short tag used in `@tune` listings
	pub fn short_tag(self) -> &'static str {
		match self {
			TuneType::Boolean => "bool",
			TuneType::Timespan => "time",
			TuneType::Integer => "int",
			TuneType::Dbref => "ref",
			TuneType::String => "str",
		}
	}
}

/// Compile-time default of a table row; also fixes the parameter's type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuneDefault {
	Bool(bool),
	/// Seconds
	Time(i64),
	Int(i32),
	Ref(Dbref, TypeRestriction),
	Str(Option<&'static str>),
}

/// One row of the parameter table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuneDef {
	pub group: &'static str,
	pub name: &'static str,
	pub label: &'static str,
	pub read_level: MuckerLevel,
	pub write_level: MuckerLevel,
	pub module: Option<&'static str>,
	pub nullable: bool,
	pub default: TuneDefault,
}

impl TuneDef {
	/// Readable by everyone, writable by wizards
	const fn new(
		group: &'static str,
		name: &'static str,
		label: &'static str,
		default: TuneDefault,
	) -> Self {
		Self {
			group,
			name,
			label,
			read_level: MuckerLevel::Mortal,
			write_level: MuckerLevel::Wizard,
			module: None,
			nullable: false,
			default,
		}
	}

	pub const fn boolean(group: &'static str, name: &'static str, label: &'static str, default: bool) -> Self {
		Self::new(group, name, label, TuneDefault::Bool(default))
	}

	pub const fn timespan(group: &'static str, name: &'static str, label: &'static str, secs: i64) -> Self {
		Self::new(group, name, label, TuneDefault::Time(secs))
	}

	pub const fn integer(group: &'static str, name: &'static str, label: &'static str, default: i32) -> Self {
		Self::new(group, name, label, TuneDefault::Int(default))
	}

	pub const fn dbref(
		group: &'static str,
		name: &'static str,
		label: &'static str,
		default: Dbref,
		allowed: TypeRestriction,
	) -> Self {
		Self::new(group, name, label, TuneDefault::Ref(default, allowed))
	}

	pub const fn string(group: &'static str, name: &'static str, label: &'static str, default: &'static str) -> Self {
		Self::new(group, name, label, TuneDefault::Str(Some(default)))
	}

	/// Nullable string whose default is null
	pub const fn null_string(group: &'static str, name: &'static str, label: &'static str) -> Self {
		Self { nullable: true, ..Self::new(group, name, label, TuneDefault::Str(None)) }
	}

	pub const fn read(self, level: MuckerLevel) -> Self {
		Self { read_level: level, ..self }
	}

	pub const fn write(self, level: MuckerLevel) -> Self {
		Self { write_level: level, ..self }
	}

	pub const fn module(self, module: &'static str) -> Self {
		Self { module: Some(module), ..self }
	}

	pub const fn nullable(self) -> Self {
		Self { nullable: true, ..self }
	}
}

/// Typed value of a parameter, as handed out to readers and scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TuneValue {
	Bool(bool),
	Time(i64),
	Int(i32),
	Ref(Dbref),
	Str(Option<String>),
}

/// Current and default value of one parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuneSlot {
	Bool { value: bool, default: bool },
	Time { value: i64, default: i64 },
	Int { value: i32, default: i32 },
	Ref { value: Dbref, default: Dbref, allowed: TypeRestriction },
	Str { value: Option<String>, default: Option<&'static str> },
}

impl TuneSlot {
	fn from_default(default: TuneDefault) -> Self {
		match default {
			TuneDefault::Bool(b) => TuneSlot::Bool { value: b, default: b },
			TuneDefault::Time(t) => TuneSlot::Time { value: t, default: t },
			TuneDefault::Int(i) => TuneSlot::Int { value: i, default: i },
			TuneDefault::Ref(r, allowed) => TuneSlot::Ref { value: r, default: r, allowed },
			TuneDefault::Str(s) => TuneSlot::Str { value: s.map(str::to_string), default: s },
		}
	}

	pub fn tune_type(&self) -> TuneType {
		match self {
			TuneSlot::Bool { .. } => TuneType::Boolean,
			TuneSlot::Time { .. } => TuneType::Timespan,
			TuneSlot::Int { .. } => TuneType::Integer,
			TuneSlot::Ref { .. } => TuneType::Dbref,
			TuneSlot::Str { .. } => TuneType::String,
		}
	}

	pub fn value(&self) -> TuneValue {
		match self {
			TuneSlot::Bool { value, .. } => TuneValue::Bool(*value),
			TuneSlot::Time { value, .. } => TuneValue::Time(*value),
			TuneSlot::Int { value, .. } => TuneValue::Int(*value),
			TuneSlot::Ref { value, .. } => TuneValue::Ref(*value),
			TuneSlot::Str { value, .. } => TuneValue::Str(value.clone()),
		}
	}

	pub fn default_value(&self) -> TuneValue {
		match self {
			TuneSlot::Bool { default, .. } => TuneValue::Bool(*default),
			TuneSlot::Time { default, .. } => TuneValue::Time(*default),
			TuneSlot::Int { default, .. } => TuneValue::Int(*default),
			TuneSlot::Ref { default, .. } => TuneValue::Ref(*default),
			TuneSlot::Str { default, .. } => TuneValue::Str(default.map(str::to_string)),
		}
	}

	/// True if the current value equals the default, whatever the flag says
	pub fn holds_default(&self) -> bool {
		match self {
			TuneSlot::Bool { value, default } => value == default,
			TuneSlot::Time { value, default } => value == default,
			TuneSlot::Int { value, default } => value == default,
			TuneSlot::Ref { value, default, .. } => value == default,
			TuneSlot::Str { value, default } => value.as_deref() == *default,
		}
	}

	/// Copy the default into the value, dropping any owned string
	pub(crate) fn restore_default(&mut self) {
		match self {
			TuneSlot::Bool { value, default } => *value = *default,
			TuneSlot::Time { value, default } => *value = *default,
			TuneSlot::Int { value, default } => *value = *default,
			TuneSlot::Ref { value, default, .. } => *value = *default,
			TuneSlot::Str { value, default } => *value = default.map(str::to_string),
		}
	}

	/// Drop the owned string, if any. Returns true if something was released.
	pub(crate) fn release(&mut self) -> bool {
		match self {
			TuneSlot::Str { value, .. } => value.take().is_some(),
			_ => false,
		}
	}
}

/// A defined parameter with its current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuneEntry {
	pub(crate) group: &'static str,
	pub(crate) name: &'static str,
	pub(crate) label: &'static str,
	pub(crate) read_level: MuckerLevel,
	pub(crate) write_level: MuckerLevel,
	pub(crate) module: Option<&'static str>,
	pub(crate) nullable: bool,
	pub(crate) is_default: bool,
	pub(crate) slot: TuneSlot,
}

impl TuneEntry {
	pub(crate) fn from_def(def: &TuneDef) -> Self {
		Self {
			group: def.group,
			name: def.name,
			label: def.label,
			read_level: def.read_level,
			write_level: def.write_level,
			module: def.module,
			nullable: def.nullable,
			is_default: true,
			slot: TuneSlot::from_default(def.default),
		}
	}

	pub fn group(&self) -> &'static str {
		self.group
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn label(&self) -> &'static str {
		self.label
	}

	pub fn read_level(&self) -> MuckerLevel {
		self.read_level
	}

	pub fn write_level(&self) -> MuckerLevel {
		self.write_level
	}

	pub fn module(&self) -> Option<&'static str> {
		self.module
	}

	pub fn is_nullable(&self) -> bool {
		self.nullable
	}

	pub fn is_default(&self) -> bool {
		self.is_default
	}

	pub fn tune_type(&self) -> TuneType {
		self.slot.tune_type()
	}

	pub fn slot(&self) -> &TuneSlot {
		&self.slot
	}

	pub fn value(&self) -> TuneValue {
		self.slot.value()
	}

	pub fn default_value(&self) -> TuneValue {
		self.slot.default_value()
	}

	/// Object kind restriction, for dbref parameters only
	pub fn allowed_kind(&self) -> Option<TypeRestriction> {
		match self.slot {
			TuneSlot::Ref { allowed, .. } => Some(allowed),
			_ => None,
		}
	}

	pub fn can_read(&self, level: MuckerLevel) -> bool {
		level >= self.read_level
	}

	pub fn can_write(&self, level: MuckerLevel) -> bool {
		level >= self.write_level
	}

	/// Listing and save order: group, then name ignoring case
	pub fn display_order(&self, other: &TuneEntry) -> std::cmp::Ordering {
		self.group.cmp(other.group).then_with(|| {
			self.name.to_ascii_lowercase().cmp(&other.name.to_ascii_lowercase())
		})
	}

	pub(crate) fn reset(&mut self) {
		self.slot.restore_default();
		self.is_default = true;
	}
}


// vim: ts=4
