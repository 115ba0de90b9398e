//! The tunable parameter registry
//!
//! Owns every parameter entry for the life of the server. Callers change
//! values only through `set_parameter` and the default loaders, and read them
//! through the text getter or the typed accessors.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use muck_types::object_model::ObjectModel;

use crate::entry::{DEFAULT_MARKER, TuneDef, TuneEntry, TuneSlot};
use crate::prelude::*;
use crate::result::{SetError, SetOutcome, SetResult};
use crate::{codec, tunelist};

/// Construction-time options
#[derive(Debug, Clone, Default)]
pub struct TuneOptions {
	/// Modules compiled into this server; their parameters are reported active
	pub active_modules: HashSet<String>,
}

impl TuneOptions {
	pub fn with_module(mut self, module: impl Into<String>) -> Self {
		self.active_modules.insert(module.into().to_ascii_lowercase());
		self
	}
}

pub struct TuneRegistry {
	entries: Vec<TuneEntry>,
	/// Lowercased name to index in `entries`
	index: HashMap<String, usize>,
	options: TuneOptions,
	world: Arc<dyn ObjectModel>,
}

impl std::fmt::Debug for TuneRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TuneRegistry")
			.field("entries", &self.entries.len())
			.field("options", &self.options)
			.finish_non_exhaustive()
	}
}

/// Strip the reset marker, reporting whether it was present
fn split_marker(name: &str) -> (&str, bool) {
	match name.strip_prefix(DEFAULT_MARKER) {
		Some(rest) => (rest, true),
		None => (name, false),
	}
}

impl TuneRegistry {
	/// Registry over the server's full parameter table
	pub fn new(world: Arc<dyn ObjectModel>, options: TuneOptions) -> MuckResult<Self> {
		Self::with_table(world, tunelist::TUNE_TABLE, options)
	}

	/// Registry over an arbitrary table. Every entry starts at its default.
	pub fn with_table(
		world: Arc<dyn ObjectModel>,
		table: &[TuneDef],
		options: TuneOptions,
	) -> MuckResult<Self> {
		let mut entries = Vec::with_capacity(table.len());
		let mut index = HashMap::with_capacity(table.len());

		for def in table {
			if def.name.is_empty()
				|| def.name.starts_with(DEFAULT_MARKER)
				|| def.name.contains(['=', ' ', '\t'])
			{
				return Err(Error::ConfigError(format!("Invalid parameter name '{}'", def.name)));
			}
			if def.module.is_some_and(str::is_empty) {
				return Err(Error::ConfigError(format!("Empty module on '{}'", def.name)));
			}
			if index.insert(def.name.to_ascii_lowercase(), entries.len()).is_some() {
				return Err(Error::ConfigError(format!(
					"Parameter '{}' is already defined",
					def.name
				)));
			}
			entries.push(TuneEntry::from_def(def));
		}

		info!("Tune registry initialized with {} parameters", entries.len());
		Ok(Self { entries, index, options, world })
	}

	/// Number of defined parameters
	pub fn count(&self) -> usize {
		self.entries.len()
	}

	/// Entries in definition order
	pub fn entries(&self) -> impl Iterator<Item = &TuneEntry> {
		self.entries.iter()
	}

	pub fn options(&self) -> &TuneOptions {
		&self.options
	}

	pub fn world(&self) -> &Arc<dyn ObjectModel> {
		&self.world
	}

	fn index_of(&self, name: &str) -> Option<usize> {
		self.index.get(&name.to_ascii_lowercase()).copied()
	}

	/// Case-insensitive lookup; a leading reset marker is ignored
	pub fn lookup(&self, name: &str) -> Option<&TuneEntry> {
		let (name, _) = split_marker(name);
		self.index_of(name).map(|idx| &self.entries[idx])
	}

	/// True if the entry has no module or its module is active
	pub fn is_active(&self, entry: &TuneEntry) -> bool {
		entry.module().is_none_or(|m| self.options.active_modules.contains(&m.to_ascii_lowercase()))
	}

	/// Set a parameter from text, or reset it when `name` carries the `%`
	/// marker (the text is then ignored). Nothing changes on error.
	pub fn set_parameter(&mut self, level: MuckerLevel, name: &str, text: &str) -> SetResult {
		let (name, reset) = split_marker(name);
		let Some(idx) = self.index_of(name) else {
			debug!("Set of unknown parameter '{}'", name);
			return Err(SetError::Unknown);
		};

		let entry = &mut self.entries[idx];
		if !entry.can_write(level) {
			warn!(
				"Permission denied setting '{}': level {} below {}",
				entry.name, level, entry.write_level
			);
			return Err(SetError::Denied);
		}

		if reset {
			entry.reset();
			info!("Parameter '{}' reset to default", entry.name);
			return Ok(SetOutcome::Default);
		}

		let nullable = entry.nullable;
		if let Err(err) = entry.slot.assign_text(text, nullable, self.world.as_ref()) {
			debug!("Rejected value for '{}': {:?}", entry.name, err);
			return Err(err.into());
		}
		entry.is_default = false;
		if entry.read_level > MuckerLevel::Mortal {
			info!("Parameter '{}' set", entry.name);
		} else {
			info!("Parameter '{}' set to '{}'", entry.name, codec::format_value(&entry.value()));
		}
		Ok(SetOutcome::Set)
	}

	/// Reset one parameter to its default
	pub fn reset_parameter(&mut self, level: MuckerLevel, name: &str) -> SetResult {
		let (name, _) = split_marker(name);
		self.set_parameter(level, &format!("{}{}", DEFAULT_MARKER, name), "")
	}

	/// Current value as text. `None` for an unknown name, empty text when
	/// the caller may not read it.
	pub fn get_parameter_text(&self, name: &str, level: MuckerLevel) -> Option<String> {
		let entry = self.lookup(name)?;
		if !entry.can_read(level) {
			return Some(String::new());
		}
		Some(codec::format_value(&entry.value()))
	}

	/// Put every parameter back to its default
	pub fn load_defaults(&mut self) {
		for entry in &mut self.entries {
			entry.slot.release();
			entry.reset();
		}
		info!("Loaded defaults for {} parameters", self.entries.len());
	}

	/// Release every owned value at shutdown. Returns the number of strings
	/// released.
	pub fn free_all(mut self) -> usize {
		let released =
			self.entries.iter_mut().map(|e| e.slot.release()).filter(|released| *released).count();
		self.index.clear();
		self.entries.clear();
		debug!("Freed {} parameter strings", released);
		released
	}

	pub fn get_bool(&self, name: &str) -> Option<bool> {
		match self.lookup(name)?.slot() {
			TuneSlot::Bool { value, .. } => Some(*value),
			_ => None,
		}
	}

	pub fn get_int(&self, name: &str) -> Option<i32> {
		match self.lookup(name)?.slot() {
			TuneSlot::Int { value, .. } => Some(*value),
			_ => None,
		}
	}

	pub fn get_duration(&self, name: &str) -> Option<Duration> {
		match self.lookup(name)?.slot() {
			TuneSlot::Time { value, .. } => u64::try_from(*value).ok().map(Duration::from_secs),
			_ => None,
		}
	}

	pub fn get_ref(&self, name: &str) -> Option<Dbref> {
		match self.lookup(name)?.slot() {
			TuneSlot::Ref { value, .. } => Some(*value),
			_ => None,
		}
	}

	/// String value; `None` also for a null nullable string
	pub fn get_str(&self, name: &str) -> Option<&str> {
		match self.lookup(name)?.slot() {
			TuneSlot::Str { value, .. } => value.as_deref(),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use muck_types::object_model::MemWorld;

	const TABLE: &[TuneDef] = &[
		TuneDef::timespan("DB Dumps", "dump_interval", "Dump interval", 900),
		TuneDef::boolean("Player Max", "playermax", "Limit players", false).write(MuckerLevel::God),
		TuneDef::integer("Currency", "max_pennies", "Max pennies", 10000),
		TuneDef::dbref(
			"Database",
			"player_start",
			"Start room",
			Dbref(0),
			TypeRestriction::Only(ObjectKind::Room),
		),
		TuneDef::dbref("Database", "guest_home", "Guest home", Dbref(0), TypeRestriction::Any).nullable(),
		TuneDef::string("Misc", "muckname", "MUCK name", "TinyMUCK"),
		TuneDef::null_string("SSL", "ssl_keyfile_passwd", "Key password")
			.read(MuckerLevel::God)
			.write(MuckerLevel::God)
			.module("ssl"),
	];

	fn registry() -> TuneRegistry {
		TuneRegistry::with_table(Arc::new(MemWorld::minimal()), TABLE, TuneOptions::default())
			.expect("valid table")
	}

	#[test]
	fn test_set_and_get_duration() {
		let mut reg = registry();
		assert_eq!(reg.set_parameter(MuckerLevel::God, "dump_interval", "3600"), Ok(SetOutcome::Set));
		assert_eq!(reg.get_parameter_text("dump_interval", MuckerLevel::God).as_deref(), Some("3600"));
		assert!(!reg.lookup("dump_interval").expect("entry").is_default());
		assert_eq!(reg.get_duration("dump_interval"), Some(Duration::from_secs(3600)));

		assert_eq!(
			reg.set_parameter(MuckerLevel::God, "%dump_interval", "ignored"),
			Ok(SetOutcome::Default)
		);
		assert_eq!(reg.get_parameter_text("dump_interval", MuckerLevel::God).as_deref(), Some("900"));
		assert!(reg.lookup("dump_interval").expect("entry").is_default());
	}

	#[test]
	fn test_names_are_case_insensitive() {
		let mut reg = registry();
		assert_eq!(reg.set_parameter(MuckerLevel::God, "MAX_Pennies", "500"), Ok(SetOutcome::Set));
		assert_eq!(reg.get_int("max_pennies"), Some(500));
		assert_eq!(reg.get_parameter_text("%MAX_PENNIES", MuckerLevel::Mortal).as_deref(), Some("500"));
	}

	#[test]
	fn test_denied_changes_nothing() {
		let mut reg = registry();
		assert_eq!(reg.set_parameter(MuckerLevel::Wizard, "playermax", "yes"), Err(SetError::Denied));
		assert_eq!(reg.set_parameter(MuckerLevel::Mortal, "%playermax", ""), Err(SetError::Denied));
		assert_eq!(reg.get_bool("playermax"), Some(false));
		assert!(reg.lookup("playermax").expect("entry").is_default());
	}

	#[test]
	fn test_unknown_syntax_badvalue() {
		let mut reg = registry();
		assert_eq!(reg.set_parameter(MuckerLevel::God, "no_such_parm", "1"), Err(SetError::Unknown));
		assert_eq!(reg.set_parameter(MuckerLevel::God, "max_pennies", "lots"), Err(SetError::Syntax));
		assert_eq!(reg.set_parameter(MuckerLevel::God, "player_start", "#1"), Err(SetError::BadValue));
		assert_eq!(reg.set_parameter(MuckerLevel::God, "player_start", "1"), Err(SetError::Syntax));
		assert_eq!(reg.get_ref("player_start"), Some(Dbref(0)));
		assert!(reg.lookup("player_start").expect("entry").is_default());
	}

	#[test]
	fn test_nullable_dbref_accepts_nothing() {
		let mut reg = registry();
		assert_eq!(reg.set_parameter(MuckerLevel::God, "guest_home", "#-1"), Ok(SetOutcome::Set));
		assert_eq!(reg.get_ref("guest_home"), Some(Dbref::NOTHING));
		assert_eq!(reg.get_parameter_text("guest_home", MuckerLevel::Mortal).as_deref(), Some("#-1"));
		assert_eq!(reg.set_parameter(MuckerLevel::God, "guest_home", "#1"), Ok(SetOutcome::Set));
		assert_eq!(reg.set_parameter(MuckerLevel::God, "guest_home", "#5"), Err(SetError::BadValue));
	}

	#[test]
	fn test_read_denied_returns_empty() {
		let mut reg = registry();
		reg.set_parameter(MuckerLevel::God, "ssl_keyfile_passwd", "secret").expect("set");
		assert_eq!(reg.get_parameter_text("ssl_keyfile_passwd", MuckerLevel::Wizard).as_deref(), Some(""));
		assert_eq!(
			reg.get_parameter_text("ssl_keyfile_passwd", MuckerLevel::God).as_deref(),
			Some("secret")
		);
		assert_eq!(reg.get_parameter_text("missing", MuckerLevel::God), None);
	}

	#[test]
	fn test_nullable_string() {
		let mut reg = registry();
		assert_eq!(reg.get_str("ssl_keyfile_passwd"), None);
		reg.set_parameter(MuckerLevel::God, "ssl_keyfile_passwd", "pw").expect("set");
		assert_eq!(reg.get_str("ssl_keyfile_passwd"), Some("pw"));
		reg.set_parameter(MuckerLevel::God, "ssl_keyfile_passwd", "").expect("set");
		assert_eq!(reg.get_str("ssl_keyfile_passwd"), None);

		reg.set_parameter(MuckerLevel::God, "muckname", "").expect("set");
		assert_eq!(reg.get_str("muckname"), Some(""));
	}

	#[test]
	fn test_load_defaults_restores_everything() {
		let mut reg = registry();
		reg.set_parameter(MuckerLevel::God, "muckname", "FooMUCK").expect("set");
		reg.set_parameter(MuckerLevel::God, "max_pennies", "1").expect("set");
		reg.load_defaults();
		for entry in reg.entries() {
			assert!(entry.is_default(), "{}", entry.name());
			assert_eq!(entry.value(), entry.default_value(), "{}", entry.name());
		}
	}

	#[test]
	fn test_typed_accessors_check_type() {
		let reg = registry();
		assert_eq!(reg.get_bool("max_pennies"), None);
		assert_eq!(reg.get_int("muckname"), None);
		assert_eq!(reg.get_str("muckname"), Some("TinyMUCK"));
	}

	#[test]
	fn test_duplicate_and_invalid_names_rejected() {
		let world: Arc<dyn ObjectModel> = Arc::new(MemWorld::minimal());
		let dup = [
			TuneDef::integer("A", "limit", "x", 1),
			TuneDef::integer("B", "LIMIT", "y", 2),
		];
		assert!(TuneRegistry::with_table(world.clone(), &dup, TuneOptions::default()).is_err());

		let marked = [TuneDef::integer("A", "%limit", "x", 1)];
		assert!(TuneRegistry::with_table(world.clone(), &marked, TuneOptions::default()).is_err());

		let eq = [TuneDef::integer("A", "a=b", "x", 1)];
		assert!(TuneRegistry::with_table(world, &eq, TuneOptions::default()).is_err());
	}

	#[test]
	fn test_active_modules() {
		let reg = registry();
		let ssl = reg.lookup("ssl_keyfile_passwd").expect("entry");
		assert!(!reg.is_active(ssl));
		assert!(reg.is_active(reg.lookup("muckname").expect("entry")));

		let reg = TuneRegistry::with_table(
			Arc::new(MemWorld::minimal()),
			TABLE,
			TuneOptions::default().with_module("SSL"),
		)
		.expect("valid table");
		assert!(reg.is_active(reg.lookup("ssl_keyfile_passwd").expect("entry")));
	}

	#[derive(Clone, Default)]
	struct LogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

	impl std::io::Write for LogBuffer {
		fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
			self.0.lock().expect("log lock").extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> std::io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn test_restricted_values_stay_out_of_logs() {
		let logs = LogBuffer::default();
		let writer = logs.clone();
		let subscriber = tracing_subscriber::fmt()
			.with_writer(move || writer.clone())
			.with_ansi(false)
			.with_max_level(tracing::Level::DEBUG)
			.finish();

		tracing::subscriber::with_default(subscriber, || {
			let mut reg = registry();
			reg.set_parameter(MuckerLevel::God, "ssl_keyfile_passwd", "hunter2").expect("set");
			reg.load_from_str("ssl_keyfile_passwd=swordfish\nmuckname=FooMUCK\n", None, None);
		});

		let text = String::from_utf8(logs.0.lock().expect("log lock").clone()).expect("utf8");
		assert!(text.contains("Parameter 'ssl_keyfile_passwd' set"));
		assert!(!text.contains("hunter2"));
		assert!(!text.contains("swordfish"));
		assert!(text.contains("Parameter 'muckname' set to 'FooMUCK'"));
	}

	#[test]
	fn test_free_all_counts_strings() {
		let reg = registry();
		// muckname holds a string, ssl_keyfile_passwd is null
		assert_eq!(reg.free_all(), 1);
	}
}

// vim: ts=4
