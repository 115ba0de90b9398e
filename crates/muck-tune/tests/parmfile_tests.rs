//! Parameter file and `@tune` command flows over the full table

mod common;

use std::fs::File;
use std::io::{BufReader, BufWriter};

use muck_tune::{FileRequest, LoadReport, NotifyTarget, TuneCommand};
use muck_types::types::{Dbref, MuckerLevel};
use tempfile::TempDir;

use common::full_registry;

#[test]
fn test_file_round_trip_restores_state() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let path = temp_dir.path().join("parmfile.cfg");

	let (mut reg, _world) = full_registry();
	reg.set_parameter(MuckerLevel::God, "dump_interval", "3600").expect("set");
	reg.set_parameter(MuckerLevel::God, "muckname", "FooMUCK").expect("set");
	reg.set_parameter(MuckerLevel::God, "playermax", "yes").expect("set");
	reg.set_parameter(MuckerLevel::God, "ssl_keyfile_passwd", "hunter2").expect("set");

	let file = File::create(&path).expect("Failed to create parameter file");
	reg.save_to_sink(BufWriter::new(file)).expect("save");

	let (mut fresh, _world) = full_registry();
	let file = File::open(&path).expect("Failed to open parameter file");
	let report = fresh.load_from_source(BufReader::new(file), None, None).expect("load");

	assert_eq!(report.lines_read, reg.count());
	assert_eq!(report.applied, 4);
	assert_eq!(report.reset, reg.count() - 4);
	assert_eq!(report.failed, 0);
	for (a, b) in fresh.entries().zip(reg.entries()) {
		assert_eq!(a.value(), b.value(), "{}", a.name());
		assert_eq!(a.is_default(), b.is_default(), "{}", a.name());
	}
}

#[test]
fn test_default_file_loads_as_all_resets() {
	let (reg, _world) = full_registry();
	let text = reg.save_to_string();
	assert!(text.lines().all(|l| l.starts_with('%')));
	assert!(text.lines().any(|l| l == "%dump_interval=900"));

	let (mut fresh, _world) = full_registry();
	let report = fresh.load_from_str(&text, None, None);
	assert_eq!(report, LoadReport { lines_read: reg.count(), reset: reg.count(), ..Default::default() });
	assert!(fresh.entries().all(|e| e.is_default()));
}

#[test]
fn test_load_reports_each_line_to_player() {
	let (mut reg, world) = full_registry();
	let text = "# tuned by hand\nmax_pennies=5000\nplayer_start=#1\nno equals here\n";
	let target = NotifyTarget { notifier: world.as_ref(), player: Dbref(1) };

	let report = reg.load_from_str(text, Some(target), None);
	assert_eq!(report.applied, 1);
	assert_eq!(report.failed, 1);
	assert_eq!(report.ignored, 1);
	assert_eq!(
		world.messages_for(Dbref(1)),
		vec![
			"max_pennies: Parameter set.".to_string(),
			"player_start: Bad parameter value.".to_string(),
			"Ignored line 4.".to_string(),
		]
	);
}

#[test]
fn test_load_ignores_caller_level() {
	let (mut reg, _world) = full_registry();
	// file_parameters is God-only for writes
	reg.load_from_str("file_parameters=data/other.cfg\n", None, None);
	assert_eq!(reg.get_str("file_parameters"), Some("data/other.cfg"));
}

#[test]
fn test_tune_command_session() {
	let (mut reg, _world) = full_registry();

	let reply = reg.execute(MuckerLevel::Wizard, &TuneCommand::parse("max_pennies=20000"));
	assert_eq!(reply.lines, vec!["Parameter set."]);
	assert!(reply.changed);

	let lines = reg.display("max_pennies", MuckerLevel::Mortal);
	assert_eq!(lines.len(), 3);
	assert_eq!(lines[0], "Currency:");
	assert!(lines[1].ends_with("= 20000  [custom]"));

	let reply = reg.execute(MuckerLevel::Wizard, &TuneCommand::parse("save"));
	assert_eq!(reply.file, Some(FileRequest::Save("data/parmfile.cfg".to_string())));

	let reply = reg.execute(MuckerLevel::Mortal, &TuneCommand::parse("%max_pennies"));
	assert_eq!(reply.lines, vec!["Permission denied."]);
	assert_eq!(reg.get_int("max_pennies"), Some(20000));
}

// vim: ts=4
