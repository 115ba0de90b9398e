//! One tunectl session: load, run commands, write back

use std::io;
use std::path::Path;
use std::sync::Arc;

use muck_tune::{FileRequest, NotifyTarget, TuneCommand, TuneOptions, TuneRegistry};
use muck_types::object_model::MemWorld;
use muck_types::prelude::*;

use crate::config::Config;

/// Player that load reports are delivered to
const OPERATOR: Dbref = Dbref(1);

#[derive(Debug, Default)]
pub struct Session {
	/// Output lines, in command order
	pub lines: Vec<String>,
	/// Full snapshot, when requested
	pub snapshot: Option<serde_json::Value>,
	/// True if the parameter file was rewritten
	pub written: bool,
}

/// Read a file, treating a missing file as `None`
async fn read_optional(path: &Path) -> MuckResult<Option<String>> {
	match tokio::fs::read_to_string(path).await {
		Ok(text) => Ok(Some(text)),
		Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
		Err(err) => Err(err.into()),
	}
}

async fn write_parmfile(registry: &TuneRegistry, path: &Path) -> MuckResult<()> {
	if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
		tokio::fs::create_dir_all(dir).await?;
	}
	tokio::fs::write(path, registry.save_to_string()).await?;
	info!("Wrote parameter file {}", path.display());
	Ok(())
}

pub async fn run(config: &Config, commands: &[String], json: bool) -> MuckResult<Session> {
	let world = Arc::new(MemWorld::minimal());
	let options = TuneOptions { active_modules: config.modules.clone() };
	let mut registry = TuneRegistry::new(world.clone(), options)?;
	let mut session = Session::default();

	match read_optional(&config.parmfile).await? {
		Some(text) => {
			registry.load_from_str(&text, None, None);
		}
		None => info!("No parameter file at {}, using defaults", config.parmfile.display()),
	}

	let mut changed = false;
	for arg in commands {
		let reply = registry.execute(config.level, &TuneCommand::parse(arg));
		session.lines.extend(reply.lines);
		changed |= reply.changed;

		match reply.file {
			Some(FileRequest::Save(path)) => {
				let path = Path::new(&path);
				write_parmfile(&registry, path).await?;
				session.written |= path == config.parmfile;
				session.lines.push("Parameters saved.".to_string());
			}
			Some(FileRequest::Load(path)) => {
				let Some(text) = read_optional(Path::new(&path)).await? else {
					session.lines.push(format!("Cannot read {}.", path));
					continue;
				};
				let target = NotifyTarget { notifier: world.as_ref(), player: OPERATOR };
				let report = registry.load_from_str(&text, Some(target), None);
				session.lines.extend(world.take_messages().into_iter().map(|(_, msg)| msg));
				changed |= report.applied + report.reset > 0;
			}
			None => {}
		}
	}

	if changed && !session.written {
		write_parmfile(&registry, &config.parmfile).await?;
		session.written = true;
	}

	if json {
		session.snapshot = Some(registry.build_snapshot("", config.level, false).to_json()?);
	}

	Ok(session)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;
	use tempfile::TempDir;

	fn config(dir: &TempDir, level: MuckerLevel) -> Config {
		Config {
			parmfile: dir.path().join("parmfile.cfg"),
			level,
			modules: HashSet::new(),
		}
	}

	fn args(list: &[&str]) -> Vec<String> {
		list.iter().map(|s| (*s).to_string()).collect()
	}

	#[tokio::test]
	async fn test_missing_file_lists_defaults() {
		let temp_dir = TempDir::new().expect("Failed to create temp directory");
		let config = config(&temp_dir, MuckerLevel::God);

		let session = run(&config, &args(&["max_pennies"]), false).await.expect("run");
		assert_eq!(session.lines.len(), 3);
		assert!(session.lines[1].ends_with("= 10000"));
		assert!(!session.written);
		assert!(!config.parmfile.exists());
	}

	#[tokio::test]
	async fn test_set_writes_back_and_persists() {
		let temp_dir = TempDir::new().expect("Failed to create temp directory");
		let config = config(&temp_dir, MuckerLevel::God);

		let session =
			run(&config, &args(&["dump_interval=3600", "muckname=FooMUCK"]), false).await.expect("run");
		assert_eq!(session.lines, vec!["Parameter set.", "Parameter set."]);
		assert!(session.written);

		let text = tokio::fs::read_to_string(&config.parmfile).await.expect("read");
		assert!(text.lines().any(|l| l == "dump_interval=3600"));
		assert!(text.lines().any(|l| l == "%max_pennies=10000"));

		let session = run(&config, &args(&["muckname"]), false).await.expect("run");
		assert!(session.lines[1].contains("= FooMUCK  [custom]"));
		assert!(!session.written);
	}

	#[tokio::test]
	async fn test_denied_set_does_not_write() {
		let temp_dir = TempDir::new().expect("Failed to create temp directory");
		let config = config(&temp_dir, MuckerLevel::Mortal);

		let session = run(&config, &args(&["max_pennies=1", "save"]), false).await.expect("run");
		assert_eq!(session.lines, vec!["Permission denied.", "Permission denied."]);
		assert!(!session.written);
		assert!(!config.parmfile.exists());
	}

	#[tokio::test]
	async fn test_load_reports_lines() {
		let temp_dir = TempDir::new().expect("Failed to create temp directory");
		let config = config(&temp_dir, MuckerLevel::God);
		let extra = temp_dir.path().join("extra.cfg");
		tokio::fs::write(&extra, "max_pennies=42\nbogus=1\n").await.expect("write");

		let set_path = format!("file_parameters={}", extra.display());
		let session = run(&config, &args(&[set_path.as_str(), "load"]), false).await.expect("run");
		assert_eq!(
			session.lines,
			vec![
				"Parameter set.",
				"Loading parameters.",
				"max_pennies: Parameter set.",
				"bogus: Unknown parameter.",
			]
		);
		assert!(session.written);
		let text = tokio::fs::read_to_string(&config.parmfile).await.expect("read");
		assert!(text.lines().any(|l| l == "max_pennies=42"));
	}

	#[tokio::test]
	async fn test_json_snapshot_respects_level() {
		let temp_dir = TempDir::new().expect("Failed to create temp directory");
		let god = run(&config(&temp_dir, MuckerLevel::God), &[], true).await.expect("run");
		let mortal = run(&config(&temp_dir, MuckerLevel::Mortal), &[], true).await.expect("run");

		let count = |s: &Session| s.snapshot.as_ref().and_then(|v| v.as_array()).map_or(0, Vec::len);
		assert!(count(&god) > count(&mortal));
		assert!(count(&mortal) > 0);
	}
}

// vim: ts=4
