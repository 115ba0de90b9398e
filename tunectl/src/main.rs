//! tunectl: edit a MUCK parameter file from the command line
//!
//! ```text
//! tunectl [--json] [COMMAND...]
//! ```
//!
//! Each COMMAND is an `@tune` argument (`name=value`, `%name`, a pattern,
//! `save`, `load` or `restore`) run at `TUNE_LEVEL` against `TUNE_PARMFILE`.

#![forbid(unsafe_code)]

mod config;
mod run;

use std::process::ExitCode;

use muck_types::prelude::*;

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();

	let mut json = false;
	let mut commands = Vec::new();
	for arg in std::env::args().skip(1) {
		if arg == "--json" {
			json = true;
		} else {
			commands.push(arg);
		}
	}

	let config = match Config::from_env() {
		Ok(config) => config,
		Err(err) => {
			error!("Configuration error: {}", err);
			return ExitCode::FAILURE;
		}
	};

	match run::run(&config, &commands, json).await {
		Ok(session) => {
			for line in &session.lines {
				println!("{}", line);
			}
			if let Some(snapshot) = session.snapshot {
				match serde_json::to_string_pretty(&snapshot) {
					Ok(text) => println!("{}", text),
					Err(err) => {
						error!("Snapshot encoding failed: {}", err);
						return ExitCode::FAILURE;
					}
				}
			}
			ExitCode::SUCCESS
		}
		Err(err) => {
			error!("tunectl failed: {}", err);
			ExitCode::FAILURE
		}
	}
}

// vim: ts=4
