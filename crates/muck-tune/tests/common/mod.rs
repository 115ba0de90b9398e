//! Shared setup for registry integration tests

use std::sync::Arc;

use muck_tune::{TuneOptions, TuneRegistry};
use muck_types::object_model::MemWorld;

/// Full parameter table over the minimal world (#0 room, #1 player)
pub fn full_registry() -> (TuneRegistry, Arc<MemWorld>) {
	let world = Arc::new(MemWorld::minimal());
	let registry =
		TuneRegistry::new(world.clone(), TuneOptions::default()).expect("Failed to build registry");
	(registry, world)
}

// vim: ts=4
