//! Shared types and collaborator traits for MUCK server subsystems.
//!
//! The registry crates never own the world database, the script runtime or the
//! connection layer. They talk to those through the small surface defined here:
//! object identity (`Dbref`), privilege ranking (`MuckerLevel`), the object
//! model and notification traits, and the packed array handed to scripts.

#![forbid(unsafe_code)]

pub mod array;
pub mod error;
pub mod object_model;
pub mod prelude;
pub mod types;

// vim: ts=4
