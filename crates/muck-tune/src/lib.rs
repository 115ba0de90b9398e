//! Runtime-tunable parameter registry.
//!
//! Privileged users change server parameters (timers, costs, limits, toggles,
//! file paths, object references) while the server runs, and the changes
//! survive restarts through the parameter file.
//!
//! # Architecture
//!
//! - **Entries** (`entry.rs`): table rows and the typed current/default slot
//! - **Codec** (`codec.rs`): text parsing and formatting per value type
//! - **Registry** (`registry.rs`): lookup, set, reset, defaults, typed reads
//! - **Persistence** (`persist.rs`): the line-oriented parameter file
//! - **Snapshot** (`snapshot.rs`): filtered records for the script runtime
//! - **Flags** (`flags.rs`): flag strings such as `pcreate_flags`
//! - **Command** (`command.rs`): the `@tune` front end
//!
//! # Access levels
//!
//! Every parameter has a read level and a write level, checked separately.
//! A caller below the read level sees empty text; below the write level, a
//! set is denied and nothing changes.

#![forbid(unsafe_code)]

pub mod codec;
pub mod command;
pub mod entry;
pub mod flags;
pub mod pattern;
pub mod persist;
pub mod prelude;
pub mod registry;
pub mod result;
pub mod snapshot;
pub mod tunelist;

pub use command::{FileRequest, TuneCommand, TuneReply};
pub use entry::{TuneDef, TuneEntry, TuneType, TuneValue};
pub use persist::{LoadReport, NotifyTarget};
pub use registry::{TuneOptions, TuneRegistry};
pub use result::{SetError, SetOutcome, SetResult};
pub use snapshot::TuneRecord;

// vim: ts=4
