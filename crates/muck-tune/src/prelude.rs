pub use muck_types::error::{Error, MuckResult};
pub use muck_types::types::{Dbref, MuckerLevel, ObjectFlags, ObjectKind, TypeRestriction};

pub use tracing::{debug, info, warn};

// vim: ts=4
