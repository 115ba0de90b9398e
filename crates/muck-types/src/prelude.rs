pub use crate::error::{Error, MuckResult};
pub use crate::types::{Dbref, MuckerLevel, ObjectFlags, ObjectKind, TypeRestriction};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
