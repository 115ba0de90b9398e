//! Error type shared by the MUCK crates

pub type MuckResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	PermissionDenied,
	Parse,
	ConfigError(String),
	ValidationError(String),

	// externals
	Io(std::io::Error),
	Json(serde_json::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Json(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::Parse => write!(f, "parse error"),
			Error::ConfigError(msg) => write!(f, "config error: {}", msg),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
			Error::Json(err) => write!(f, "json error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			Error::Json(err) => Some(err),
			_ => None,
		}
	}
}

// vim: ts=4
