use std::fmt;

/// Result type for catview-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Catalog text could not be parsed
    Parse(catview_engine::Error),

    /// HTTP transport failure
    Http(reqwest::Error),

    /// Resource answered with a non-success status
    Status { location: String, status: u16 },

    /// IO operation failed
    Io(std::io::Error),

    /// Resource location could not be understood
    InvalidLocation(String),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "Catalog parse error: {}", err),
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Status { location, status } => {
                write!(f, "Request to {} failed with status {}", location, status)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::InvalidLocation(msg) => write!(f, "Invalid resource location: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Status { .. } | Error::InvalidLocation(_) | Error::Config(_) => None,
        }
    }
}

impl From<catview_engine::Error> for Error {
    fn from(err: catview_engine::Error) -> Self {
        Error::Parse(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
