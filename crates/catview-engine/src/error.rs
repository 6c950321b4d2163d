use std::fmt;

/// Result type for catview-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning catalog text into records
#[derive(Debug)]
pub enum Error {
    /// Malformed catalog row (field count mismatch, bad quoting, invalid UTF-8)
    Csv(csv::Error),
    /// A quoted field opened on `line` never closes before end of input
    UnterminatedQuote { line: u64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Csv(err) => write!(f, "{}", err),
            Error::UnterminatedQuote { line } => {
                write!(f, "quoted field starting on line {} is never closed", line)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Csv(err) => Some(err),
            Error::UnterminatedQuote { .. } => None,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
