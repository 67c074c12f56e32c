use std::fmt;

/// Result type for histodiff operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while comparing histograms
#[derive(Debug)]
pub enum Error {
    /// IO operation failed (local input could not be read)
    Io(std::io::Error),

    /// Remote input could not be fetched
    Fetch { url: String, message: String },

    /// Optional numeric argument is not a valid integer
    InvalidArgument { name: &'static str, value: String },

    /// Metric selector is an integer that does not index into the metric vector
    SelectorOutOfRange { selector: String, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Fetch { url, message } => write!(f, "Failed to fetch {}: {}", url, message),
            Error::InvalidArgument { name, value } => {
                write!(
                    f,
                    "Invalid {}: '{}' is not a valid non-negative integer",
                    name, value
                )
            }
            Error::SelectorOutOfRange { selector, len } => write!(
                f,
                "Metric selector {} out of range (expected 0..{})",
                selector, len
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Fetch { .. } | Error::InvalidArgument { .. } | Error::SelectorOutOfRange { .. } => {
                None
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
