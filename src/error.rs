//! Error types for WordMaster.

use std::fmt;
use std::io;

/// Result type alias for WordMaster operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for WordMaster operations.
///
/// Statistic functions never fail. These variants come from goal parsing,
/// summarizing, and the persistence/export helpers.
#[derive(Debug)]
pub enum Error {
    /// Word goal was not a positive integer. Holds the rejected input.
    InvalidGoal(String),
    /// Summarizing was skipped because the text is already short.
    AlreadyShort { sentences: usize },
    /// An action that needs text was given blank text.
    EmptyText,
    /// I/O error while reading input or writing an export.
    Io(io::Error),
    /// Saved-text record could not be encoded or decoded.
    Json(serde_json::Error),
}

impl Error {
    /// Whether this is a status the caller can show and move on from.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidGoal(_) | Self::AlreadyShort { .. } | Self::EmptyText
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGoal(input) => {
                write!(f, "invalid word goal: {input:?} (expected a positive number)")
            }
            Self::AlreadyShort { sentences } => {
                write!(f, "text is already short ({sentences} sentences)")
            }
            Self::EmptyText => write!(f, "no text"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidGoal("abc".to_string());
        assert!(err.to_string().contains("invalid word goal"));
        assert!(err.to_string().contains("\"abc\""));

        let err = Error::AlreadyShort { sentences: 2 };
        assert_eq!(err.to_string(), "text is already short (2 sentences)");

        assert_eq!(Error::EmptyText.to_string(), "no text");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_recoverable() {
        assert!(Error::InvalidGoal(String::new()).is_recoverable());
        assert!(Error::AlreadyShort { sentences: 1 }.is_recoverable());
        assert!(Error::EmptyText.is_recoverable());
    }
}
