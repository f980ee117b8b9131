use thiserror::Error;

/// The primary error type for the `jacdac-status-lib` library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid numeric argument '{input}': {reason}")]
    InvalidNumber { input: String, reason: String },

    #[error("start index out of range: {start} is not within 0..{capacity}")]
    StartOutOfRange { start: usize, capacity: usize },

    #[error("unknown flag layout '{0}' (expected one of: decoder, capture)")]
    UnknownLayout(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_number(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidNumber {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
