use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WordCountError>;

/// Coarse classification of a [`WordCountError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input had the wrong type. Only raised where untyped data enters.
    Type,
    /// The input had the right type but an unusable value.
    Value,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Type => write!(f, "type error"),
            ErrorKind::Value => write!(f, "value error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordCountError {
    #[error("String must be of type str")]
    NotText,
    #[error("String must be at least of length 1")]
    EmptyString,
    /// Carries the lowercased word that was looked up.
    #[error("Word is not in string")]
    WordNotFound { word: String },
    #[error("n must be of type int")]
    CountNotInteger,
    #[error("n must be a positive integer > 0")]
    NonPositiveCount,
}

impl WordCountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WordCountError::NotText | WordCountError::CountNotInteger => ErrorKind::Type,
            WordCountError::EmptyString
            | WordCountError::WordNotFound { .. }
            | WordCountError::NonPositiveCount => ErrorKind::Value,
        }
    }
}
