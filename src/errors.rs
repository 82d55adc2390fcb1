//! Error types for sentence_rank
//!
//! This module defines the error types used throughout the library.
//! All failures are reported synchronously to the caller of `summarize`.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummaryError>;

/// Main error type for sentence_rank
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummaryError {
    /// No sentences were supplied
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// More sentences were requested than are available
    #[error("Out of range: requested {requested} sentences but only {available} available")]
    OutOfRange { requested: usize, available: usize },

    /// The similarity matrix does not match the sentence count
    #[error("Dimension mismatch: {sentences} sentences but a {matrix}x{matrix} similarity matrix")]
    DimensionMismatch { sentences: usize, matrix: usize },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SummaryError {
    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(requested: usize, available: usize) -> Self {
        Self::OutOfRange {
            requested,
            available,
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(sentences: usize, matrix: usize) -> Self {
        Self::DimensionMismatch { sentences, matrix }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error was caused by the caller asking for too many sentences
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SummaryError::empty_input("no sentences provided");
        assert!(err.to_string().contains("Empty input"));
        assert!(err.to_string().contains("no sentences provided"));

        let err = SummaryError::out_of_range(5, 3);
        assert!(err.to_string().contains("requested 5"));
        assert!(err.to_string().contains("only 3"));
    }

    #[test]
    fn test_is_out_of_range() {
        let err = SummaryError::out_of_range(4, 2);
        assert!(err.is_out_of_range());

        let err = SummaryError::empty_input("test");
        assert!(!err.is_out_of_range());
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: SummaryError = parse_err.into();
        assert!(matches!(err, SummaryError::Serialization { .. }));
    }
}
