//! Error types for the beyondgdp library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for loading and configuration.
///
/// Question resolution never produces one of these; see
/// [`QueryResult::ClarificationNeeded`](crate::QueryResult::ClarificationNeeded).
#[derive(Debug, Error)]
pub enum BeyondGdpError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A cell could not be converted to the type its column requires.
    #[error("Parse error at row {row}, column {column}: {message}")]
    Parse {
        row: usize,
        column: usize,
        message: String,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Empty file or no data to load.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML configuration could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for beyondgdp operations.
pub type Result<T> = std::result::Result<T, BeyondGdpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_errors_convert() {
        let err: BeyondGdpError = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert!(matches!(err, BeyondGdpError::Toml(_)));
        assert!(err.to_string().starts_with("TOML error:"));
    }

    #[test]
    fn test_parse_error_names_the_cell() {
        let err = BeyondGdpError::Parse {
            row: 3,
            column: 1,
            message: "bad year".into(),
        };
        assert_eq!(err.to_string(), "Parse error at row 3, column 1: bad year");
    }
}
