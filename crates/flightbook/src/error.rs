//! Error types for flightbook.
//!
//! This module defines all error types used throughout the flightbook crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flightbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// Failed to read the flight file.
    #[error("failed to read flight file {path}: {source}")]
    FileRead {
        /// Path to the flight file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the flight file.
    #[error("failed to write flight file {path}: {source}")]
    FileWrite {
        /// Path to the flight file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The flight file does not contain valid JSON.
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        /// Path to the flight file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an array.
    #[error("{path} does not contain a flight list")]
    NotAFlightList {
        /// Path to the flight file.
        path: PathBuf,
    },

    /// A record lacks a field that the operation requires.
    #[error("flight #{number} has no '{field}' field")]
    MissingField {
        /// One-based position of the record in the file.
        number: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// Schema violations were found and strict validation is enabled.
    #[error("{path} failed schema validation ({count} violation(s))")]
    SchemaRejected {
        /// Path to the flight file.
        path: PathBuf,
        /// Number of violations found.
        count: usize,
    },

    // === Input Errors ===
    /// An option was omitted and prompting is disabled.
    #[error("missing required option '{name}'")]
    MissingArgument {
        /// Long name of the option.
        name: &'static str,
    },

    /// No flight file was given and none is configured.
    #[error("no flight file given and store.default_file is not set")]
    NoFlightFile,

    /// Reading an answer from the terminal failed.
    #[error("prompt failed: {0}")]
    Prompt(String),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Writing command output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for flightbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}

impl Error {
    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a new prompt error.
    #[must_use]
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt(message.into())
    }

    /// Create a missing field error for the record at `index` (zero-based).
    #[must_use]
    pub fn missing_field(index: usize, field: &'static str) -> Self {
        Self::MissingField {
            number: index + 1,
            field,
        }
    }

    /// Check if this error is a missing field lookup.
    #[must_use]
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    /// Check if this error came from reading or parsing the flight file.
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. } | Self::Parse { .. } | Self::NotAFlightList { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoFlightFile;
        assert_eq!(
            err.to_string(),
            "no flight file given and store.default_file is not set"
        );

        let err = Error::internal("test error");
        assert_eq!(err.to_string(), "internal error: test error");
    }

    #[test]
    fn test_missing_field_is_one_based() {
        let err = Error::missing_field(0, "plane_type");
        assert_eq!(err.to_string(), "flight #1 has no 'plane_type' field");
        assert!(err.is_missing_field());
        assert!(!Error::NoFlightFile.is_missing_field());
    }

    #[test]
    fn test_is_load_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::FileRead {
            path: PathBuf::from("/tmp/flights.json"),
            source: io_err,
        };
        assert!(err.is_load_error());
        assert!(Error::NotAFlightList {
            path: PathBuf::from("x.json")
        }
        .is_load_error());
        assert!(!Error::missing_field(2, "destination").is_load_error());
    }

    #[test]
    fn test_file_read_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::FileRead {
            path: PathBuf::from("/tmp/flights.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/flights.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_parse_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("not valid json").unwrap_err();
        let err = Error::Parse {
            path: PathBuf::from("bad.json"),
            source: json_err,
        };
        assert!(err.to_string().starts_with("invalid JSON in bad.json"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_schema_rejected_display() {
        let err = Error::SchemaRejected {
            path: PathBuf::from("flights.json"),
            count: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("flights.json"));
        assert!(msg.contains("2 violation"));
    }

    #[test]
    fn test_missing_argument_display() {
        let err = Error::MissingArgument {
            name: "destination",
        };
        assert_eq!(err.to_string(), "missing required option 'destination'");
    }

    #[test]
    fn test_prompt_error() {
        let err = Error::prompt("not a terminal");
        assert_eq!(err.to_string(), "prompt failed: not a terminal");
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "empty path".to_string(),
        };
        assert!(err.to_string().contains("empty path"));
    }
}
