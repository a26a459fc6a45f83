//! Error types for Tessera.
//!
//! Persistence failures inside the store are values in the root state
//! ([`OperationError`]); they only become a [`TesseraError`] when a command
//! line invocation finishes with the error slot set.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::store::OperationError;

/// Errors that end a command line invocation.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum TesseraError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// The application configuration could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// IO error outside the store.
    #[error("IO error: {0}")]
    IoError(String),
    /// A save, load or export failed.
    #[error("{0}")]
    Operation(OperationError),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<std::io::Error> for TesseraError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for TesseraError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<ConfigError> for TesseraError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<OperationError> for TesseraError {
    fn from(err: OperationError) -> Self { Self::Operation(err) }
}

impl From<String> for TesseraError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for TesseraError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Domain;

    #[test]
    fn test_invalid_arguments_display() {
        let err = TesseraError::InvalidArguments("Unknown domain 'dock'".to_string());
        assert_eq!(err.to_string(), "Unknown domain 'dock'");
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err: TesseraError = io_err.into();
        assert!(matches!(err, TesseraError::IoError(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: TesseraError = ConfigError::NotFound.into();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_operation_error_passes_message_through() {
        let err: TesseraError = OperationError::export(Domain::Hotkey, "read-only").into();
        assert_eq!(err.to_string(), "failed to export hotkey settings: read-only");
    }

    #[test]
    fn test_from_str() {
        let err: TesseraError = "boom".into();
        assert!(matches!(err, TesseraError::CommandError(_)));
    }

    #[test]
    fn test_error_serializes_with_kind() {
        let err = TesseraError::from(OperationError::load(Domain::Animation, "bad json"));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "Operation");
        assert_eq!(json["message"]["domain"], "animation");
    }
}
