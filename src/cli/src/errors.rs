//! Error types for the transfer CLI.

use oft::errors::OftError;
use std::fmt;
use std::error::Error as StdError;

/// Errors that can occur in the transfer CLI.
#[derive(Debug)]
pub enum CliError {
    /// Error when a file operation fails.
    FileError(std::io::Error),

    /// Error when JSON serialization or deserialization fails.
    JsonError(serde_json::Error),

    /// Error when required configuration is missing or invalid.
    ConfigError(String),

    /// Error when the signing key is missing from the environment or
    /// malformed.
    KeyError(String),

    /// Error when an amount is invalid.
    InvalidAmount(String),

    /// Error when an address is invalid.
    InvalidAddress(String),

    /// Error from the underlying OFT operation.
    OftError(OftError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileError(e) => write!(f, "File error: {}", e),
            CliError::JsonError(e) => write!(f, "JSON error: {}", e),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CliError::KeyError(msg) => write!(f, "Key error: {}", msg),
            CliError::InvalidAmount(msg) => write!(f, "Invalid amount: {}", msg),
            CliError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
            CliError::OftError(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for CliError {}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::FileError(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::JsonError(error)
    }
}

impl From<OftError> for CliError {
    fn from(error: OftError) -> Self {
        CliError::OftError(error)
    }
}
