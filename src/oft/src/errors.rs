/// Error types for the oft crate.
use std::fmt;
use std::error::Error as StdError;

/// Errors that can occur in the oft crate.
#[derive(Debug)]
pub enum OftError {
    /// Error when required configuration is missing or malformed.
    Configuration(String),

    /// Error when a read-only remote call fails (node unreachable, bad
    /// contract address, contract-side revert during the fee quote).
    RemoteCall(String),

    /// Error when submitting the transfer transaction fails.
    Submission(String),

    /// Error when an Ethereum provider operation fails.
    Ethereum(String),

    /// Error when a signing key or signature operation fails.
    Signature(String),

    /// Error when an address is invalid.
    InvalidAddress(String),

    /// Error when an amount is invalid.
    InvalidAmount(String),

    /// Error when a compose message cannot be decoded.
    InvalidComposeMsg(String),
}

impl fmt::Display for OftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OftError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            OftError::RemoteCall(msg) => write!(f, "Remote call error: {}", msg),
            OftError::Submission(msg) => write!(f, "Submission error: {}", msg),
            OftError::Ethereum(msg) => write!(f, "Ethereum error: {}", msg),
            OftError::Signature(msg) => write!(f, "Signature error: {}", msg),
            OftError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
            OftError::InvalidAmount(msg) => write!(f, "Invalid amount: {}", msg),
            OftError::InvalidComposeMsg(msg) => write!(f, "Invalid compose message: {}", msg),
        }
    }
}

impl StdError for OftError {}
