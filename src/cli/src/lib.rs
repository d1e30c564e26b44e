//! CLI for submitting cross-chain OFT transfers.

pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types and functions
pub use commands::{quote, send};
pub use config::{ComposeConfig, SendConfig};
pub use errors::CliError;
