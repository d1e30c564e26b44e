//! Integration tests for the cross-chain OFT transfer tool.

pub mod config_tests;
pub mod options_tests;
pub mod transfer_tests;
