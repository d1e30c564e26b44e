//! LayerZero v2 OFT transfers for the cross-chain send tool.
//!
//! This crate provides the functionality to build an OFT `SendParam`, quote
//! the native fee for delivering it, and submit the transfer transaction.

pub mod bindings;
pub mod compose;
pub mod errors;
pub mod options;
pub mod params;
pub mod sender;
pub mod transfer;
