//! Builder for LayerZero v2 execution options.
//!
//! Options tell the destination-side executor how much gas (and optionally
//! native value) to spend when delivering the message. The wire format is
//! the type-3 options encoding: a `0x0003` header followed by zero or more
//! worker options, each laid out as
//! `[worker_id u8][option_size u16][option_type u8][params]` with all
//! integers big-endian.

use ethers::core::types::Bytes;

/// Type-3 options header.
const OPTIONS_TYPE_3: u16 = 3;

/// Worker id of the executor.
const WORKER_ID_EXECUTOR: u8 = 1;

/// Executor option type for `lzReceive` gas.
const OPTION_TYPE_LZRECEIVE: u8 = 1;

/// Executor option type for `lzCompose` gas.
const OPTION_TYPE_COMPOSE: u8 = 3;

/// Builder for a type-3 execution options byte string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    buf: Vec<u8>,
}

impl Options {
    /// Creates an empty options set: just the type-3 header, no worker
    /// options. This is what a basic send without a compose hop uses.
    pub fn new() -> Self {
        Self {
            buf: OPTIONS_TYPE_3.to_be_bytes().to_vec(),
        }
    }

    /// Adds an executor option granting `gas` (and `value` native currency,
    /// if non-zero) to the destination-side `lzReceive` call.
    pub fn add_executor_lz_receive_option(mut self, gas: u128, value: u128) -> Self {
        let mut params = gas.to_be_bytes().to_vec();
        if value > 0 {
            params.extend_from_slice(&value.to_be_bytes());
        }
        self.push_executor_option(OPTION_TYPE_LZRECEIVE, &params);
        self
    }

    /// Adds an executor option granting `gas` (and `value`, if non-zero) to
    /// the `lzCompose` call for the compose message at `index`.
    pub fn add_executor_compose_option(mut self, index: u16, gas: u128, value: u128) -> Self {
        let mut params = index.to_be_bytes().to_vec();
        params.extend_from_slice(&gas.to_be_bytes());
        if value > 0 {
            params.extend_from_slice(&value.to_be_bytes());
        }
        self.push_executor_option(OPTION_TYPE_COMPOSE, &params);
        self
    }

    /// Finishes the builder, returning the encoded options.
    pub fn build(self) -> Bytes {
        Bytes::from(self.buf)
    }

    fn push_executor_option(&mut self, option_type: u8, params: &[u8]) {
        // option_size covers the type byte plus the params
        let option_size = (params.len() + 1) as u16;

        self.buf.push(WORKER_ID_EXECUTOR);
        self.buf.extend_from_slice(&option_size.to_be_bytes());
        self.buf.push(option_type);
        self.buf.extend_from_slice(params);
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
