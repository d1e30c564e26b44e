//! Send parameters for an OFT transfer.

use crate::errors::OftError;
use ethers::core::types::{Bytes, H256, U256};

/// The parameters for a single OFT send, in the exact order and widths the
/// contract's `SendParam` struct expects. Any deviation in field order or
/// width makes the call fail or be misinterpreted on-chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendParam {
    /// Destination endpoint id (LayerZero eid, not the chain id)
    pub dst_eid: u32,
    /// Recipient on the destination chain, left-padded to 32 bytes
    pub to: H256,
    /// Amount to send, in local decimals
    pub amount_ld: U256,
    /// Minimum amount to receive on the destination chain (slippage floor)
    pub min_amount_ld: U256,
    /// Encoded execution options for the destination-side executor
    pub extra_options: Bytes,
    /// Optional compose message executed after the transfer lands
    pub compose_msg: Bytes,
    /// Reserved for future OFT commands, always empty
    pub oft_cmd: Bytes,
}

impl SendParam {
    /// Creates a new send parameter set. The reserved `oft_cmd` field is
    /// always empty.
    pub fn new(
        dst_eid: u32,
        to: H256,
        amount_ld: U256,
        min_amount_ld: U256,
        extra_options: Bytes,
        compose_msg: Bytes,
    ) -> Self {
        Self {
            dst_eid,
            to,
            amount_ld,
            min_amount_ld,
            extra_options,
            compose_msg,
            oft_cmd: Bytes::default(),
        }
    }

    /// Returns the parameters as the ordered tuple the contract ABI expects.
    pub fn as_tuple(&self) -> (u32, H256, U256, U256, Bytes, Bytes, Bytes) {
        (
            self.dst_eid,
            self.to,
            self.amount_ld,
            self.min_amount_ld,
            self.extra_options.clone(),
            self.compose_msg.clone(),
            self.oft_cmd.clone(),
        )
    }
}

/// The fee quoted by the contract for delivering a send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessagingFee {
    /// Fee in the source chain's native currency, attached as tx value
    pub native_fee: U256,
    /// Fee in the protocol's own token, unused here (payInLzToken is false)
    pub lz_token_fee: U256,
}

/// Left-pads a byte string to exactly 32 bytes with zero bytes.
///
/// Used to widen 20-byte EVM addresses to the bytes32 recipient form the
/// OFT contract expects.
pub fn pad_to_bytes32(bytes: &[u8]) -> Result<H256, OftError> {
    if bytes.len() > 32 {
        return Err(OftError::InvalidAddress(format!(
            "Cannot pad {} bytes to bytes32",
            bytes.len()
        )));
    }

    let mut padded = [0u8; 32];
    padded[32 - bytes.len()..].copy_from_slice(bytes);

    Ok(H256::from(padded))
}

/// Parses a decimal amount string into a U256 without precision loss.
pub fn parse_amount(amount: &str) -> Result<U256, OftError> {
    U256::from_dec_str(amount.trim())
        .map_err(|e| OftError::InvalidAmount(format!("Invalid amount '{}': {}", amount, e)))
}
