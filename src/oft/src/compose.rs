//! Codec for the compose message attached to a send.
//!
//! The hop contract on the destination chain expects an ABI-encoded
//! `(bytes32 recipient, uint32 dstEid)` pair telling it where to forward
//! the tokens after the primary transfer lands.

use crate::errors::OftError;
use ethers::abi::{self, ParamType, Token};
use ethers::core::types::{Bytes, H256, U256};

/// Encodes a compose message instructing a follow-on hop to `dst_eid` for
/// `recipient`.
pub fn encode_compose_msg(recipient: H256, dst_eid: u32) -> Bytes {
    let encoded = abi::encode(&[
        Token::FixedBytes(recipient.as_bytes().to_vec()),
        Token::Uint(U256::from(dst_eid)),
    ]);

    Bytes::from(encoded)
}

/// Decodes a compose message back into its recipient and destination eid.
pub fn decode_compose_msg(data: &[u8]) -> Result<(H256, u32), OftError> {
    let tokens = abi::decode(&[ParamType::FixedBytes(32), ParamType::Uint(32)], data)
        .map_err(|e| OftError::InvalidComposeMsg(format!("Failed to decode: {}", e)))?;

    let recipient = match &tokens[0] {
        Token::FixedBytes(bytes) if bytes.len() == 32 => H256::from_slice(bytes),
        other => {
            return Err(OftError::InvalidComposeMsg(format!(
                "Unexpected recipient token: {:?}",
                other
            )));
        }
    };

    let dst_eid = match &tokens[1] {
        Token::Uint(value) => {
            if *value > U256::from(u32::MAX) {
                return Err(OftError::InvalidComposeMsg(format!(
                    "Destination eid out of range: {}",
                    value
                )));
            }
            value.as_u32()
        }
        other => {
            return Err(OftError::InvalidComposeMsg(format!(
                "Unexpected eid token: {:?}",
                other
            )));
        }
    };

    Ok((recipient, dst_eid))
}
