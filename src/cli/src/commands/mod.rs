//! Commands for the transfer CLI.

pub mod quote;
pub mod send;

use crate::config::SendConfig;
use crate::errors::CliError;
use ethers::core::types::{Address as EthAddress, Bytes, U256};
use oft::compose::encode_compose_msg;
use oft::options::Options;
use oft::params::{pad_to_bytes32, SendParam};
use std::str::FromStr;

/// Builds the send parameters for the configured call shape.
///
/// With a `compose` block in the config the transfer is addressed to the hop
/// contract, carries compose gas in its options, and embeds the final
/// recipient and endpoint in the compose message. Without one it is a basic
/// send straight to the recipient.
pub fn build_send_param(
    config: &SendConfig,
    signer_address: EthAddress,
    amount: U256,
    min_amount: U256,
    to_override: Option<&str>,
) -> Result<SendParam, CliError> {
    // The recipient defaults to the signing account
    let recipient = match to_override {
        Some(to) => EthAddress::from_str(to)
            .map_err(|e| CliError::InvalidAddress(format!("Invalid recipient address: {}", e)))?,
        None => signer_address,
    };

    let param = match &config.compose {
        Some(compose) => {
            let hop = EthAddress::from_str(&compose.hop_address).map_err(|e| {
                CliError::ConfigError(format!(
                    "Invalid compose hop address '{}': {}",
                    compose.hop_address, e
                ))
            })?;
            if hop == EthAddress::zero() {
                return Err(CliError::ConfigError(
                    "Compose hop address must not be the zero address".to_string(),
                ));
            }

            let to = pad_to_bytes32(hop.as_bytes())?;
            let options = Options::new()
                .add_executor_compose_option(0, compose.gas_limit, 0)
                .build();
            let recipient_bytes32 = pad_to_bytes32(recipient.as_bytes())?;
            let compose_msg = encode_compose_msg(recipient_bytes32, compose.hop_eid);

            SendParam::new(config.dst_eid, to, amount, min_amount, options, compose_msg)
        }
        None => {
            let to = pad_to_bytes32(recipient.as_bytes())?;
            let options = Options::new().build();

            SendParam::new(
                config.dst_eid,
                to,
                amount,
                min_amount,
                options,
                Bytes::default(),
            )
        }
    };

    Ok(param)
}
