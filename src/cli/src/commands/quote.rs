//! Quote command for the transfer CLI.

use crate::commands::build_send_param;
use crate::config::SendConfig;
use crate::errors::CliError;
use ethers::core::types::U256;
use oft::sender::new_sender_with_wallet;
use oft::transfer::OftEndpoint;
use tracing::info;

/// Runs the quote command: builds the send parameters and asks the contract
/// for the native fee, without submitting anything.
pub async fn run(
    config: &SendConfig,
    private_key: &str,
    amount: U256,
    min_amount: U256,
    to: Option<&str>,
) -> Result<String, CliError> {
    let sender =
        new_sender_with_wallet(&config.rpc_url, &config.oft_address, private_key).await?;

    let param = build_send_param(config, sender.signer_address(), amount, min_amount, to)?;
    info!(
        "Quoting send of {} to eid {} via {}",
        amount, param.dst_eid, config.oft_address
    );

    let fee = sender.quote_send(&param, false).await?;

    Ok(format!(
        "Native fee for sending {} to eid {}: {} wei",
        amount, param.dst_eid, fee.native_fee
    ))
}
