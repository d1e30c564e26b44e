//! Send command for the transfer CLI.

use crate::commands::build_send_param;
use crate::config::SendConfig;
use crate::errors::CliError;
use ethers::core::types::U256;
use oft::sender::new_sender_with_wallet;
use oft::transfer::submit_transfer;
use tracing::info;

/// Runs the send command: quotes the fee, then submits the transfer with
/// that fee attached. The signing account is the refund address.
pub async fn run(
    config: &SendConfig,
    private_key: &str,
    amount: U256,
    min_amount: U256,
    to: Option<&str>,
) -> Result<String, CliError> {
    let sender =
        new_sender_with_wallet(&config.rpc_url, &config.oft_address, private_key).await?;
    let refund_address = sender.signer_address();

    let param = build_send_param(config, refund_address, amount, min_amount, to)?;
    info!(
        "Sending {} to eid {} via {}",
        amount, param.dst_eid, config.oft_address
    );

    let outcome = submit_transfer(&sender, &param, refund_address).await?;

    Ok(format!(
        "Sent {} to eid {} with fee {} wei. Transaction hash: {:?}",
        amount, param.dst_eid, outcome.fee.native_fee, outcome.tx_hash
    ))
}
