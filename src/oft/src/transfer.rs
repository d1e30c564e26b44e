//! Quote-then-send orchestration.

use crate::errors::OftError;
use crate::params::{MessagingFee, SendParam};
use async_trait::async_trait;
use ethers::core::types::{Address as EthAddress, TxHash};
use tracing::info;

/// The two remote calls an OFT transfer needs. Implemented by [`OftSender`]
/// against a live node; tests substitute a stub.
///
/// [`OftSender`]: crate::sender::OftSender
#[async_trait]
pub trait OftEndpoint {
    /// Quotes the messaging fee for the send.
    async fn quote_send(
        &self,
        param: &SendParam,
        pay_in_lz_token: bool,
    ) -> Result<MessagingFee, OftError>;

    /// Signs and submits the send, attaching the native fee as value.
    async fn send(
        &self,
        param: &SendParam,
        fee: &MessagingFee,
        refund_address: EthAddress,
    ) -> Result<TxHash, OftError>;
}

/// The result of a submitted transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOutcome {
    /// The fee that was quoted and attached
    pub fee: MessagingFee,
    /// Hash of the submitted transaction
    pub tx_hash: TxHash,
}

/// Submits one transfer: quote the fee, then send with exactly that fee.
///
/// Strictly sequential. A failed quote propagates immediately and the send
/// is never attempted. Nothing is retried.
pub async fn submit_transfer<E: OftEndpoint>(
    endpoint: &E,
    param: &SendParam,
    refund_address: EthAddress,
) -> Result<TransferOutcome, OftError> {
    let fee = endpoint.quote_send(param, false).await?;
    info!(
        "Quoted fee for eid {}: {} wei native",
        param.dst_eid, fee.native_fee
    );

    let tx_hash = endpoint.send(param, &fee, refund_address).await?;
    info!("Transfer submitted: {:?}", tx_hash);

    Ok(TransferOutcome { fee, tx_hash })
}
