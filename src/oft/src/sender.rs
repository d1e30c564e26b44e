//! Quote and submission against a deployed OFT contract.

use crate::bindings::OftContract;
use crate::errors::OftError;
use crate::params::{MessagingFee, SendParam};
use crate::transfer::OftEndpoint;
use async_trait::async_trait;
use ethers::{
    core::types::{Address as EthAddress, TxHash},
    middleware::{Middleware, SignerMiddleware},
    providers::{Http, Provider},
    signers::{LocalWallet, Signer},
};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// A sender for submitting OFT transfers through a signing provider.
pub struct OftSender<M: Middleware> {
    /// The OFT contract
    contract: OftContract<M>,
    /// The provider for the source chain
    provider: Arc<M>,
}

impl<S: ethers::signers::Signer + 'static> OftSender<SignerMiddleware<Provider<Http>, S>> {
    /// Creates a new sender.
    pub fn new(
        provider: Arc<SignerMiddleware<Provider<Http>, S>>,
        contract_address: &str,
    ) -> Result<Self, OftError> {
        let contract_address = EthAddress::from_str(contract_address).map_err(|e| {
            OftError::InvalidAddress(format!("Invalid contract address: {}", e))
        })?;

        let contract = OftContract::new(contract_address, provider.clone());

        Ok(Self { contract, provider })
    }

    /// Returns the address of the signing account.
    pub fn signer_address(&self) -> EthAddress {
        self.provider.signer().address()
    }
}

#[async_trait]
impl<S: ethers::signers::Signer + 'static> OftEndpoint
    for OftSender<SignerMiddleware<Provider<Http>, S>>
{
    /// Quotes the native fee for delivering the send. Read-only, no side
    /// effects; blocks until the node responds.
    async fn quote_send(
        &self,
        param: &SendParam,
        pay_in_lz_token: bool,
    ) -> Result<MessagingFee, OftError> {
        let (native_fee, lz_token_fee) = self
            .contract
            .quote_send(param, pay_in_lz_token)
            .call()
            .await
            .map_err(|e| OftError::RemoteCall(format!("Failed to quote send: {}", e)))?;

        debug!("Quoted native fee: {}", native_fee);

        Ok(MessagingFee {
            native_fee,
            lz_token_fee,
        })
    }

    /// Signs and submits the transfer, attaching exactly the quoted native
    /// fee as the transaction's value. Returns once the node accepts the
    /// transaction into its pending pool; does not wait for finality.
    async fn send(
        &self,
        param: &SendParam,
        fee: &MessagingFee,
        refund_address: EthAddress,
    ) -> Result<TxHash, OftError> {
        let tx = self
            .contract
            .send(param, fee.native_fee, fee.lz_token_fee, refund_address)
            .value(fee.native_fee);

        let pending_tx = tx
            .send()
            .await
            .map_err(|e| OftError::Submission(format!("Failed to send transfer: {}", e)))?;

        Ok(pending_tx.tx_hash())
    }
}

/// Creates a new sender with a local wallet.
pub async fn new_sender_with_wallet(
    rpc_url: &str,
    contract_address: &str,
    private_key: &str,
) -> Result<OftSender<SignerMiddleware<Provider<Http>, LocalWallet>>, OftError> {
    // Create a provider
    let provider = Provider::<Http>::try_from(rpc_url).map_err(|e| {
        OftError::Ethereum(format!("Failed to create provider: {}", e))
    })?;

    // Create a wallet
    let wallet = private_key
        .parse::<LocalWallet>()
        .map_err(|e| OftError::Signature(format!("Invalid private key: {}", e)))?;

    // Stamp the wallet with the source chain's id so signatures are EIP-155
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| OftError::Ethereum(format!("Failed to get chain id: {}", e)))?;
    let wallet = wallet.with_chain_id(chain_id.as_u64());

    // Create a signer
    let signer = SignerMiddleware::new(provider, wallet);

    // Create a sender
    OftSender::new(Arc::new(signer), contract_address)
}
