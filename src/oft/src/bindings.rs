/// Ethereum contract bindings for the OFT interface.
use crate::params::SendParam;
use ethers::{prelude::*, abi::Contract as EthersContract};
use std::sync::Arc;

/// The OFT contract interface
pub struct OftContract<M: Middleware> {
    contract: Contract<M>,
}

impl<M: Middleware> OftContract<M> {
    /// Creates a new instance of the contract
    pub fn new(address: Address, client: impl Into<Arc<M>>) -> Self {
        // Define the contract ABI
        let abi = include_str!("../contracts/OFT.abi");
        let contract = Contract::new(address, serde_json::from_str::<EthersContract>(abi).expect("Invalid ABI"), client.into());
        Self { contract }
    }

    /// Quotes the messaging fee for a send, returning (nativeFee, lzTokenFee)
    pub fn quote_send(
        &self,
        param: &SendParam,
        pay_in_lz_token: bool,
    ) -> ContractCall<M, (U256, U256)> {
        self.contract
            .method("quoteSend", (param.as_tuple(), pay_in_lz_token))
            .expect("Method not found")
    }

    /// Sends the transfer, paying the given fee
    pub fn send(
        &self,
        param: &SendParam,
        native_fee: U256,
        lz_token_fee: U256,
        refund_address: Address,
    ) -> ContractCall<M, ()> {
        self.contract
            .method(
                "send",
                (param.as_tuple(), (native_fee, lz_token_fee), refund_address),
            )
            .expect("Method not found")
    }
}
