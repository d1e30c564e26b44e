//! Tests for the quote-then-send orchestration, using a stub endpoint.

use async_trait::async_trait;
use ethers::core::types::{Address as EthAddress, Bytes, TxHash, U256};
use oft::errors::OftError;
use oft::params::{pad_to_bytes32, MessagingFee, SendParam};
use oft::transfer::{submit_transfer, OftEndpoint};
use std::sync::Mutex;

/// A recorded call to the stub's send.
#[derive(Debug, Clone)]
struct RecordedSend {
    fee: MessagingFee,
    refund_address: EthAddress,
}

/// A stub endpoint returning a fixed quote and recording sends.
struct StubEndpoint {
    quote: Result<MessagingFee, String>,
    sends: Mutex<Vec<RecordedSend>>,
}

impl StubEndpoint {
    fn with_quote(native_fee: U256) -> Self {
        Self {
            quote: Ok(MessagingFee {
                native_fee,
                lz_token_fee: U256::zero(),
            }),
            sends: Mutex::new(Vec::new()),
        }
    }

    fn with_failing_quote(message: &str) -> Self {
        Self {
            quote: Err(message.to_string()),
            sends: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl OftEndpoint for StubEndpoint {
    async fn quote_send(
        &self,
        _param: &SendParam,
        _pay_in_lz_token: bool,
    ) -> Result<MessagingFee, OftError> {
        self.quote
            .clone()
            .map_err(|msg| OftError::RemoteCall(msg))
    }

    async fn send(
        &self,
        _param: &SendParam,
        fee: &MessagingFee,
        refund_address: EthAddress,
    ) -> Result<TxHash, OftError> {
        self.sends.lock().unwrap().push(RecordedSend {
            fee: *fee,
            refund_address,
        });
        Ok(TxHash::from_low_u64_be(1))
    }
}

fn test_param() -> SendParam {
    let to = pad_to_bytes32(&[0x42; 20]).unwrap();
    SendParam::new(
        30255,
        to,
        U256::from_dec_str("20000000000000000000").unwrap(),
        U256::zero(),
        Bytes::from(vec![0x00, 0x03]),
        Bytes::default(),
    )
}

/// Tests that the transfer attaches exactly the quoted fee to the send.
#[tokio::test]
async fn test_quoted_fee_is_attached() {
    let quoted = U256::from(123_456_789u64);
    let endpoint = StubEndpoint::with_quote(quoted);
    let refund = EthAddress::from_low_u64_be(7);

    let outcome = submit_transfer(&endpoint, &test_param(), refund)
        .await
        .unwrap();

    assert_eq!(outcome.fee.native_fee, quoted);

    let sends = endpoint.sends.lock().unwrap();
    assert_eq!(sends.len(), 1);
    assert_eq!(sends[0].fee.native_fee, quoted);
    assert_eq!(sends[0].fee.lz_token_fee, U256::zero());
    assert_eq!(sends[0].refund_address, refund);
}

/// Tests that a failed quote propagates and the send is never attempted.
#[tokio::test]
async fn test_failed_quote_prevents_send() {
    let endpoint = StubEndpoint::with_failing_quote("execution reverted");
    let refund = EthAddress::from_low_u64_be(7);

    let result = submit_transfer(&endpoint, &test_param(), refund).await;

    match result {
        Err(OftError::RemoteCall(msg)) => assert!(msg.contains("execution reverted")),
        other => panic!("Expected a remote call error, got {:?}", other),
    }

    assert!(endpoint.sends.lock().unwrap().is_empty());
}
