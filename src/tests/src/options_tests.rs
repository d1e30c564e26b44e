//! Tests for the execution options encoding.

use oft::options::Options;

/// Tests that empty options encode as the bare type-3 header.
#[test]
fn test_new_options() {
    let options = Options::new().build();
    assert_eq!(hex::encode(&options), "0003");
}

/// Tests the compose option layout used for the mint-redeem hop:
/// index 0, 200k gas, no value.
#[test]
fn test_executor_compose_option() {
    let options = Options::new()
        .add_executor_compose_option(0, 200_000, 0)
        .build();

    // header, worker id 1, size 19, type 3, index, 16-byte gas
    assert_eq!(
        hex::encode(&options),
        "000301001303000000000000000000000000000000030d40"
    );
}

/// Tests that a non-zero value appends a second 16-byte field.
#[test]
fn test_executor_compose_option_with_value() {
    let options = Options::new()
        .add_executor_compose_option(1, 200_000, 5)
        .build();

    assert_eq!(
        hex::encode(&options),
        "000301002303000100000000000000000000000000030d4000000000000000000000000000000005"
    );
}

/// Tests the lzReceive gas option layout.
#[test]
fn test_executor_lz_receive_option() {
    let options = Options::new()
        .add_executor_lz_receive_option(65_000, 0)
        .build();

    // header, worker id 1, size 17, type 1, 16-byte gas (65000 = 0xfde8)
    assert_eq!(
        hex::encode(&options),
        "0003010011010000000000000000000000000000fde8"
    );
}

/// Tests that options accumulate in the order they are added.
#[test]
fn test_options_accumulate() {
    let options = Options::new()
        .add_executor_lz_receive_option(65_000, 0)
        .add_executor_compose_option(0, 200_000, 0)
        .build();

    let encoded = hex::encode(&options);
    assert!(encoded.starts_with("000301001101"));
    // 2-byte header + 20-byte receive option + 22-byte compose option
    assert_eq!(options.len(), 44);
}
