//! Tests for the CLI configuration.

use cli::config::{ComposeConfig, SendConfig};
use tempfile::tempdir;

/// Tests the default configuration values.
#[test]
fn test_default_config() {
    let config = SendConfig::default();

    assert_eq!(config.rpc_url, "https://mainnet.base.org");
    assert_eq!(config.oft_address, "0x80Eede496655FB9047dd39d9f418d5483ED600df");
    assert_eq!(config.dst_eid, 30255);
    assert!(config.compose.is_none());
}

/// Tests that a configuration round-trips through a file.
#[test]
fn test_config_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = SendConfig {
        rpc_url: "http://localhost:8545".to_string(),
        oft_address: "0x5Bff88cA1442c2496f7E475E9e7786383Bc070c0".to_string(),
        dst_eid: 30101,
        compose: Some(ComposeConfig {
            hop_address: "0x4444444444444444444444444444444444444444".to_string(),
            hop_eid: 30332,
            gas_limit: 200_000,
        }),
    };

    config.to_file(&path).unwrap();
    let loaded = SendConfig::from_file(&path).unwrap();

    assert_eq!(loaded.rpc_url, config.rpc_url);
    assert_eq!(loaded.oft_address, config.oft_address);
    assert_eq!(loaded.dst_eid, config.dst_eid);

    let compose = loaded.compose.unwrap();
    assert_eq!(compose.hop_address, "0x4444444444444444444444444444444444444444");
    assert_eq!(compose.hop_eid, 30332);
    assert_eq!(compose.gas_limit, 200_000);
}

/// Tests that a config without a compose block parses as a basic send.
#[test]
fn test_config_without_compose() {
    let json = r#"{
        "rpc_url": "https://mainnet.base.org",
        "oft_address": "0x80Eede496655FB9047dd39d9f418d5483ED600df",
        "dst_eid": 30255
    }"#;

    let config: SendConfig = serde_json::from_str(json).unwrap();
    assert!(config.compose.is_none());
}

/// Tests that loading a missing file fails.
#[test]
fn test_config_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    assert!(SendConfig::from_file(&path).is_err());
}
