//! Configuration for the transfer CLI.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for a compose-hop send: after the transfer lands on the
/// destination chain, the hop contract forwards it to a final endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeConfig {
    /// The hop contract on the destination chain that receives the transfer
    /// and executes the compose message. Required; there is no default.
    pub hop_address: String,
    /// The endpoint id of the final destination the hop forwards to
    pub hop_eid: u32,
    /// Gas granted to the destination-side lzCompose call
    pub gas_limit: u128,
}

/// Configuration for the transfer CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendConfig {
    /// The source chain RPC endpoint to connect to
    pub rpc_url: String,
    /// The OFT contract to send through
    pub oft_address: String,
    /// The destination endpoint id (LayerZero eid)
    pub dst_eid: u32,
    /// Compose-hop settings. When present, sends use the compose call
    /// shape; when absent, the basic send shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compose: Option<ComposeConfig>,
}

impl Default for SendConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://mainnet.base.org".to_string(),
            oft_address: "0x80Eede496655FB9047dd39d9f418d5483ED600df".to_string(),
            dst_eid: 30255,
            compose: None,
        }
    }
}

impl SendConfig {
    /// Loads configuration from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to a file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
