//! CLI for submitting cross-chain OFT transfers.

mod commands;
mod config;
mod errors;

use anyhow::Result;
use colored::Colorize;
use commands::{quote, send};
use config::SendConfig;
use errors::CliError;
use ethers::core::types::U256;
use oft::params::parse_amount;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Command line arguments for the transfer CLI.
#[derive(Debug, StructOpt)]
#[structopt(name = "oft-send", about = "Cross-chain OFT transfer tool")]
struct Opt {
    /// Path to the configuration file
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// RPC endpoint to connect to
    #[structopt(short, long)]
    rpc: Option<String>,

    /// Subcommand to run
    #[structopt(subcommand)]
    cmd: Command,
}

/// Subcommands for the transfer CLI.
#[derive(Debug, StructOpt)]
enum Command {
    /// Quote the native fee for a transfer without submitting it
    #[structopt(name = "quote")]
    Quote {
        /// Amount to send, in the token's smallest unit
        #[structopt(long, parse(try_from_str = parse_amount))]
        amount: U256,

        /// Minimum amount to receive on the destination chain
        #[structopt(long, default_value = "0", parse(try_from_str = parse_amount))]
        min_amount: U256,

        /// Recipient address (defaults to the signing account)
        #[structopt(long)]
        to: Option<String>,
    },

    /// Quote the fee and submit the transfer
    #[structopt(name = "send")]
    Send {
        /// Amount to send, in the token's smallest unit
        #[structopt(long, parse(try_from_str = parse_amount))]
        amount: U256,

        /// Minimum amount to receive on the destination chain
        #[structopt(long, default_value = "0", parse(try_from_str = parse_amount))]
        min_amount: U256,

        /// Recipient address (defaults to the signing account)
        #[structopt(long)]
        to: Option<String>,
    },
}

/// Loads the signing key from the PK environment variable.
fn load_private_key() -> Result<String, CliError> {
    let key = std::env::var("PK")
        .map_err(|_| CliError::KeyError("PK environment variable not set".to_string()))?;

    if key.trim().is_empty() {
        return Err(CliError::KeyError(
            "PK environment variable is empty".to_string(),
        ));
    }

    Ok(key)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables from .env, if present
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let opt = Opt::from_args();

    // Load configuration
    let mut config = match &opt.config {
        Some(path) => SendConfig::from_file(path)?,
        None => SendConfig::default(),
    };

    // Override the RPC endpoint if specified
    if let Some(rpc) = opt.rpc {
        config.rpc_url = rpc;
    }

    // Load the signing key
    let private_key = load_private_key()?;

    // Run the appropriate command
    match opt.cmd {
        Command::Quote {
            amount,
            min_amount,
            to,
        } => {
            let summary =
                quote::run(&config, &private_key, amount, min_amount, to.as_deref()).await?;
            println!("{} {}", "Quote:".green(), summary);
        }
        Command::Send {
            amount,
            min_amount,
            to,
        } => {
            let summary =
                send::run(&config, &private_key, amount, min_amount, to.as_deref()).await?;
            println!("{} {}", "Transfer submitted:".green(), summary);
        }
    }

    Ok(())
}
