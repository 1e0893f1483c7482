pub mod errors;
pub mod math;

use alloy::primitives::U256;
use clap::Parser;
use errors::BitMathError;
use eyre::{Result, WrapErr};
use math::{bit_math::most_significant_bit, constants::U256_83};
use std::str::FromStr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(version, about = "Finds the index of the most significant bit of a 256-bit unsigned integer", long_about = None)]
pub struct Args {
    /// Value to query, decimal or 0x/0o/0b prefixed. Defaults to 83
    pub value: Option<String>,
}

/// Installs a stdout subscriber. The filter is taken from RUST_LOG and falls back to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout).with_target(false))
        .init();
}

/// Parses caller-supplied text into a U256, rejecting anything wider than 256 bits
pub fn parse_value (input: &str) -> Result<U256, BitMathError> {
    U256::from_str(input.trim()).map_err(|_| BitMathError::Parse(input.to_string()))
}

/// @notice Resolves the input value, computes its most significant bit and logs it
/// @param args The parsed command line
/// @return r the index of the most significant bit
pub fn run (args: &Args) -> Result<u8> {
    let x = match &args.value {
        Some(value) => parse_value(value)?,
        None => U256_83
    };
    tracing::debug!("Querying most significant bit of {}", x);

    let r = most_significant_bit(x).wrap_err_with(|| format!("Can not find most significant bit of {}", x))?;
    tracing::info!("significant bit {}", r);

    Ok(r)
}

/// Logs the outcome of `run` once and maps it to a process exit status
pub fn exit_status (result: &Result<u8>) -> i32 {
    match result {
        Ok(_) => {
            tracing::info!("significant bit script executed successfully...");
            0
        },
        Err(e) => {
            tracing::error!("{:#}", e);
            1
        }
    }
}
