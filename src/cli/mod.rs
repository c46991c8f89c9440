//! Command-line interface for inspecting VM error records
//!
//! Provides commands: explain, codes, render, decode

mod codes_cmd;
mod explain_cmd;
mod render_cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::abi::AbiDecodeError;

/// Failures surfaced by the CLI
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse error records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown error code: {0} (valid codes are 1-{max})", max = crate::errors::Code::ALL.len())]
    UnknownCode(String),

    #[error("invalid hex input: {0}")]
    InvalidHex(String),

    #[error(transparent)]
    Abi(#[from] AbiDecodeError),
}

/// Inspect and render SQL VM error records
#[derive(Parser, Debug)]
#[command(name = "sqlvm-errors")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Show debug logs (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Explain an error code in detail
    Explain {
        /// Numeric code or canonical name (e.g., 23, "divide by zero")
        code: String,
    },

    /// List every category and code with its numeric value
    Codes,

    /// Render error records stored as JSON
    Render {
        /// JSON file holding one error object or an array of them
        file: PathBuf,

        /// Print the ABI records as hex instead of the rendered text
        #[arg(long, conflicts_with = "json")]
        abi: bool,

        /// Also report every error through the log sink
        #[arg(long)]
        log: bool,
    },

    /// Describe a hex-encoded ABI error record
    Decode {
        /// 12-byte record as hex (e.g., 0000000a0000000500020002)
        hex: String,
    },
}

impl Cli {
    /// Run the CLI
    pub fn run() -> Result<(), CliError> {
        let cli = Cli::parse();
        init_logging(cli.verbose);

        match cli.command {
            Command::Explain { code } => {
                explain_cmd::run_explain(&code, cli.json)?;
            }
            Command::Codes => {
                codes_cmd::run_codes(cli.json);
            }
            Command::Render { file, abi, log } => {
                render_cmd::run_render(&file, abi, log, cli.json)?;
            }
            Command::Decode { hex } => {
                render_cmd::run_decode(&hex, cli.json)?;
            }
        }

        Ok(())
    }
}

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` selects the filter; `--verbose` forces `debug`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second initialization (e.g. in tests) is not an error worth reporting.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
