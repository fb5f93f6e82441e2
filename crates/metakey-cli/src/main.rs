//! Metakey CLI - Main Entry Point
//!
//! Packs words into 16-bit Double Metaphone keys and compares them.
//!
//! Usage:
//!     metakey keys Nelson Neilsen
//!     metakey match Smith Schmidt
//!     metakey pack --strict NLSN

mod commands;
mod error;
mod logging;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use metakey_core::DoubleMetaphoneEncoder;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "metakey")]
#[command(about = "Packed Double Metaphone keys")]
#[command(version)]
struct Args {
    /// Encoder configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Skip words containing non-ASCII characters (they pack to the zero key)
    #[arg(long, global = true)]
    ascii_only: bool,

    /// Report an alternate code even when it equals the primary
    #[arg(long, global = true)]
    keep_identical_alternate: bool,

    /// Log level (debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print packed primary and alternate keys for each word
    Keys {
        #[arg(required = true)]
        words: Vec<String>,

        /// One JSON object per word
        #[arg(long)]
        json: bool,
    },

    /// Check whether two words match on any reading (exit status 1 if not)
    Match { a: String, b: String },

    /// Pack raw phonetic codes
    Pack {
        #[arg(required = true)]
        codes: Vec<String>,

        /// Reject codes that would be truncated or contain unknown symbols
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let mut config = commands::load_config(args.config.as_deref())?;
    if args.ascii_only {
        config.ascii_only = true;
    }
    if args.keep_identical_alternate {
        config.collapse_identical_alternate = false;
    }
    debug!(?config, "encoder configuration");

    let encoder = DoubleMetaphoneEncoder::with_config(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let status = match args.command {
        Command::Keys { words, json } => {
            commands::keys(&encoder, &words, json, &mut out)?;
            ExitCode::SUCCESS
        }
        Command::Match { a, b } => {
            if commands::compare(&encoder, &a, &b, &mut out)? {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Pack { codes, strict } => {
            commands::pack(&codes, strict, &mut out)?;
            ExitCode::SUCCESS
        }
    };

    out.flush()?;
    Ok(status)
}
