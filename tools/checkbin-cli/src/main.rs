//! checkbin - check.bin container tool
//!
//! # Commands
//!
//! - `checkbin extract` - Decode a .bin file into a JSON document
//! - `checkbin pack` - Encode a text or JSON entry list into a .bin file
//! - `checkbin info` - Print a summary of a .bin file
//!
//! # Usage
//!
//! ```bash
//! # Dump entries to stdout
//! checkbin extract check.bin
//!
//! # Dump entries to a file
//! checkbin extract check.bin -o check.json
//!
//! # Pack a plain-text list (one entry per line) with the default header
//! checkbin pack paths.txt check.bin
//!
//! # Pack JSON with an explicit header (count is always derived)
//! checkbin pack check.json check.bin --header 2008 1 7
//! ```
//!
//! Log output goes to stderr and honours `RUST_LOG`.

mod extract;
mod fs;
mod info;
mod input;
mod pack;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// checkbin - extract and pack check.bin containers
#[derive(Parser)]
#[command(name = "checkbin")]
#[command(about = "Extract and pack check.bin record containers")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract entries from a .bin file as JSON
    Extract(extract::ExtractArgs),

    /// Pack entries (text or JSON) into a .bin file
    Pack(pack::PackArgs),

    /// Show header and size information for a .bin file
    Info(info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Extract(args) => extract::execute(args),
        Commands::Pack(args) => pack::execute(args),
        Commands::Info(args) => info::execute(args),
    }
}
