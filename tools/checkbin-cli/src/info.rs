//! Inspect check.bin files

use std::path::PathBuf;

use anyhow::{Context, Result};
use checkbin_format::CheckBinRecord;
use clap::Args;

use crate::fs::{MAX_INPUT_BYTES, read_file_with_limit};

/// Arguments for inspecting a .bin file
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Path to the .bin file
    pub input: PathBuf,
}

/// Execute the info command
pub fn execute(args: InfoArgs) -> Result<()> {
    let bytes = read_file_with_limit(&args.input, MAX_INPUT_BYTES)?;
    let record = checkbin_format::decode(&bytes)
        .with_context(|| format!("Failed to decode {}", args.input.display()))?;

    print!("{}", summarize(&args.input.display().to_string(), bytes.len(), &record));
    Ok(())
}

fn summarize(name: &str, file_size: usize, record: &CheckBinRecord) -> String {
    let header = &record.header;
    let longest = record.entries.iter().map(String::len).max().unwrap_or(0);
    let nonzero = record.metadata.iter().filter(|&&value| value != 0).count();

    let mut out = String::new();
    out.push_str(&format!("check.bin: {}\n", name));
    out.push_str(&format!("  Size:     {} bytes\n", file_size));
    out.push_str(&format!("  Magic:    {}\n", header.magic));
    out.push_str(&format!("  Version:  {}\n", header.version));
    out.push_str(&format!("  Flags:    {}\n", header.flags));
    out.push_str(&format!("  Entries:  {}\n", header.count));
    out.push_str(&format!("  Longest:  {} bytes\n", longest));
    out.push_str(&format!("  Metadata: {} non-zero\n", nonzero));
    out
}
