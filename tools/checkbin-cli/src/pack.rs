//! Pack command - encode a text or JSON entry list into a .bin file

use std::path::PathBuf;

use anyhow::{Context, Result};
use checkbin_format::{DEFAULT_FLAGS, DEFAULT_MAGIC, DEFAULT_VERSION, HeaderTags};
use clap::Args;

use crate::fs::write_file;
use crate::input::load_input;

/// Arguments for the pack command
#[derive(Debug, Args)]
pub struct PackArgs {
    /// Path to entries (plain text, one per line, or JSON)
    pub input: PathBuf,

    /// Output .bin path
    pub output: PathBuf,

    /// Header values. Count is derived from entries. If given more than
    /// once, the last occurrence wins.
    #[arg(
        long,
        num_args = 3,
        value_names = ["MAGIC", "VERSION", "FLAGS"],
        default_values_t = [DEFAULT_MAGIC, DEFAULT_VERSION, DEFAULT_FLAGS]
    )]
    pub header: Vec<u32>,
}

impl PackArgs {
    /// Header tags from the last `--header` occurrence.
    ///
    /// clap appends every occurrence (3 values each) to `header`.
    fn header_tags(&self) -> Result<HeaderTags> {
        if self.header.len() % 3 != 0 {
            anyhow::bail!(
                "--header takes exactly 3 values (MAGIC VERSION FLAGS), got {}",
                self.header.len()
            );
        }
        let triple: [u32; 3] = self
            .header
            .rchunks_exact(3)
            .next()
            .and_then(|last| last.try_into().ok())
            .ok_or_else(|| anyhow::anyhow!("--header requires MAGIC VERSION FLAGS"))?;
        Ok(HeaderTags::from(triple))
    }
}

/// Execute the pack command
pub fn execute(args: PackArgs) -> Result<()> {
    let tags = args.header_tags()?;
    let input = load_input(&args.input)?;

    tracing::debug!(
        "Loaded {} entries from {} (metadata: {})",
        input.entries.len(),
        args.input.display(),
        if input.metadata.is_some() { "yes" } else { "zero-filled" }
    );

    let bytes = checkbin_format::encode(&input.entries, tags, input.metadata.as_deref())
        .with_context(|| format!("Failed to pack {}", args.input.display()))?;

    write_file(&args.output, &bytes)?;

    tracing::info!(
        "Packed {} entries -> {} ({} bytes)",
        input.entries.len(),
        args.output.display(),
        bytes.len()
    );

    Ok(())
}
