//! Extract command - decode a .bin file into a JSON document

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use checkbin_format::CheckBinRecord;
use clap::Args;

use crate::fs::{MAX_INPUT_BYTES, read_file_with_limit, write_file};

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Path to the .bin file
    pub input: PathBuf,

    /// Output path for JSON (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the extract command
pub fn execute(args: ExtractArgs) -> Result<()> {
    let bytes = read_file_with_limit(&args.input, MAX_INPUT_BYTES)?;
    let record = checkbin_format::decode(&bytes)
        .with_context(|| format!("Failed to decode {}", args.input.display()))?;

    let document = render_document(&record)?;

    match &args.output {
        Some(path) => {
            write_file(path, document.as_bytes())?;
            tracing::info!(
                "Extracted {} entries from {} -> {}",
                record.len(),
                args.input.display(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Render a record as pretty JSON (2-space indent) with a trailing newline.
///
/// Non-ASCII text is written as-is rather than escaped.
pub fn render_document(record: &CheckBinRecord) -> Result<String> {
    let mut document =
        serde_json::to_string_pretty(record).context("Failed to serialize record")?;
    document.push('\n');
    Ok(document)
}
