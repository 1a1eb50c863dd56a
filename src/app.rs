//! Command execution behind the `unmtk` binary.
//!
//! Regular output (report, listing, progress) goes to `out`, warnings and
//! the transfer summary to `diag`, so callers decide where both end up.

use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;

use crate::cli::Cli;
use crate::io::{HttpReader, LocalFileReader, Source, StdinReader};
use crate::mtk::{Archive, MtkExtractor};

/// Run one invocation: read the input, decode it, then list or extract.
///
/// # Errors
///
/// Any fatal condition. Files written before the failure stay on disk.
pub async fn run<O: Write, E: Write>(cli: &Cli, out: &mut O, diag: &mut E) -> Result<()> {
    if cli.needs_output() && cli.output.is_none() {
        bail!("output directory not given (run with --help)");
    }

    let data = if HttpReader::is_http_url(&cli.file) {
        let reader = HttpReader::new(cli.file.clone())?;
        let data = read_source(&reader).await?;

        if !cli.quiet {
            writeln!(
                diag,
                "Total bytes transferred: {}",
                format_size(reader.transferred_bytes())
            )?;
        }
        data
    } else if cli.is_stdin() {
        read_source(&StdinReader::new()).await?
    } else {
        read_source(&LocalFileReader::new(Path::new(&cli.file))).await?
    };

    process_archive(&data, cli, out, diag).await
}

async fn read_source(source: &impl Source) -> Result<Vec<u8>> {
    source
        .read_all()
        .await
        .with_context(|| format!("cannot read {}", source.describe()))
}

/// Decode a buffered archive, then list or extract its members.
pub async fn process_archive<O: Write, E: Write>(
    data: &[u8],
    cli: &Cli,
    out: &mut O,
    diag: &mut E,
) -> Result<()> {
    let archive = Archive::parse(data)?;

    if cli.verbose {
        for warning in &archive.warnings {
            writeln!(diag, "* warning: {warning}")?;
        }
        writeln!(out, "{}", archive.report())?;
    }

    if cli.list {
        for (name, _) in archive.files() {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    let Some(output) = cli.output.as_deref() else {
        bail!("output directory not given (run with --help)");
    };

    MtkExtractor::new(output)
        .extract_all(&archive, |name| {
            if !cli.quiet {
                writeln!(out, "  extracting: {name}")?;
            }
            Ok(())
        })
        .await?;

    Ok(())
}

/// Format a byte size into a human-readable string.
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
