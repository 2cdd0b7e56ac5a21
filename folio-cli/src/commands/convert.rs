//! Convert command implementation

use super::read_manuscript;
use anyhow::{Context, Result};
use folio_core::{BookMetadata, Config, Converter, Language};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Convert one manuscript to an EPUB file
pub fn convert(
    config: &Config,
    input: &str,
    output: &str,
    language: &str,
    title: Option<&str>,
) -> Result<()> {
    let input_path = Path::new(input);
    let language = Language::from_code(language);

    let metadata = match title {
        Some(title) => BookMetadata::new(title, language),
        None => BookMetadata::from_file_name(input, language),
    }
    .context("Invalid book title")?;

    let converter = Converter::from_config(config).context("Invalid configuration")?;

    // Set up progress bar with animation
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message("Extracting text...");
    let text = read_manuscript(input_path)?;

    pb.set_message("Detecting chapters...");
    let assembly = converter
        .assemble(&text, &metadata)
        .with_context(|| format!("Failed to convert {}", input))?;

    tracing::info!(
        "Detected {} chapters in '{}'",
        assembly.chapters.len(),
        metadata.title
    );

    pb.set_message("Packaging...");
    let bytes = converter
        .packager()
        .package(&assembly.documents, assembly.stamp.modified)
        .context("Failed to package EPUB")?;

    std::fs::write(output, &bytes)
        .with_context(|| format!("Failed to create output file: {}", output))?;

    pb.finish_with_message(format!(
        "Converted '{}' ({} chapters) -> {}",
        metadata.title,
        assembly.chapters.len(),
        output
    ));

    Ok(())
}
