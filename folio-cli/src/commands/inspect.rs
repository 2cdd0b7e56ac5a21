//! Inspect command implementation

use anyhow::{bail, Context, Result};
use folio_core::package;
use folio_core::Config;

/// Check the container structure of an EPUB file
pub fn inspect(config: &Config, input: &str, json: bool) -> Result<()> {
    let bytes =
        std::fs::read(input).with_context(|| format!("Failed to open input file: {}", input))?;

    let report = package::inspect(&bytes, &config.layout)
        .with_context(|| format!("Failed to read {} as a zip archive", input))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Entries: {}", report.entries.len());
        for entry in &report.entries {
            let method = if entry.stored { "stored" } else { "deflated" };
            println!(
                "  {:<40} {:>8} -> {:>8} ({})",
                entry.name, entry.size, entry.compressed_size, method
            );
        }
        for problem in &report.problems {
            eprintln!("Problem: {}", problem);
        }
    }

    if !report.is_valid() {
        bail!("{} is not a valid EPUB container", input);
    }

    if !json {
        println!("Valid EPUB container");
    }

    Ok(())
}
