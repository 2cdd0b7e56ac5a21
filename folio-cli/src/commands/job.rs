//! Job command implementation

use anyhow::{Context, Result};
use folio_core::job::{ConversionJob, ConversionRequest};
use folio_core::storage::LocalStorage;
use folio_core::{Config, Converter, Language};
use std::sync::Arc;

/// Run a conversion job against a local storage root
pub async fn job(config: &Config, root: &str, book_id: &str, key: &str, language: &str) -> Result<()> {
    let converter = Converter::from_config(config).context("Invalid configuration")?;
    let storage = Arc::new(LocalStorage::new(root));
    let job = ConversionJob::new(storage, converter);

    let request = ConversionRequest {
        book_id: book_id.to_string(),
        manuscript_key: key.to_string(),
        language: Language::from_code(language),
    };

    let outcome = job
        .run(&request)
        .await
        .with_context(|| format!("Conversion job for book '{}' failed", book_id))?;

    println!(
        "{} ({} chapters, {} bytes)",
        outcome.output_key, outcome.chapters, outcome.bytes
    );

    Ok(())
}
