//! CLI command implementations

mod batch;
mod chapters;
mod convert;
mod inspect;
mod job;

pub use batch::batch;
pub use chapters::chapters;
pub use convert::convert;
pub use inspect::inspect;
pub use job::job;

use anyhow::{Context, Result};
use folio_core::extract::extractor_for_path;
use folio_core::Config;
use std::path::Path;

/// Load the configuration file, or the defaults when none is given
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Read a manuscript and extract its text
fn read_manuscript(path: &Path) -> Result<String> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;

    let extractor = extractor_for_path(&path.to_string_lossy());
    let text = extractor
        .extract(&data)
        .with_context(|| format!("Failed to extract text from {}", path.display()))?;

    Ok(text)
}
