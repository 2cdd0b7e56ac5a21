//! Chapters command implementation

use super::read_manuscript;
use anyhow::{bail, Context, Result};
use folio_core::Config;
use serde::Serialize;
use std::path::Path;

/// Chapter summary output
#[derive(Serialize)]
struct ChapterInfo {
    number: usize,
    title: String,
    file: String,
    characters: usize,
}

/// Show how a manuscript would be split into chapters
pub fn chapters(config: &Config, input: &str, json: bool) -> Result<()> {
    let text = read_manuscript(Path::new(input))?;
    if text.trim().is_empty() {
        bail!("No text content found in {}", input);
    }

    let segmenter = config.segmenter().context("Invalid configuration")?;
    let infos: Vec<ChapterInfo> = segmenter
        .segment(&text)
        .into_iter()
        .map(|chapter| ChapterInfo {
            number: chapter.number(),
            file: chapter.file_name(),
            characters: chapter.body.chars().count(),
            title: chapter.title,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
    } else {
        println!("Chapters: {}", infos.len());
        for info in &infos {
            println!(
                "  {:>3}. {} ({} characters)",
                info.number, info.title, info.characters
            );
        }
    }

    Ok(())
}
