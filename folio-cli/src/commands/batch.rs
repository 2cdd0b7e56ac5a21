//! Batch conversion command implementation

use super::read_manuscript;
use anyhow::{bail, Context, Result};
use folio_core::extract::is_supported_extension;
use folio_core::{BookMetadata, Config, Converter, Language};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Convert every manuscript in a directory
pub fn batch(
    config: &Config,
    input_dir: &str,
    output_dir: &str,
    language: &str,
    jobs: usize,
) -> Result<()> {
    let input_path = Path::new(input_dir);
    let output_path = Path::new(output_dir);
    let language = Language::from_code(language);

    // Ensure output directory exists
    fs::create_dir_all(output_path)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    // Find all supported files
    let mut files: Vec<_> = fs::read_dir(input_path)
        .with_context(|| format!("Failed to read input directory: {}", input_dir))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(is_supported_extension)
                .unwrap_or(false)
        })
        .collect();
    files.sort();

    if files.is_empty() {
        println!("No supported files found in {}", input_dir);
        return Ok(());
    }

    println!("Found {} files to convert", files.len());

    // Manuscripts sharing a stem would race for the same output file
    let (files, clashing) = split_clashing(files);
    for path in &clashing {
        tracing::error!(
            "Skipping {:?}: another manuscript also writes {}.epub",
            path,
            output_stem(path)
        );
    }

    let converter = Converter::from_config(config).context("Invalid configuration")?;

    let overall_pb = ProgressBar::new((files.len() + clashing.len()) as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"),
    );

    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(clashing.len());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("Failed to start worker threads")?;

    pool.install(|| {
        files.par_iter().for_each(|file_path| {
            match process_file(&converter, file_path, output_path, language) {
                Ok(_) => {
                    success_count.fetch_add(1, Ordering::Relaxed);
                }
                Err(e) => {
                    error_count.fetch_add(1, Ordering::Relaxed);
                    tracing::error!("Failed to convert {:?}: {:#}", file_path, e);
                }
            }

            overall_pb.inc(1);
        });
    });

    overall_pb.inc(clashing.len() as u64);
    overall_pb.finish();

    let success = success_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    println!("\nBatch conversion complete:");
    println!("  Success: {}", success);
    println!("  Errors:  {}", errors);

    if errors > 0 {
        bail!("Batch conversion completed with {} errors", errors);
    }

    Ok(())
}

fn output_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Separate manuscripts whose output name is unique from those that share one
fn split_clashing(files: Vec<PathBuf>) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for path in &files {
        *counts.entry(output_stem(path)).or_default() += 1;
    }

    files
        .into_iter()
        .partition(|path| counts.get(&output_stem(path)).copied() == Some(1))
}

fn process_file(
    converter: &Converter,
    input_path: &Path,
    output_dir: &Path,
    language: Language,
) -> Result<()> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .context("Could not determine output filename from input")?;

    let metadata = BookMetadata::new(stem, language)?;
    let text = read_manuscript(input_path)?;
    let bytes = converter.convert(&text, &metadata)?;

    let output_file = output_dir.join(format!("{}.epub", stem));
    fs::write(&output_file, bytes)?;

    tracing::info!("Converted {:?} -> {:?}", input_path, output_file);

    Ok(())
}
