//! Folio CLI - Command-line interface for manuscript to EPUB conversion

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate jobs argument (must be at least 1)
fn parse_jobs(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("jobs must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a manuscript to EPUB
    Convert {
        /// Input manuscript (txt, md, pdf or docx)
        input: String,

        /// Output EPUB path
        #[arg(short, long)]
        output: String,

        /// Book language (en, si)
        #[arg(short, long, default_value = "en")]
        language: String,

        /// Book title (defaults to the input file name)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Show the chapters detected in a manuscript
    Chapters {
        /// Input manuscript
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the container structure of an EPUB file
    Inspect {
        /// EPUB file path
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Batch convert every manuscript in a directory
    Batch {
        /// Input directory
        input_dir: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: String,

        /// Book language (en, si)
        #[arg(short, long, default_value = "en")]
        language: String,

        /// Number of parallel jobs (must be at least 1)
        #[arg(short, long, default_value = "4", value_parser = parse_jobs)]
        jobs: usize,
    },

    /// Run a storage-backed conversion job
    Job {
        /// Storage root directory
        #[arg(long)]
        root: String,

        /// Book identifier, names the output file
        #[arg(long)]
        book_id: String,

        /// Storage key of the manuscript
        #[arg(long)]
        key: String,

        /// Book language (en, si)
        #[arg(short, long, default_value = "en")]
        language: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "folio_cli=debug,folio_core=debug"
    } else {
        "folio_cli=info,folio_core=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            language,
            title,
        } => commands::convert(&config, &input, &output, &language, title.as_deref()),

        Commands::Chapters { input, json } => commands::chapters(&config, &input, json),

        Commands::Inspect { input, json } => commands::inspect(&config, &input, json),

        Commands::Batch {
            input_dir,
            output_dir,
            language,
            jobs,
        } => commands::batch(&config, &input_dir, &output_dir, &language, jobs),

        Commands::Job {
            root,
            book_id,
            key,
            language,
        } => commands::job(&config, &root, &book_id, &key, &language).await,
    }
}
