use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Rebuild readable text from JSON page-block dumps.
#[derive(Debug, Parser)]
#[command(name = "reflow", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify and normalize the text of dump pages
    Extract {
        /// Path to the block dump (`<document-id>.json`)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Single page number (1-based)
        #[arg(long, conflicts_with = "pages")]
        page: Option<usize>,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Number of equal-width reading columns
        #[arg(
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u16).range(1..=reflow::MAX_COLUMNS as i64)
        )]
        columns: u16,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Normalize raw extracted text (line wraps, hyphens, bullets, dashes)
    Normalize {
        /// Text file to normalize. Reads stdin when omitted
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Show page count and per-page geometry of a dump
    Info {
        /// Path to the block dump (`<document-id>.json`)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for extract and info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
