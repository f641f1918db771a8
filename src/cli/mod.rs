//! Command-line interface for miseq-hashr.
//!
//! ## Usage
//!
//! ```text
//! # Hash every FASTQ file of a run into <run>/hashes
//! miseq-hashr -f /data/200101_M05722
//!
//! # Show the discovered files and each digest while running
//! miseq-hashr -f /data/200101_M05722 -v debug
//!
//! # Machine-readable summary
//! miseq-hashr -f /data/200101_M05722 --format json
//! ```

use std::path::PathBuf;

use clap::Parser;

pub mod hash;

#[derive(Parser)]
#[command(name = "miseq-hashr")]
#[command(version)]
#[command(about = "Create MD5 hashes for all FASTQ files in a MiSeq run")]
#[command(
    long_about = "miseq-hashr finds the FASTQ files of an Illumina MiSeq run (Data/Intensities/BaseCalls/*.fastq.gz), computes an MD5 hash for each file, and saves each hash to <folder>/hashes/<name>.fastq.txt"
)]
pub struct Cli {
    /// Name and path of sequencing folder
    #[arg(short, long, value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Set the logging level
    #[arg(short, long, value_name = "VERBOSITY", default_value = "info")]
    pub verbosity: Verbosity,

    /// Format of the summary printed once all hashes are written
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// Logging levels accepted by `--verbosity`
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Verbosity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Verbosity {
    /// Level name understood by `tracing_subscriber::EnvFilter`
    #[must_use]
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            // tracing has no level above error
            Self::Error | Self::Critical => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
