//! The hashing pipeline: locate FASTQ files, digest them, persist the digests.
//!
//! The three stages are plain functions chained by [`hash_run()`]:
//!
//! - [`locate()`]: find `*.fastq.gz` files under `Data/Intensities/BaseCalls`
//! - [`compute()`]: MD5 each file, keyed by its logical name
//! - [`ensure_output_folder()`] + [`write()`]: create `<run>/hashes` and write one
//!   `<logical-name>.txt` per file
//!
//! ## Example
//!
//! ```rust,no_run
//! use miseq_hashr::hashing::{compute, ensure_output_folder, locate, write};
//! use std::path::Path;
//!
//! let run = Path::new("200101_M05722");
//! let fastq_files = locate(run).unwrap();
//! let digests = compute(&fastq_files).unwrap();
//! let hash_folder = ensure_output_folder(run).unwrap();
//! write(&hash_folder, &digests).unwrap();
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::core::types::DigestRecord;

pub mod compute;
pub mod locate;
pub mod write;

pub use compute::{compute, digest_file};
pub use locate::locate;
pub use write::{ensure_output_folder, write};

#[derive(Error, Debug)]
pub enum HashError {
    #[error(
        "Could not find any FASTQ files in the supplied sequence folder: {}",
        .folder.display()
    )]
    NoDataFiles { folder: PathBuf },

    #[error("No FASTQ files were supplied for hashing")]
    EmptyInput,

    #[error("IO error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The FASTQ file-name pattern failed to compile. Only the fixed
    /// `FASTQ_PATTERN` constant is ever compiled.
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl HashError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether the entry point should stop the process on this error.
    ///
    /// A run without FASTQ files is never a partial success.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NoDataFiles { .. } | Self::EmptyInput)
    }

    /// Kind of the underlying I/O error, if any
    #[must_use]
    pub fn io_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

/// Run the whole pipeline on one sequencing run.
///
/// Returns one record per digest file written, sorted by logical name.
///
/// # Errors
///
/// Returns `HashError::NoDataFiles` if the run has no FASTQ files, or
/// `HashError::Io` if a data file cannot be read or a digest file cannot be
/// written.
pub fn hash_run(run_dir: &Path) -> Result<Vec<DigestRecord>, HashError> {
    let fastq_files = locate(run_dir)?;
    let digests = compute(&fastq_files)?;
    let hash_folder = ensure_output_folder(run_dir)?;
    let written = write(&hash_folder, &digests)?;

    info!(
        "Wrote {} hash files to {}",
        written.len(),
        hash_folder.display()
    );

    Ok(written)
}
