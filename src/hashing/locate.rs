//! Folder locator: resolve the data directory of a run and list its FASTQ files.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::debug;

use super::HashError;
use crate::core::layout::{data_dir, FASTQ_PATTERN};

/// Find the `*.fastq.gz` files of a sequencing run.
///
/// Only the `Data/Intensities/BaseCalls` directory is searched; subdirectories
/// are not descended into. The pattern is matched against file names only, so
/// the run directory path may contain any bytes the platform allows. Paths are
/// returned sorted.
///
/// # Errors
///
/// Returns `HashError::NoDataFiles` if nothing matches (including when the data
/// directory does not exist), `HashError::Io` if the data directory cannot be
/// listed, or `HashError::Pattern` if the file pattern cannot be compiled.
pub fn locate(run_dir: &Path) -> Result<Vec<PathBuf>, HashError> {
    let dir = data_dir(run_dir);
    let no_data_files = || HashError::NoDataFiles {
        folder: run_dir.to_path_buf(),
    };

    if !dir.is_dir() {
        return Err(no_data_files());
    }

    let pattern = Pattern::new(FASTQ_PATTERN)?;
    // Hidden files are left alone, like a shell glob would.
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut fastq_files = Vec::new();
    for entry in fs::read_dir(&dir).map_err(|e| HashError::io(&dir, e))? {
        let entry = entry.map_err(|e| HashError::io(&dir, e))?;
        let path = entry.path();
        let name = entry.file_name();
        if pattern.matches_with(&name.to_string_lossy(), options) && path.is_file() {
            fastq_files.push(path);
        }
    }

    if fastq_files.is_empty() {
        return Err(no_data_files());
    }
    fastq_files.sort();

    debug!(
        "FASTQ files:\n{}",
        fastq_files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    );

    Ok(fastq_files)
}
