//! Hash writer: create the hash folder and persist one digest file per entry.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::HashError;
use crate::core::layout::{digest_file_name, hash_dir};
use crate::core::types::{DigestMap, DigestRecord};

/// Create the hash folder of a run (and any missing parents).
///
/// Calling this on a run whose hash folder already exists is a no-op that
/// returns the same path.
///
/// # Errors
///
/// Returns `HashError::Io` if the folder cannot be created.
pub fn ensure_output_folder(run_dir: &Path) -> Result<PathBuf, HashError> {
    let hash_folder = hash_dir(run_dir);
    fs::create_dir_all(&hash_folder).map_err(|e| HashError::io(&hash_folder, e))?;
    Ok(hash_folder)
}

/// Write `<logical-name>.txt` into `hash_folder` for every digest.
///
/// Existing digest files are overwritten. The folder must already exist; it is
/// not created here. Files are written in logical-name order and a failure
/// leaves earlier files in place.
///
/// # Errors
///
/// Returns `HashError::Io` if a digest file cannot be written, e.g. because
/// `hash_folder` does not exist.
pub fn write(hash_folder: &Path, digests: &DigestMap) -> Result<Vec<DigestRecord>, HashError> {
    let mut entries: Vec<(&String, &String)> = digests.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut written = Vec::with_capacity(entries.len());
    for (name, digest) in entries {
        let path = hash_folder.join(digest_file_name(name));
        fs::write(&path, digest).map_err(|e| HashError::io(&path, e))?;
        debug!("Wrote {}", path.display());

        written.push(DigestRecord {
            name: name.clone(),
            digest: digest.clone(),
            path,
        });
    }

    Ok(written)
}
