//! Hash computer: stream FASTQ files through MD5.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use super::HashError;
use crate::core::layout::{logical_name, READ_CHUNK_SIZE};
use crate::core::types::DigestMap;

/// Compute the MD5 of a file's full content as lowercase hex.
///
/// The file is read in fixed-size chunks, so memory use does not depend on
/// the file size.
///
/// # Errors
///
/// Returns `HashError::Io` if the file cannot be opened or read.
pub fn digest_file(path: &Path) -> Result<String, HashError> {
    let mut file = File::open(path).map_err(|e| HashError::io(path, e))?;
    let mut context = md5::Context::new();
    let mut buffer = [0u8; READ_CHUNK_SIZE];

    loop {
        let bytes_read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(HashError::io(path, e)),
        };
        context.consume(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", context.compute()))
}

/// Compute digests for a list of FASTQ files, keyed by logical name.
///
/// If two paths share a logical name the later one wins.
///
/// # Errors
///
/// Returns `HashError::EmptyInput` if `fastq_files` is empty, or
/// `HashError::Io` for the first file that cannot be read. No partial map is
/// returned.
pub fn compute<P: AsRef<Path>>(fastq_files: &[P]) -> Result<DigestMap, HashError> {
    if fastq_files.is_empty() {
        return Err(HashError::EmptyInput);
    }

    let mut digests = DigestMap::with_capacity(fastq_files.len());
    for path in fastq_files {
        let path = path.as_ref();
        let digest = digest_file(path)?;
        let name = logical_name(path).ok_or_else(|| {
            HashError::io(
                path,
                std::io::Error::new(ErrorKind::InvalidInput, "path has no file name"),
            )
        })?;

        debug!("{name}: {digest}");
        digests.insert(name, digest);
    }

    Ok(digests)
}
