//! Fixed directory layout of an Illumina MiSeq run and of the hash output.
//!
//! ```text
//! <run>/
//! ├── Data/Intensities/BaseCalls/
//! │   └── *.fastq.gz          data files
//! └── hashes/
//!     └── <logical-name>.txt  one digest per data file
//! ```

use std::path::{Path, PathBuf};

/// Subpath below the run directory where the sequencer stages FASTQ files
pub const NESTED_DATA_PATH: [&str; 3] = ["Data", "Intensities", "BaseCalls"];

/// Glob matched against file names in the data directory
pub const FASTQ_PATTERN: &str = "*.fastq.gz";

/// Compression suffix removed from a data file name to get its logical name
pub const COMPRESSION_SUFFIX: &str = ".gz";

/// Name of the hash output folder inside the run directory
pub const HASH_FOLDER_NAME: &str = "hashes";

/// Extension appended to a logical name to name its digest file
pub const HASH_FILE_EXTENSION: &str = "txt";

/// Buffer size used when streaming data files through the digest
pub const READ_CHUNK_SIZE: usize = 8192;

/// Directory holding the data files of a run.
#[must_use]
pub fn data_dir(run_dir: &Path) -> PathBuf {
    NESTED_DATA_PATH
        .iter()
        .fold(run_dir.to_path_buf(), |path, part| path.join(part))
}

/// Hash output folder of a run.
#[must_use]
pub fn hash_dir(run_dir: &Path) -> PathBuf {
    run_dir.join(HASH_FOLDER_NAME)
}

/// Logical name of a data file: its base name without the compression suffix.
///
/// Names without the suffix are returned unchanged. Returns `None` when the
/// path has no file name component (e.g. `/` or `..`).
///
/// # Examples
///
/// ```
/// use miseq_hashr::core::layout::logical_name;
/// use std::path::Path;
///
/// let path = Path::new("run/Data/Intensities/BaseCalls/S1_L001_R1_001.fastq.gz");
/// assert_eq!(logical_name(path).as_deref(), Some("S1_L001_R1_001.fastq"));
/// ```
#[must_use]
pub fn logical_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let stripped = name.strip_suffix(COMPRESSION_SUFFIX).unwrap_or(&name);
    Some(stripped.to_string())
}

/// Name of the digest file for a logical name, e.g. `x.fastq` -> `x.fastq.txt`.
#[must_use]
pub fn digest_file_name(logical_name: &str) -> String {
    format!("{logical_name}.{HASH_FILE_EXTENSION}")
}
