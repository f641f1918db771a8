use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;

/// Logical file name -> lowercase hex MD5
pub type DigestMap = HashMap<String, String>;

/// A digest file written to the hash folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestRecord {
    /// Logical name of the data file (`.gz` removed)
    pub name: String,

    /// Hex digest stored in the file
    pub digest: String,

    /// Path of the digest file
    pub path: PathBuf,
}
