//! Core data types and the fixed run layout.
//!
//! - [`layout`]: where FASTQ files live in a MiSeq run, where digests go, and
//!   how a data file's logical name is derived
//! - [`types`]: the digest map and the records describing written digest files
//!
//! ## Logical Names
//!
//! | Data file | Logical name | Digest file |
//! |-----------|--------------|-------------|
//! | `S1_L001_R1_001.fastq.gz` | `S1_L001_R1_001.fastq` | `S1_L001_R1_001.fastq.txt` |

pub mod layout;
pub mod types;
