//! # miseq-hashr
//!
//! Create MD5 hashes for all FASTQ files in an Illumina MiSeq sequencing run.
//!
//! A MiSeq run nests its FASTQ files under `Data/Intensities/BaseCalls`. This
//! crate finds those `*.fastq.gz` files, computes the MD5 of each one, and saves
//! each hash as a small text file in a `hashes` folder inside the run, so that
//! raw sequencing data can be fingerprinted for integrity tracking.
//!
//! ## Example
//!
//! ```rust,no_run
//! use miseq_hashr::hashing::hash_run;
//! use std::path::Path;
//!
//! let records = hash_run(Path::new("200101_M05722")).unwrap();
//! for record in records {
//!     println!("{}  {}", record.digest, record.name);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Run layout constants and data types
//! - [`hashing`]: Locate, hash and write stages
//! - [`cli`]: Command-line interface implementation
//! - [`logging`]: `tracing` subscriber setup for the binary

pub mod cli;
pub mod core;
pub mod hashing;
pub mod logging;

pub use crate::core::types::{DigestMap, DigestRecord};
pub use hashing::{hash_run, HashError};
