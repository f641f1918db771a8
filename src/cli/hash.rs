use std::path::Path;

use tracing::info;

use crate::cli::OutputFormat;
use crate::core::types::DigestRecord;
use crate::hashing::hash_run;

/// Hash one sequencing run and print a summary of the digest files.
///
/// Errors from the pipeline are returned as `HashError` wrapped in
/// `anyhow::Error`, so the caller can downcast to decide what is fatal.
pub fn run(folder: &Path, format: OutputFormat) -> anyhow::Result<()> {
    info!("Processing sequencing folder: {}", folder.display());

    let records = hash_run(folder)?;

    match format {
        OutputFormat::Text => print_text_summary(folder, &records),
        OutputFormat::Json => print_json_summary(&records)?,
        OutputFormat::Tsv => print_tsv_summary(&records),
    }

    Ok(())
}

fn print_text_summary(folder: &Path, records: &[DigestRecord]) {
    println!("MD5 Hashes");
    println!("{}", "=".repeat(60));
    println!("\nSequencing folder: {}", folder.display());
    println!("Files hashed: {}\n", records.len());

    for record in records {
        println!("  {}  {}", record.digest, record.name);
    }
}

fn print_json_summary(records: &[DigestRecord]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

fn print_tsv_summary(records: &[DigestRecord]) {
    println!("name\tmd5\tpath");
    for record in records {
        println!(
            "{}\t{}\t{}",
            record.name,
            record.digest,
            record.path.display()
        );
    }
}
