//! End-to-end tests of the hashing pipeline on a MiSeq-style run directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use miseq_hashr::hashing::{compute, ensure_output_folder, hash_run, locate, write, HashError};
use tempfile::TempDir;

const FASTQ_NAME: &str = "2018-CAL-0033_S1_L001_R1_001.fastq.gz";
const ACGT_MD5: &str = "f1f8f4bf413b16ad135722aa4591043e";

/// Build `<tmp>/200101_M05722/Data/Intensities/BaseCalls/<FASTQ_NAME>`
fn make_run(temp: &TempDir) -> PathBuf {
    let run = temp.path().join("200101_M05722");
    let data = run.join("Data").join("Intensities").join("BaseCalls");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join(FASTQ_NAME), b"ACGT").unwrap();
    run
}

#[test]
fn test_fastq_folder_present() {
    let temp = TempDir::new().unwrap();
    let run = make_run(&temp);

    let fastq_files = locate(&run).unwrap();
    assert_eq!(fastq_files.len(), 1);
    assert_eq!(
        fastq_files[0].file_name().unwrap().to_string_lossy(),
        FASTQ_NAME
    );
}

#[test]
fn test_fastq_folder_absent() {
    let temp = TempDir::new().unwrap();
    let fake = temp.path().join("fake");

    let err = locate(&fake).unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(err, HashError::NoDataFiles { .. }));
}

#[test]
fn test_stages_in_sequence() {
    let temp = TempDir::new().unwrap();
    let run = make_run(&temp);

    let fastq_files = locate(&run).unwrap();
    let digests = compute(&fastq_files).unwrap();
    assert_eq!(digests["2018-CAL-0033_S1_L001_R1_001.fastq"], ACGT_MD5);

    let hash_folder = ensure_output_folder(&run).unwrap();
    assert!(hash_folder.is_dir());

    write(&hash_folder, &digests).unwrap();
    let digest_file = hash_folder.join("2018-CAL-0033_S1_L001_R1_001.fastq.txt");
    assert_eq!(fs::read_to_string(digest_file).unwrap(), ACGT_MD5);
}

#[test]
fn test_create_hashes_empty() {
    let no_files: [&Path; 0] = [];
    let err = compute(&no_files).unwrap_err();
    assert!(matches!(err, HashError::EmptyInput));
    assert!(err.is_fatal());
}

#[test]
fn test_create_hashes_no_file() {
    let err = compute(&["2018-CAL-0033_S1_L001_R1_001"]).unwrap_err();
    assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
}

#[test]
fn test_write_hashes_illegal() {
    let temp = TempDir::new().unwrap();
    let run = make_run(&temp);
    let digests = compute(&locate(&run).unwrap()).unwrap();

    let err = write(Path::new("/not/a/real/folder"), &digests).unwrap_err();
    assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
}

#[test]
fn test_hash_run() {
    let temp = TempDir::new().unwrap();
    let run = make_run(&temp);
    let data = run.join("Data").join("Intensities").join("BaseCalls");
    fs::write(data.join("2018-CAL-0033_S1_L001_R2_001.fastq.gz"), b"").unwrap();

    let records = hash_run(&run).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "2018-CAL-0033_S1_L001_R1_001.fastq");
    assert_eq!(records[0].digest, ACGT_MD5);
    assert_eq!(records[1].name, "2018-CAL-0033_S1_L001_R2_001.fastq");
    assert_eq!(records[1].digest, "d41d8cd98f00b204e9800998ecf8427e");

    for record in &records {
        assert_eq!(record.path.parent().unwrap(), run.join("hashes"));
        assert_eq!(fs::read_to_string(&record.path).unwrap(), record.digest);
    }

    // Input files are left untouched
    assert_eq!(fs::read(data.join(FASTQ_NAME)).unwrap(), b"ACGT");
}

#[test]
fn test_hash_run_twice() {
    let temp = TempDir::new().unwrap();
    let run = make_run(&temp);

    let first = hash_run(&run).unwrap();
    let second = hash_run(&run).unwrap();
    assert_eq!(first, second);

    let entries = fs::read_dir(run.join("hashes")).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_hash_run_without_fastq() {
    let temp = TempDir::new().unwrap();
    let run = temp.path().join("empty_run");
    fs::create_dir_all(run.join("Data").join("Intensities").join("BaseCalls")).unwrap();

    let err = hash_run(&run).unwrap_err();
    assert!(matches!(err, HashError::NoDataFiles { .. }));
    assert!(!run.join("hashes").exists());
}
