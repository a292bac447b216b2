//! Integration tests for error isolation
//!
//! Tests that a file which cannot be read is reported on its own and
//! does not stop the rest of the scan.

use evtx_scanner::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn scan(dir: &std::path::Path) -> Vec<FileEntry> {
    let config = ScanConfig::new(dir, "evtx");
    match scan_directory(&config) {
        ScanOutcome::Scanned(mut entries) => {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
            entries
        }
        other => panic!("expected scanned outcome, got {:?}", other),
    }
}

/// Test that a directory named like a log file is reported, not fatal
#[test]
fn test_directory_with_matching_name() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("a_folder.evtx")).unwrap();
    fs::write(temp_dir.path().join("b.evtx"), b"ElfFile\0").unwrap();

    let entries = scan(temp_dir.path());
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].name, "a_folder.evtx");
    assert!(
        matches!(entries[0].signature, SignatureStatus::Unreadable(ref msg) if !msg.is_empty()),
        "Reading a directory should fail with a message"
    );

    assert_eq!(entries[1].name, "b.evtx");
    assert_eq!(entries[1].signature, SignatureStatus::Valid);
}

/// Test that a dangling symlink fails alone and the next file is still checked
#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_isolated() {
    let temp_dir = TempDir::new().unwrap();
    std::os::unix::fs::symlink(
        temp_dir.path().join("missing_target"),
        temp_dir.path().join("a_broken.evtx"),
    )
    .unwrap();
    fs::write(temp_dir.path().join("b_good.evtx"), b"ElfFile\0").unwrap();
    fs::write(temp_dir.path().join("c_bad.evtx"), b"garbage!").unwrap();

    let entries = scan(temp_dir.path());
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].size, None);
    assert!(matches!(entries[0].signature, SignatureStatus::Unreadable(_)));
    assert_eq!(entries[1].signature, SignatureStatus::Valid);
    assert_eq!(entries[2].signature, SignatureStatus::Mismatch);

    let mut buf = Vec::new();
    write_report(&mut buf, &ScanConfig::new(temp_dir.path(), "evtx"), &ScanOutcome::Scanned(entries)).unwrap();
    let report = String::from_utf8(buf).unwrap();

    assert_eq!(report.matches("Error reading file:").count(), 1);
    assert!(report.contains("Valid EVTX file signature detected"));
    assert!(report.contains("Warning: File may not be a valid EVTX file"));
}

/// Test that an empty file is a mismatch, not an error
#[test]
fn test_empty_file() {
    let temp_file = NamedTempFile::new().unwrap();
    assert_eq!(validate_signature(temp_file.path()), SignatureStatus::Mismatch);
}

/// Test that a file shorter than the magic value is a mismatch
#[test]
fn test_file_shorter_than_magic() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"Elf").unwrap();
    temp_file.flush().unwrap();

    assert_eq!(validate_signature(temp_file.path()), SignatureStatus::Mismatch);
}

/// Test that near-miss headers are all rejected
#[test]
fn test_corrupted_magic() {
    let test_cases = vec![
        b"elfFile\0".as_slice(), // Lowercase
        b"ELFFile\0".as_slice(), // Uppercase
        b"\0ElfFile".as_slice(), // Shifted
        b"EflFile\0".as_slice(), // Swapped
        b"\x7fELF\x02\x01\x01\0".as_slice(), // Linux ELF binary
    ];

    for (idx, content) in test_cases.iter().enumerate() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content).unwrap();
        temp_file.flush().unwrap();

        let status = validate_signature(temp_file.path());
        assert_eq!(status, SignatureStatus::Mismatch, "Test case {} should not match", idx);
    }
}

/// Test that non-matching files are never inspected
#[test]
fn test_non_matching_files_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let mut file = File::create(temp_dir.path().join("Application.evtx")).unwrap();
    file.write_all(b"ElfFile\0").unwrap();
    fs::create_dir(temp_dir.path().join("notes.txt")).unwrap();

    let entries = scan(temp_dir.path());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Application.evtx");
}
