//! Directory scanning functionality

pub mod file_scanner;
pub mod directory_scanner;

pub use file_scanner::{collect_matching_files, FileEntry};
pub use directory_scanner::{scan_directory, ScanConfig, ScanOutcome};
