//! A single scan pass over one directory

use std::path::PathBuf;
use tracing::info;

use super::file_scanner::{collect_matching_files, FileEntry};

/// Directory scanned when none is given
pub const DEFAULT_DIRECTORY: &str = "evtx_files";

/// Extension matched when none is given
pub const DEFAULT_EXTENSION: &str = "evtx";

/// What to scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub directory: PathBuf,
    /// Extension without the leading dot
    pub extension: String,
}

impl ScanConfig {
    pub fn new(directory: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTORY, DEFAULT_EXTENSION)
    }
}

/// How a scan ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Target directory does not exist; nothing was listed
    MissingDirectory,
    /// Directory exists but holds no matching entries
    NoMatches,
    /// One entry per matched file, in enumeration order
    Scanned(Vec<FileEntry>),
}

/// Scan a directory for matching files and inspect each one
///
/// Never fails: a missing directory and per-file read failures are part
/// of the outcome, and a path that exists but cannot be listed counts as
/// having no matches.
pub fn scan_directory(config: &ScanConfig) -> ScanOutcome {
    info!(directory = %config.directory.display(), extension = %config.extension, "starting scan");

    // DirectoryNotFound is the only error collect_matching_files returns
    let Ok(paths) = collect_matching_files(&config.directory, &config.extension) else {
        return ScanOutcome::MissingDirectory;
    };

    if paths.is_empty() {
        return ScanOutcome::NoMatches;
    }

    let entries: Vec<FileEntry> = paths.iter().map(|path| FileEntry::inspect(path)).collect();

    let valid = entries.iter().filter(|e| e.signature.is_valid()).count();
    info!(total = entries.len(), valid, "scan complete");

    ScanOutcome::Scanned(entries)
}
