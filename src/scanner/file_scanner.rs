//! Event log file collection

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::error::ScanError;
use crate::core::validator::{validate_signature, SignatureStatus};

/// What the scan learned about a single matched file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Base name of the file
    pub name: String,
    /// Byte length from filesystem metadata, `None` if metadata was unavailable
    pub size: Option<u64>,
    pub signature: SignatureStatus,
}

impl FileEntry {
    /// Stat and read the header of one matched file
    ///
    /// Failures are recorded in `signature` rather than returned, so one
    /// bad file never stops the scan.
    pub fn inspect(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (size, signature) = match fs::metadata(path) {
            Ok(metadata) => (Some(metadata.len()), validate_signature(path)),
            Err(e) => (None, SignatureStatus::Unreadable(e.to_string())),
        };

        match &signature {
            SignatureStatus::Unreadable(msg) => {
                warn!(path = %path.display(), error = %msg, "failed to read file")
            }
            status => debug!(path = %path.display(), ?size, ?status, "inspected file"),
        }

        Self {
            name,
            size,
            signature,
        }
    }
}

/// Collect the entries of a directory whose name ends with `.{extension}`
///
/// # Arguments
/// * `dir` - Directory to scan (not recursed into)
/// * `extension` - Extension without the leading dot, matched case-sensitively
///
/// # Returns
/// Matching paths in the order the filesystem lists them.
/// Entry types are not filtered: a matching directory or dangling symlink
/// is returned and fails later when its header is read.
///
/// Only a missing `dir` is an error. A path that exists but cannot be
/// listed (a plain file, an unreadable directory) yields no matches, and
/// entries that fail while listing are skipped.
pub fn collect_matching_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::DirectoryNotFound(dir.to_path_buf()));
    }

    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot list directory");
            return Ok(Vec::new());
        }
    };

    let suffix = format!(".{}", extension);
    let mut matched = Vec::new();

    for entry in read_dir {
        match entry {
            Ok(entry) if entry.file_name().to_string_lossy().ends_with(&suffix) => {
                matched.push(entry.path());
            }
            Ok(_) => {}
            Err(e) => warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry"),
        }
    }

    Ok(matched)
}
