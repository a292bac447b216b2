//! EVTX signature validation

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use super::error::ScanError;

/// Magic bytes at the start of every EVTX file header
pub const EVTX_MAGIC: &[u8; 4] = b"ElfF";

/// Number of bytes read from the start of each file.
/// Only the first `EVTX_MAGIC.len()` of them are compared.
pub const HEADER_READ_LEN: usize = 8;

/// Outcome of checking a single file's signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureStatus {
    /// First four bytes are `ElfF`
    Valid,
    /// File was read but does not start with `ElfF`
    Mismatch,
    /// File could not be opened or read
    Unreadable(String),
}

impl SignatureStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, SignatureStatus::Valid)
    }
}

/// Read up to `HEADER_READ_LEN` bytes from the start of a file
///
/// A file shorter than `HEADER_READ_LEN` yields fewer bytes; this is not
/// an error. The file is closed before returning.
pub fn read_header(path: &Path) -> Result<Vec<u8>, ScanError> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_READ_LEN);
    file.take(HEADER_READ_LEN as u64).read_to_end(&mut header)?;
    Ok(header)
}

/// Check whether a header starts with the EVTX magic bytes
pub fn has_evtx_signature(header: &[u8]) -> bool {
    header.get(..EVTX_MAGIC.len()) == Some(EVTX_MAGIC.as_slice())
}

/// Validate the signature of a file
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// `SignatureStatus::Unreadable` carries the error message when the file
/// cannot be opened or read
pub fn validate_signature(path: &Path) -> SignatureStatus {
    match read_header(path) {
        Ok(header) if has_evtx_signature(&header) => SignatureStatus::Valid,
        Ok(header) => {
            debug!(path = %path.display(), read = header.len(), "signature mismatch");
            SignatureStatus::Mismatch
        }
        Err(e) => SignatureStatus::Unreadable(e.to_string()),
    }
}
