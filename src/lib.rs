//! EVTX Scanner Library
//!
//! Lists the event log files in a directory and checks each one for the
//! EVTX file signature.

pub mod core;
pub mod scanner;
pub mod reporting;

pub use crate::core::validator;
pub use crate::scanner::file_scanner;
pub use crate::reporting::report_writer;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::error::ScanError;
    pub use crate::core::validator::{
        has_evtx_signature, read_header, validate_signature, SignatureStatus, EVTX_MAGIC,
        HEADER_READ_LEN,
    };
    pub use crate::scanner::directory_scanner::{scan_directory, ScanConfig, ScanOutcome};
    pub use crate::scanner::file_scanner::{collect_matching_files, FileEntry};
    pub use crate::reporting::report_writer::{format_size, write_report};
}
