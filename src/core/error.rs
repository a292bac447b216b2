//! Errors raised while scanning a directory

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}
