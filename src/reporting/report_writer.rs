//! Report writing functionality

use anyhow::Result;
use std::io::Write;

use crate::core::error::ScanError;
use crate::core::validator::SignatureStatus;
use crate::scanner::directory_scanner::{ScanConfig, ScanOutcome};

/// Format a byte count with `,` between thousands groups
pub fn format_size(bytes: u64) -> String {
    let digits = bytes.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Write the console report for a finished scan
///
/// # Arguments
/// * `out` - Destination, normally stdout
/// * `config` - The scan that produced `outcome`
/// * `outcome` - Result of `scan_directory`
pub fn write_report<W: Write>(out: &mut W, config: &ScanConfig, outcome: &ScanOutcome) -> Result<()> {
    let dir = config.directory.display();
    let ext = &config.extension;

    let entries = match outcome {
        ScanOutcome::MissingDirectory => {
            let err = ScanError::DirectoryNotFound(config.directory.clone());
            writeln!(out, "Error: {}", err)?;
            return Ok(());
        }
        ScanOutcome::NoMatches => {
            writeln!(out, "No .{} files found in '{}'", ext, dir)?;
            return Ok(());
        }
        ScanOutcome::Scanned(entries) => entries,
    };

    writeln!(out, "Found {} .{} file(s):", entries.len(), ext)?;
    writeln!(out, "{}", "-".repeat(50))?;

    for entry in entries {
        writeln!(out)?;
        writeln!(out, "File: {}", entry.name)?;
        if let Some(size) = entry.size {
            writeln!(out, "Size: {} bytes", format_size(size))?;
        }

        match &entry.signature {
            SignatureStatus::Valid => writeln!(out, "Valid EVTX file signature detected")?,
            SignatureStatus::Mismatch => {
                writeln!(out, "Warning: File may not be a valid EVTX file")?
            }
            SignatureStatus::Unreadable(msg) => writeln!(out, "Error reading file: {}", msg)?,
        }
    }

    out.flush()?;
    Ok(())
}
