//! Console report rendering

pub mod report_writer;

pub use report_writer::{format_size, write_report};
