//! Output formatting for conversion reports.
//!
//! Provides functions to format a [`ConversionReport`] as plain text or JSON.

use crate::{ConversionReport, FileStatus, SpacetabError};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Formats the report into a string.
pub fn format_report(report: &ConversionReport, format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Text => format_text(report),
        OutputFormat::Json => format_json(report, pretty),
    }
}

/// Writes the formatted report to a file.
pub fn write_report_to_file(
    report: &ConversionReport,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), SpacetabError> {
    let content = format_report(report, format, pretty);
    fs::write(&path, content).map_err(|e| SpacetabError::write(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_text(report: &ConversionReport) -> String {
    let mut out = String::with_capacity(256);
    for file in report.converted() {
        out.push_str(&format!(
            "converted {} ({} -> {} bytes)\n",
            file.path.display(),
            file.bytes_read,
            file.bytes_written
        ));
    }
    for failure in &report.failures {
        out.push_str(&format!("skipped: {}\n", failure.message));
    }
    out.push_str(&format!(
        "{} converted, {} unchanged, {} empty, {} failed\n",
        report.count(FileStatus::Converted),
        report.count(FileStatus::Unchanged),
        report.count(FileStatus::Empty),
        report.failures.len()
    ));
    out
}

fn format_json(report: &ConversionReport, pretty: bool) -> String {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    // The report holds only paths, numbers and strings.
    json.unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
}
