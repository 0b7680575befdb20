//! Desktop delivery: write finished files into the app's export directory.

use std::fs;
use std::path::{Path, PathBuf};

use time::{macros::format_description, OffsetDateTime};

use super::ReportDocument;
use crate::core::error::ExportError;

pub fn export_dir() -> Result<PathBuf, ExportError> {
    let dirs = directories::ProjectDirs::from("com", "NeuroScope", "NeuroScope")
        .ok_or(ExportError::NoExportDir)?;
    Ok(dirs.data_dir().join("exports"))
}

/// Saves the report as `EEG_Report_<timestamp>.pdf` and returns its path.
pub fn save_to_export_dir(report: &ReportDocument) -> Result<PathBuf, ExportError> {
    save_into(&export_dir()?, report)
}

pub(crate) fn save_into(dir: &Path, report: &ReportDocument) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let stem = report.filename().trim_end_matches(".pdf");
    let path = dir.join(format!("{stem}_{}.pdf", timestamp_slug()));
    fs::write(&path, &report.bytes)?;
    log::info!("saved report to {}", path.display());
    Ok(path)
}

fn timestamp_slug() -> String {
    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}
