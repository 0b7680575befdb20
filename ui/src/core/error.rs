//! Error taxonomy shared by the ingestion, chart and export stages.
//!
//! Each stage owns a narrow enum; [`PipelineError`] aggregates them at the single
//! boundary each dashboard calls into, so the views only ever surface one message.

use thiserror::Error;

/// Failure to turn uploaded bytes into a [`Dataset`](crate::core::dataset::Dataset).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("CSV input has no header row")]
    MissingHeader,
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Non-numeric or empty data fed to a numeric chart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("column `{column}` is not numeric and cannot be plotted")]
    NonNumericColumn { column: String },
    #[error("column `{column}` has no numeric values to plot")]
    NoNumericValues { column: String },
}

/// Failure while rasterizing charts or assembling the PDF report.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no charts to export")]
    NothingToExport,
    #[error("couldn't rasterize `{title}`: {reason}")]
    Rasterize { title: String, reason: String },
    #[error("couldn't encode image: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("unable to determine export directory")]
    NoExportDir,
    #[error("couldn't write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Patient details rejected by [`PatientProfile::new`](crate::core::profile::PatientProfile::new).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("age must be between {min} and {max}, got {age}")]
    AgeOutOfRange { age: i64, min: u8, max: u8 },
    #[error("unknown gender `{0}`")]
    UnknownGender(String),
}

/// Top-level error returned by the dashboard pipelines.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("upload a CSV file to begin")]
    NoDataset,
    #[error("error processing file: {0}")]
    Parse(#[from] ParseError),
    #[error("error rendering chart: {0}")]
    Render(#[from] RenderError),
    #[error("error exporting report: {0}")]
    Export(#[from] ExportError),
    #[error("invalid patient details: {0}")]
    Profile(#[from] ProfileError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_messages_wrap_stage_messages() {
        let err: PipelineError = RenderError::NonNumericColumn {
            column: "label".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "error rendering chart: column `label` is not numeric and cannot be plotted"
        );
    }
}
