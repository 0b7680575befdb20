//! PDF report export.
//!
//! Charts are rasterized first and only then laid out, one A4 page each, in the
//! order given. Any failure aborts the whole export; a partial report is never
//! returned.

#[cfg(not(target_arch = "wasm32"))]
mod delivery;
mod pdf;
mod raster;

#[cfg(not(target_arch = "wasm32"))]
pub use delivery::{export_dir, save_to_export_dir};
pub use raster::{encode_png, rasterize, RasterImage};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::charts::ChartArtifact;
use crate::core::config::DashboardConfig;
use crate::core::error::ExportError;

pub const DOWNLOAD_NAME: &str = "EEG_Report.pdf";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub title: String,
    pub raster_scale: f32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from(&DashboardConfig::default())
    }
}

impl From<&DashboardConfig> for ReportOptions {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            title: config.report_title.clone(),
            raster_scale: config.raster_scale,
        }
    }
}

/// A finished report, ready to offer as a download.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub bytes: Vec<u8>,
    /// Chart titles in page order.
    pub page_titles: Vec<String>,
}

impl ReportDocument {
    pub fn page_count(&self) -> usize {
        self.page_titles.len()
    }

    pub fn filename(&self) -> &'static str {
        DOWNLOAD_NAME
    }

    pub fn data_uri(&self) -> String {
        format!("data:application/pdf;base64,{}", STANDARD.encode(&self.bytes))
    }
}

pub fn export_report(
    charts: &[ChartArtifact],
    options: &ReportOptions,
) -> Result<ReportDocument, ExportError> {
    if charts.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let images = charts
        .iter()
        .map(|chart| rasterize(chart, options.raster_scale))
        .collect::<Result<Vec<_>, _>>()?;

    let pages: Vec<pdf::PageImage<'_>> = charts
        .iter()
        .zip(&images)
        .map(|(chart, image)| pdf::PageImage {
            caption: &chart.title,
            image,
        })
        .collect();
    let bytes = pdf::assemble(&options.title, &pages);

    log::info!(
        "exported report with {} pages ({} bytes)",
        pages.len(),
        bytes.len()
    );

    Ok(ReportDocument {
        bytes,
        page_titles: charts.iter().map(|chart| chart.title.clone()).collect(),
    })
}

/// Single chart as PNG bytes, for the per-chart download buttons.
pub fn encode_chart_png(chart: &ChartArtifact, scale: f32) -> Result<Vec<u8>, ExportError> {
    encode_png(&rasterize(chart, scale)?)
}
