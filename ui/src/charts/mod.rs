//! Chart artifacts derived from an uploaded dataset.
//!
//! Every builder emits self-contained SVG markup. The views embed it as a data URI
//! and the report exporter rasterizes the same markup, so what is shown on screen
//! is exactly what ends up in the PDF.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::core::config::DashboardConfig;
use crate::core::dataset::Dataset;
use crate::core::error::RenderError;
use crate::core::stats::SignalSummary;

mod gauge;
mod heatmap;
mod histogram;
mod line;
pub mod svg;

pub use gauge::{build_risk_gauge, DELTA_REFERENCE};
pub use heatmap::{build_correlation_heatmap, viridis, HeatmapOutcome, HeatmapWarning, HEATMAP_TITLE};
pub use histogram::{build_histogram, HISTOGRAM_TITLE};
pub use line::{build_line_plot, LINE_TITLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    SignalOverTime,
    Histogram,
    CorrelationHeatmap,
    RiskGauge,
}

/// Rendered chart: a title plus SVG markup at a fixed pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    pub kind: ChartKind,
    pub title: String,
    pub svg: String,
    pub width: u32,
    pub height: u32,
}

impl ChartArtifact {
    pub fn new(
        kind: ChartKind,
        title: impl Into<String>,
        svg: String,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            svg,
            width,
            height,
        }
    }

    pub fn data_uri(&self) -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(self.svg.as_bytes())
        )
    }
}

/// Everything dashboard 1 shows for one upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Visualizations {
    pub summary: Option<SignalSummary>,
    pub signal: ChartArtifact,
    pub histogram: ChartArtifact,
    pub heatmap: HeatmapOutcome,
}

impl Visualizations {
    /// Charts in report order: signal, histogram, then the heatmap if drawn.
    pub fn artifacts(&self) -> Vec<ChartArtifact> {
        let mut charts = vec![self.signal.clone(), self.histogram.clone()];
        if let Some(heatmap) = self.heatmap.chart() {
            charts.push(heatmap.clone());
        }
        charts
    }
}

pub fn build_visualizations(
    dataset: &Dataset,
    config: &DashboardConfig,
) -> Result<Visualizations, RenderError> {
    let signal = build_line_plot(dataset)?;
    let histogram = build_histogram(dataset, config.histogram_bins)?;
    let heatmap = build_correlation_heatmap(dataset);
    let summary = dataset
        .signal_column()
        .numeric_values()
        .ok()
        .and_then(|values| SignalSummary::from_values(&values));

    Ok(Visualizations {
        summary,
        signal,
        histogram,
        heatmap,
    })
}
