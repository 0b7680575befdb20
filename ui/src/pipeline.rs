//! Top-level entry points the dashboards call.
//!
//! Each pipeline takes the session explicitly, runs its stages, and reports any
//! failure once at `warn` before handing a single [`PipelineError`] back to the view.

use crate::charts::{build_risk_gauge, build_visualizations, ChartArtifact, Visualizations};
use crate::core::config::DashboardConfig;
use crate::core::dataset::Dataset;
use crate::core::error::PipelineError;
use crate::core::profile::PatientProfile;
use crate::core::session::SessionContext;
use crate::report::{export_report, ReportDocument, ReportOptions};
use crate::scoring::{score_dataset, RiskLabel, RiskScorer, RowPrediction};

/// One scored row with its gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessedRow {
    pub prediction: RowPrediction,
    pub gauge: ChartArtifact,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    /// Profile the rows were scored against.
    pub profile: PatientProfile,
    pub rows: Vec<AssessedRow>,
}

impl RiskAssessment {
    pub fn risk_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.prediction.label == RiskLabel::SeizureRisk)
            .count()
    }
}

pub fn run_visualization(
    session: &SessionContext,
    config: &DashboardConfig,
) -> Result<Visualizations, PipelineError> {
    logged("visualization", session, || {
        let dataset = require_dataset(session)?;
        Ok(build_visualizations(dataset, config)?)
    })
}

pub fn run_risk_assessment<S: RiskScorer + ?Sized>(
    session: &SessionContext,
    scorer: &mut S,
) -> Result<RiskAssessment, PipelineError> {
    logged("risk assessment", session, || {
        let dataset = require_dataset(session)?;
        let profile = session.profile().clone();
        let rows = score_dataset(dataset, &profile, scorer)
            .into_iter()
            .map(|prediction| {
                let gauge = build_risk_gauge(&prediction, prediction.row + 1);
                AssessedRow { prediction, gauge }
            })
            .collect();
        Ok(RiskAssessment { profile, rows })
    })
}

/// Renders the dashboard charts and bundles them into a PDF.
pub fn run_report_export(
    session: &SessionContext,
    visualizations: &Visualizations,
    config: &DashboardConfig,
) -> Result<ReportDocument, PipelineError> {
    logged("report export", session, || {
        Ok(export_report(
            &visualizations.artifacts(),
            &ReportOptions::from(config),
        )?)
    })
}

fn require_dataset(session: &SessionContext) -> Result<&Dataset, PipelineError> {
    session.dataset().ok_or(PipelineError::NoDataset)
}

fn logged<T>(
    stage: &str,
    session: &SessionContext,
    run: impl FnOnce() -> Result<T, PipelineError>,
) -> Result<T, PipelineError> {
    run().inspect_err(|err| log::warn!("session {}: {stage} failed: {err}", session.id()))
}
