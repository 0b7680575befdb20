//! End-to-end runs of both dashboards against small in-memory uploads.

use rand::{rngs::StdRng, SeedableRng};

use ui::charts::{ChartKind, HeatmapOutcome, HeatmapWarning};
use ui::core::config::DashboardConfig;
use ui::core::error::{PipelineError, RenderError};
use ui::core::profile::{Gender, PatientProfile};
use ui::core::session::SessionContext;
use ui::pipeline::{run_report_export, run_risk_assessment, run_visualization};
use ui::scoring::{MockScorer, RiskLabel, AGE_OVER_60_TIP, FEMALE_TIP, HIGH_RISK_TIPS};

const MULTI_CHANNEL: &str = "\
Fp1,Fp2,C3,label
12.5,11.0,3.2,rest
13.1,11.9,2.8,rest
15.8,14.2,1.1,spike
11.2,10.1,3.9,rest
14.0,13.3,2.0,spike
";

fn session_with(csv: &str) -> SessionContext {
    let mut session = SessionContext::new();
    session
        .load_csv("recording.csv", csv.as_bytes())
        .expect("fixture parses");
    session
}

#[test]
fn single_signal_column_skips_heatmap() {
    let session = session_with("sig\n1.0\n2.0\n1.5");
    let charts = run_visualization(&session, &DashboardConfig::default()).unwrap();

    assert_eq!(charts.signal.kind, ChartKind::SignalOverTime);
    assert!(charts.signal.svg.starts_with("<svg"));
    assert_eq!(
        charts.heatmap,
        HeatmapOutcome::Skipped(HeatmapWarning::NotEnoughNumericColumns { found: 1 })
    );
    assert_eq!(charts.artifacts().len(), 2);
}

#[test]
fn multi_channel_upload_exports_three_pages() {
    let session = session_with(MULTI_CHANNEL);
    let config = DashboardConfig::default();
    let charts = run_visualization(&session, &config).unwrap();

    match &charts.heatmap {
        HeatmapOutcome::Rendered { matrix, .. } => {
            assert_eq!(matrix.labels, vec!["Fp1", "Fp2", "C3"]);
            for i in 0..matrix.size() {
                assert_eq!(matrix.get(i, i), Some(1.0));
                for j in 0..matrix.size() {
                    let value = matrix.get(i, j).unwrap();
                    assert!((-1.0..=1.0).contains(&value));
                    assert_eq!(value, matrix.get(j, i).unwrap());
                }
            }
        }
        other => panic!("expected heatmap, got {other:?}"),
    }

    let report = run_report_export(&session, &charts, &config).unwrap();
    assert_eq!(report.page_count(), 3);
    assert!(report.bytes.starts_with(b"%PDF-"));
    assert!(report.data_uri().starts_with("data:application/pdf;base64,"));
}

#[test]
fn text_signal_column_is_a_render_error() {
    let session = session_with("label,value\nspike,1\nrest,2\n");
    let err = run_visualization(&session, &DashboardConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Render(RenderError::NonNumericColumn { .. })
    ));
}

#[test]
fn risk_dashboard_scores_every_row_for_the_profile() {
    let mut session = session_with(MULTI_CHANNEL);
    session.set_profile(PatientProfile::new("Rosa", 67, Gender::Female).unwrap());

    let mut scorer = MockScorer::new(StdRng::seed_from_u64(2024));
    let assessment = run_risk_assessment(&session, &mut scorer).unwrap();
    assert_eq!(assessment.rows.len(), 5);

    for row in &assessment.rows {
        let p = row.prediction.probability;
        assert!((30.0..=100.0).contains(&p));
        assert_eq!(row.prediction.label == RiskLabel::SeizureRisk, p > 80.0);

        let tips = &row.prediction.tips;
        assert_eq!(tips.last(), Some(&FEMALE_TIP));
        assert!(tips.contains(&AGE_OVER_60_TIP));
        assert_eq!(tips.contains(&HIGH_RISK_TIPS[0]), p > 80.0);
    }
}

#[test]
fn reupload_replaces_previous_results() {
    let mut session = session_with(MULTI_CHANNEL);
    let config = DashboardConfig::default();
    assert!(run_visualization(&session, &config).unwrap().heatmap.chart().is_some());

    session.load_csv("second.csv", b"sig\n4\n5\n").unwrap();
    let charts = run_visualization(&session, &config).unwrap();
    assert!(charts.heatmap.chart().is_none());
    assert_eq!(charts.summary.map(|s| s.count), Some(2));

    assert!(session.load_csv("broken.csv", b"a,b\n1\n").is_err());
    assert!(matches!(
        run_visualization(&session, &config),
        Err(PipelineError::NoDataset)
    ));
}
