//! Semicircular risk gauge for one scored row.

use std::f64::consts::PI;

use crate::charts::svg::{Anchor, SvgCanvas, AXIS_COLOR};
use crate::charts::{ChartArtifact, ChartKind};
use crate::core::format;
use crate::scoring::{RiskLabel, RowPrediction};

const WIDTH: u32 = 360;
const HEIGHT: u32 = 260;
const CX: f64 = 180.0;
const CY: f64 = 190.0;
const OUTER: f64 = 130.0;
const INNER: f64 = 84.0;
/// Delta shown under the value is measured against this reference.
pub const DELTA_REFERENCE: f64 = 50.0;

/// Colour bands on the 0–100 scale.
const BANDS: [(f64, f64, &str); 3] = [
    (0.0, 50.0, "#90ee90"),
    (50.0, 80.0, "#ffa500"),
    (80.0, 100.0, "#ff0000"),
];

/// Gauge for a single row; `patient_number` is 1-based.
pub fn build_risk_gauge(prediction: &RowPrediction, patient_number: usize) -> ChartArtifact {
    let title = format!("Patient {patient_number} Risk (%)");
    let mut canvas = SvgCanvas::new(WIDTH, HEIGHT);
    canvas.bold_text(CX, 28.0, &title, 15.0, Anchor::Middle);

    for (from, to, color) in BANDS {
        canvas.path(&sector(from, to, OUTER, INNER), color, None);
    }

    let bar_color = match prediction.label {
        RiskLabel::SeizureRisk => "#dc143c",
        RiskLabel::NoRisk => "#008000",
    };
    let value = prediction.probability.clamp(0.0, 100.0);
    if value > 0.0 {
        let mid = (OUTER + INNER) / 2.0;
        canvas.path(&sector(0.0, value, mid + 12.0, mid - 12.0), bar_color, None);
    }

    for tick in [0.0, 20.0, 40.0, 60.0, 80.0, 100.0] {
        let (x, y) = polar(tick, OUTER + 14.0);
        canvas.text(x, y + 4.0, &format::format_tick(tick), 11.0, Anchor::Middle, AXIS_COLOR);
    }

    canvas.bold_text(CX, CY - 10.0, &format::format_number(prediction.probability, 2), 30.0, Anchor::Middle);

    let delta = prediction.probability - DELTA_REFERENCE;
    let (arrow, delta_color) = if delta >= 0.0 {
        ("▲", "#ff0000")
    } else {
        ("▼", "#ff4136")
    };
    canvas.text(
        CX,
        CY + 28.0,
        &format!("{arrow} {delta:+.2}"),
        15.0,
        Anchor::Middle,
        delta_color,
    );

    ChartArtifact::new(ChartKind::RiskGauge, title, canvas.finish(), WIDTH, HEIGHT)
}

/// Point on the gauge arc: 0 at the left end, 100 at the right.
fn polar(value: f64, radius: f64) -> (f64, f64) {
    let theta = PI * (1.0 - value / 100.0);
    (CX + radius * theta.cos(), CY - radius * theta.sin())
}

/// Annular sector between two scale values.
fn sector(from: f64, to: f64, outer: f64, inner: f64) -> String {
    let (ox0, oy0) = polar(from, outer);
    let (ox1, oy1) = polar(to, outer);
    let (ix1, iy1) = polar(to, inner);
    let (ix0, iy0) = polar(from, inner);
    format!(
        "M {ox0:.2} {oy0:.2} A {outer} {outer} 0 0 1 {ox1:.2} {oy1:.2} L {ix1:.2} {iy1:.2} A {inner} {inner} 0 0 0 {ix0:.2} {iy0:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(probability: f64) -> RowPrediction {
        RowPrediction {
            row: 0,
            probability,
            label: RiskLabel::classify(probability, 80.0),
            tips: Vec::new(),
        }
    }

    #[test]
    fn risk_bar_is_crimson() {
        let chart = build_risk_gauge(&prediction(91.25), 1);
        assert_eq!(chart.kind, ChartKind::RiskGauge);
        assert_eq!(chart.title, "Patient 1 Risk (%)");
        assert!(chart.svg.contains("fill='#dc143c'"));
        assert!(chart.svg.contains(">91.25<"));
        assert!(chart.svg.contains("+41.25"));
    }

    #[test]
    fn safe_bar_is_green_with_negative_delta() {
        let chart = build_risk_gauge(&prediction(42.0), 3);
        assert!(chart.svg.contains("fill='#008000'"));
        assert!(chart.svg.contains("-8.00"));
    }

    #[test]
    fn arc_endpoints() {
        let (x0, y0) = polar(0.0, 10.0);
        let (x1, y1) = polar(100.0, 10.0);
        assert!((x0 - (CX - 10.0)).abs() < 1e-9 && (y0 - CY).abs() < 1e-9);
        assert!((x1 - (CX + 10.0)).abs() < 1e-9 && (y1 - CY).abs() < 1e-9);
    }
}
