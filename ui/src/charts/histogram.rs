use crate::charts::svg::{Frame, SvgCanvas};
use crate::charts::{ChartArtifact, ChartKind};
use crate::core::dataset::Dataset;
use crate::core::error::RenderError;
use crate::core::stats::{Histogram, KernelDensity};

pub const HISTOGRAM_TITLE: &str = "Signal Distribution";
const WIDTH: u32 = 640;
const HEIGHT: u32 = 420;
const BAR_COLOR: &str = "#3cb371";
const BAR_EDGE: &str = "#2e8b57";
const KDE_COLOR: &str = "#2e8b57";
const KDE_POINTS: usize = 200;

/// Equal-width histogram of the signal column with a density curve scaled to counts.
pub fn build_histogram(dataset: &Dataset, bins: usize) -> Result<ChartArtifact, RenderError> {
    let column = dataset.signal_column();
    let values = column.numeric_values()?;
    let histogram =
        Histogram::from_values(&values, bins).ok_or_else(|| RenderError::NoNumericValues {
            column: column.name.clone(),
        })?;

    let (lo, hi) = match (histogram.edges.first(), histogram.edges.last()) {
        (Some(lo), Some(hi)) => (*lo, *hi),
        _ => (0.0, 1.0),
    };
    let curve = density_curve(&values, &histogram, lo, hi);

    let curve_peak = curve.iter().map(|(_, y)| *y).fold(0.0, f64::max);
    let y_max = (histogram.max_count() as f64).max(curve_peak).max(1.0) * 1.08;

    let frame = Frame::new(WIDTH, HEIGHT, (lo, hi), (0.0, y_max));
    let mut canvas = SvgCanvas::new(WIDTH, HEIGHT);
    frame.draw_axes(&mut canvas, HISTOGRAM_TITLE, &column.name, "Count");

    for (idx, count) in histogram.counts.iter().enumerate() {
        if *count == 0 {
            continue;
        }
        let x0 = frame.x(histogram.edges[idx]);
        let x1 = frame.x(histogram.edges[idx + 1]);
        let y = frame.y(*count as f64);
        canvas.rect(x0, y, x1 - x0, frame.bottom() - y, BAR_COLOR, Some(BAR_EDGE));
    }

    let projected: Vec<(f64, f64)> = curve
        .iter()
        .map(|(x, y)| (frame.x(*x), frame.y(*y)))
        .collect();
    canvas.polyline(&projected, KDE_COLOR, 2.0);

    Ok(ChartArtifact::new(
        ChartKind::Histogram,
        HISTOGRAM_TITLE,
        canvas.finish(),
        WIDTH,
        HEIGHT,
    ))
}

/// KDE scaled by `n × bin width` so it overlays the bar heights. Degenerate
/// inputs (fewer than two distinct values) give a flat line at zero.
fn density_curve(values: &[f64], histogram: &Histogram, lo: f64, hi: f64) -> Vec<(f64, f64)> {
    match KernelDensity::scott(values) {
        Some(kde) => {
            let scale = values.len() as f64 * histogram.bin_width();
            kde.sample(lo, hi, KDE_POINTS)
                .into_iter()
                .map(|(x, d)| (x, d * scale))
                .collect()
        }
        None => vec![(lo, 0.0), (hi, 0.0)],
    }
}
