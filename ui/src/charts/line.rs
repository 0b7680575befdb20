use crate::charts::svg::{Anchor, Frame, SvgCanvas, AXIS_COLOR};
use crate::charts::{ChartArtifact, ChartKind};
use crate::core::dataset::Dataset;
use crate::core::error::RenderError;
use crate::core::stats;

pub const LINE_TITLE: &str = "EEG Time Series";
const WIDTH: u32 = 640;
const HEIGHT: u32 = 420;
const LINE_COLOR: &str = "#1e90ff";

/// Signal column against row index. Missing cells split the trace.
pub fn build_line_plot(dataset: &Dataset) -> Result<ChartArtifact, RenderError> {
    let column = dataset.signal_column();
    let points = column.indexed_values()?;

    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let (y_min, y_max) = stats::min_max(&values).unwrap_or((0.0, 1.0));
    let pad = ((y_max - y_min) * 0.05).max(f64::EPSILON);
    let last_index = dataset.row_count().saturating_sub(1).max(1) as f64;

    let frame = Frame::new(WIDTH, HEIGHT, (0.0, last_index), (y_min - pad, y_max + pad));
    let mut canvas = SvgCanvas::new(WIDTH, HEIGHT);
    frame.draw_axes(&mut canvas, LINE_TITLE, "Sample index", &column.name);

    for segment in contiguous_segments(&points) {
        let projected: Vec<(f64, f64)> = segment
            .iter()
            .map(|(idx, value)| (frame.x(*idx as f64), frame.y(*value)))
            .collect();
        if projected.len() == 1 {
            let (x, y) = projected[0];
            canvas.line(x - 1.5, y, x + 1.5, y, LINE_COLOR, 2.0);
        } else {
            canvas.polyline(&projected, LINE_COLOR, 1.5);
        }
    }

    // legend
    let lx = frame.right() - 150.0;
    let ly = frame.top + 14.0;
    canvas.rect(lx - 8.0, ly - 14.0, 150.0, 24.0, "#ffffff", Some("#cccccc"));
    canvas.line(lx, ly - 2.0, lx + 22.0, ly - 2.0, LINE_COLOR, 2.0);
    canvas.text(lx + 30.0, ly + 2.0, &column.name, 11.0, Anchor::Start, AXIS_COLOR);

    Ok(ChartArtifact::new(
        ChartKind::SignalOverTime,
        LINE_TITLE,
        canvas.finish(),
        WIDTH,
        HEIGHT,
    ))
}

fn contiguous_segments(points: &[(usize, f64)]) -> Vec<&[(usize, f64)]> {
    let mut segments = Vec::new();
    let mut start = 0;
    for i in 1..points.len() {
        if points[i].0 != points[i - 1].0 + 1 {
            segments.push(&points[start..i]);
            start = i;
        }
    }
    if start < points.len() {
        segments.push(&points[start..]);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plots_single_signal_column() {
        let dataset = Dataset::from_csv_bytes(b"sig\n1.0\n2.0\n1.5\n").unwrap();
        let chart = build_line_plot(&dataset).unwrap();
        assert_eq!(chart.kind, ChartKind::SignalOverTime);
        assert_eq!(chart.title, LINE_TITLE);
        assert_eq!(chart.svg.matches("<polyline").count(), 1);
    }

    #[test]
    fn gaps_split_the_trace() {
        let points = [(0, 1.0), (1, 2.0), (3, 1.0), (4, 0.0), (6, 2.0)];
        let segments = contiguous_segments(&points);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].len(), 2);
        assert_eq!(segments[2], &[(6, 2.0)]);
    }

    #[test]
    fn text_signal_is_a_render_error() {
        let dataset = Dataset::from_csv_bytes(b"label,v\nspike,1\nrest,2\n").unwrap();
        assert!(matches!(
            build_line_plot(&dataset),
            Err(RenderError::NonNumericColumn { .. })
        ));
    }
}
