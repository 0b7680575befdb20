use crate::charts::svg::{Anchor, SvgCanvas, AXIS_COLOR};
use crate::charts::{ChartArtifact, ChartKind};
use crate::core::dataset::Dataset;
use crate::core::format;
use crate::core::stats::CorrelationMatrix;

pub const HEATMAP_TITLE: &str = "Correlation Heatmap";
const WIDTH: u32 = 640;
const HEIGHT: u32 = 520;
const TOP: f64 = 60.0;
const LABEL_GUTTER: f64 = 110.0;
/// Square plotting area; the rest is labels and the colour bar.
const GRID_SIZE: f64 = 420.0;
const MAX_CELL: f64 = 72.0;
/// Below this the two-decimal annotations no longer fit.
const MIN_ANNOTATED_CELL: f64 = 30.0;
const MIN_ROW_LABEL_SPACING: f64 = 14.0;
const MIN_COLUMN_LABEL_SPACING: f64 = 64.0;

/// Viridis anchor colours, evenly spaced from 0.0 to 1.0.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

/// Reason a heatmap was not drawn. A normal state, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatmapWarning {
    NotEnoughNumericColumns { found: usize },
}

impl HeatmapWarning {
    pub fn message(&self) -> String {
        match self {
            HeatmapWarning::NotEnoughNumericColumns { found } => format!(
                "Not enough numeric features to plot a correlation heatmap ({found} numeric column{}).",
                if *found == 1 { "" } else { "s" }
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HeatmapOutcome {
    Rendered {
        chart: ChartArtifact,
        matrix: CorrelationMatrix,
    },
    Skipped(HeatmapWarning),
}

impl HeatmapOutcome {
    pub fn chart(&self) -> Option<&ChartArtifact> {
        match self {
            HeatmapOutcome::Rendered { chart, .. } => Some(chart),
            HeatmapOutcome::Skipped(_) => None,
        }
    }

    pub fn warning(&self) -> Option<HeatmapWarning> {
        match self {
            HeatmapOutcome::Rendered { .. } => None,
            HeatmapOutcome::Skipped(warning) => Some(*warning),
        }
    }
}

/// Pearson correlations across integer/float columns, annotated per cell.
pub fn build_correlation_heatmap(dataset: &Dataset) -> HeatmapOutcome {
    let numeric: Vec<_> = dataset.numeric_columns().collect();
    if numeric.len() < 2 {
        log::debug!("heatmap skipped: {} numeric column(s)", numeric.len());
        return HeatmapOutcome::Skipped(HeatmapWarning::NotEnoughNumericColumns {
            found: numeric.len(),
        });
    }

    let labels = numeric.iter().map(|c| c.name.clone()).collect();
    let series: Vec<Vec<Option<f64>>> = numeric
        .iter()
        .map(|c| c.cells.iter().map(|cell| cell.as_f64()).collect())
        .collect();
    let matrix = CorrelationMatrix::pearson(labels, &series);
    let chart = render_matrix(&matrix);

    HeatmapOutcome::Rendered { chart, matrix }
}

fn render_matrix(matrix: &CorrelationMatrix) -> ChartArtifact {
    let n = matrix.size();
    let layout = GridLayout::for_columns(n);
    let (left, top, cell, grid) = (LABEL_GUTTER, TOP, layout.cell, layout.grid);

    let (v_min, v_max) = value_range(matrix);
    let mut canvas = SvgCanvas::new(WIDTH, HEIGHT);
    canvas.bold_text(left + grid / 2.0, 32.0, HEATMAP_TITLE, 15.0, Anchor::Middle);

    for row in 0..n {
        for col in 0..n {
            let value = matrix.values[row][col];
            let t = (value - v_min) / (v_max - v_min);
            let (r, g, b) = viridis(t);
            let x = left + col as f64 * cell;
            let y = top + row as f64 * cell;
            canvas.rect(x, y, cell, cell, &rgb_hex(r, g, b), None);

            if layout.annotate {
                let luminance = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
                let ink = if luminance > 140.0 { "#000000" } else { "#ffffff" };
                canvas.text(
                    x + cell / 2.0,
                    y + cell / 2.0 + layout.annotation_size / 3.0,
                    &format::format_number(value, 2),
                    layout.annotation_size,
                    Anchor::Middle,
                    ink,
                );
            }
        }
    }

    for (idx, label) in matrix.labels.iter().enumerate() {
        let label = truncate_label(label);
        let centre = idx as f64 * cell + cell / 2.0;
        if idx % layout.row_label_step == 0 {
            canvas.text(left - 8.0, top + centre + 4.0, &label, 11.0, Anchor::End, AXIS_COLOR);
        }
        if idx % layout.column_label_step == 0 {
            canvas.text(left + centre, top + grid + 18.0, &label, 11.0, Anchor::Middle, AXIS_COLOR);
        }
    }

    // colour bar
    let bar_x = left + grid + 24.0;
    let steps = 40;
    let step_h = grid / steps as f64;
    for i in 0..steps {
        let t = 1.0 - (i as f64 + 0.5) / steps as f64;
        let (r, g, b) = viridis(t);
        canvas.rect(bar_x, top + i as f64 * step_h, 16.0, step_h + 0.5, &rgb_hex(r, g, b), None);
    }
    canvas.text(bar_x + 22.0, top + 10.0, &format::format_number(v_max, 2), 11.0, Anchor::Start, AXIS_COLOR);
    canvas.text(bar_x + 22.0, top + grid, &format::format_number(v_min, 2), 11.0, Anchor::Start, AXIS_COLOR);

    ChartArtifact::new(
        ChartKind::CorrelationHeatmap,
        HEATMAP_TITLE,
        canvas.finish(),
        WIDTH,
        HEIGHT,
    )
}

/// Cell geometry inside the fixed canvas; cells shrink as columns are added.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GridLayout {
    cell: f64,
    grid: f64,
    annotate: bool,
    annotation_size: f64,
    /// Every n-th axis label is drawn so neighbours never overlap.
    row_label_step: usize,
    column_label_step: usize,
}

impl GridLayout {
    fn for_columns(n: usize) -> Self {
        let n = n.max(1);
        let cell = (GRID_SIZE / n as f64).min(MAX_CELL);
        Self {
            cell,
            grid: cell * n as f64,
            annotate: cell >= MIN_ANNOTATED_CELL,
            annotation_size: (cell * 0.28).clamp(8.0, 12.0),
            row_label_step: (MIN_ROW_LABEL_SPACING / cell).ceil().max(1.0) as usize,
            column_label_step: (MIN_COLUMN_LABEL_SPACING / cell).ceil().max(1.0) as usize,
        }
    }
}

/// Colour scale spans the observed values, like an unpinned seaborn heatmap.
fn value_range(matrix: &CorrelationMatrix) -> (f64, f64) {
    let flat = matrix.values.iter().flatten().copied();
    let lo = flat.clone().fold(f64::INFINITY, f64::min);
    let hi = flat.fold(f64::NEG_INFINITY, f64::max);
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 1.0, hi)
    }
}

pub fn viridis(t: f64) -> (u8, u8, u8) {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let idx = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - idx as f64;
    let (a, b) = (VIRIDIS[idx], VIRIDIS[idx + 1]);
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

fn rgb_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn truncate_label(label: &str) -> String {
    const MAX: usize = 14;
    if label.chars().count() <= MAX {
        label.to_string()
    } else {
        let head: String = label.chars().take(MAX - 1).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_numeric_column_is_skipped_with_warning() {
        let dataset = Dataset::from_csv_bytes(b"sig\n1.0\n2.0\n1.5\n").unwrap();
        let outcome = build_correlation_heatmap(&dataset);
        assert_eq!(
            outcome,
            HeatmapOutcome::Skipped(HeatmapWarning::NotEnoughNumericColumns { found: 1 })
        );
        assert!(outcome.chart().is_none());
    }

    #[test]
    fn text_columns_do_not_count() {
        let dataset = Dataset::from_csv_bytes(b"sig,label\n1,a\n2,b\n").unwrap();
        assert_eq!(
            build_correlation_heatmap(&dataset).warning(),
            Some(HeatmapWarning::NotEnoughNumericColumns { found: 1 })
        );
    }

    #[test]
    fn numeric_columns_produce_annotated_square_matrix() {
        let csv = "a,b,label,c\n1,2,x,9\n2,4,y,3\n3,7,z,5\n4,8,w,1\n";
        let dataset = Dataset::from_csv_bytes(csv.as_bytes()).unwrap();
        let HeatmapOutcome::Rendered { chart, matrix } = build_correlation_heatmap(&dataset) else {
            panic!("expected a heatmap");
        };

        assert_eq!(matrix.labels, vec!["a", "b", "c"]);
        assert_eq!(matrix.values.len(), 3);
        for (i, row) in matrix.values.iter().enumerate() {
            assert_eq!(row.len(), 3);
            assert_eq!(row[i], 1.0);
            assert!(row.iter().all(|v| (-1.0..=1.0).contains(v)));
        }
        assert_eq!(chart.kind, ChartKind::CorrelationHeatmap);
        assert!(chart.svg.contains(">1.00<"));
    }

    #[test]
    fn many_channels_keep_a_fixed_canvas() {
        let channels = 178;
        let header: Vec<String> = (0..channels).map(|i| format!("X{i}")).collect();
        let mut csv = header.join(",");
        csv.push('\n');
        for row in 0..6 {
            let line: Vec<String> = (0..channels)
                .map(|col| ((row * 7 + col * 3) % 11).to_string())
                .collect();
            csv.push_str(&line.join(","));
            csv.push('\n');
        }
        let dataset = Dataset::from_csv_bytes(csv.as_bytes()).unwrap();
        let HeatmapOutcome::Rendered { chart, matrix } = build_correlation_heatmap(&dataset) else {
            panic!("expected a heatmap");
        };

        assert_eq!(matrix.size(), channels);
        assert_eq!((chart.width, chart.height), (WIDTH, HEIGHT));
        // no per-cell annotations, only thinned axis labels
        assert!(chart.svg.matches("<text").count() < 100);
    }

    #[test]
    fn layout_shrinks_cells_and_thins_labels() {
        let few = GridLayout::for_columns(3);
        assert_eq!(few.cell, MAX_CELL);
        assert!(few.annotate);
        assert_eq!(few.row_label_step, 1);

        let many = GridLayout::for_columns(64);
        assert!(many.grid <= GRID_SIZE);
        assert!(!many.annotate);
        assert!(many.row_label_step > 1);
        assert!(many.column_label_step >= many.row_label_step);
    }

    #[test]
    fn viridis_endpoints() {
        assert_eq!(viridis(0.0), (68, 1, 84));
        assert_eq!(viridis(1.0), (253, 231, 37));
        assert_eq!(viridis(f64::NAN), (68, 1, 84));
    }
}
