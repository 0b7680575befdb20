//! Minimal SVG writer shared by the chart builders.
//!
//! Output is plain SVG 1.1 so the same markup renders in the webview and in the
//! rasterizer used for PDF export.

use std::fmt::Write;

use crate::core::format;

pub const FONT_FAMILY: &str = "DejaVu Sans, Arial, Helvetica, sans-serif";
pub const AXIS_COLOR: &str = "#333333";
pub const GRID_COLOR: &str = "#e6e6e6";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

pub struct SvgCanvas {
    width: u32,
    height: u32,
    body: String,
}

impl SvgCanvas {
    /// Starts a canvas with an opaque white background.
    pub fn new(width: u32, height: u32) -> Self {
        let mut canvas = Self {
            width,
            height,
            body: String::new(),
        };
        canvas.rect(0.0, 0.0, width as f64, height as f64, "#ffffff", None);
        canvas
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: Option<&str>) {
        let stroke = stroke
            .map(|s| format!(" stroke='{s}' stroke-width='1'"))
            .unwrap_or_default();
        let _ = writeln!(
            self.body,
            "<rect x='{x:.2}' y='{y:.2}' width='{w:.2}' height='{h:.2}' fill='{fill}'{stroke}/>"
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        let _ = writeln!(
            self.body,
            "<line x1='{x1:.2}' y1='{y1:.2}' x2='{x2:.2}' y2='{y2:.2}' stroke='{stroke}' stroke-width='{width}'/>"
        );
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str, width: f64) {
        if points.is_empty() {
            return;
        }
        let coords = points
            .iter()
            .map(|(x, y)| format!("{x:.2},{y:.2}"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            self.body,
            "<polyline points='{coords}' fill='none' stroke='{stroke}' stroke-width='{width}' stroke-linejoin='round'/>"
        );
    }

    pub fn path(&mut self, d: &str, fill: &str, stroke: Option<&str>) {
        let stroke = stroke
            .map(|s| format!(" stroke='{s}' stroke-width='1'"))
            .unwrap_or_default();
        let _ = writeln!(self.body, "<path d='{d}' fill='{fill}'{stroke}/>");
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, size: f64, anchor: Anchor, fill: &str) {
        let _ = writeln!(
            self.body,
            "<text x='{x:.2}' y='{y:.2}' font-family='{FONT_FAMILY}' font-size='{size}' text-anchor='{}' fill='{fill}'>{}</text>",
            anchor.as_str(),
            escape_xml(content)
        );
    }

    pub fn bold_text(&mut self, x: f64, y: f64, content: &str, size: f64, anchor: Anchor) {
        let _ = writeln!(
            self.body,
            "<text x='{x:.2}' y='{y:.2}' font-family='{FONT_FAMILY}' font-size='{size}' font-weight='bold' text-anchor='{}' fill='{AXIS_COLOR}'>{}</text>",
            anchor.as_str(),
            escape_xml(content)
        );
    }

    /// Text rotated -90° around its anchor point (y-axis labels).
    pub fn vertical_text(&mut self, x: f64, y: f64, content: &str, size: f64) {
        let _ = writeln!(
            self.body,
            "<text x='{x:.2}' y='{y:.2}' transform='rotate(-90 {x:.2} {y:.2})' font-family='{FONT_FAMILY}' font-size='{size}' text-anchor='middle' fill='{AXIS_COLOR}'>{}</text>",
            escape_xml(content)
        );
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>\n{body}</svg>",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

/// Rectangular plotting region mapping data coordinates onto canvas pixels.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl Frame {
    pub fn new(canvas_w: u32, canvas_h: u32, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        let (left, right, top, bottom) = (70.0, 24.0, 48.0, 56.0);
        Self {
            left,
            top,
            width: canvas_w as f64 - left - right,
            height: canvas_h as f64 - top - bottom,
            x_range: widen(x_range),
            y_range: widen(y_range),
        }
    }

    pub fn x(&self, value: f64) -> f64 {
        let (lo, hi) = self.x_range;
        self.left + (value - lo) / (hi - lo) * self.width
    }

    pub fn y(&self, value: f64) -> f64 {
        let (lo, hi) = self.y_range;
        self.top + self.height - (value - lo) / (hi - lo) * self.height
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Grid, tick labels, axis lines, title and axis captions.
    pub fn draw_axes(&self, canvas: &mut SvgCanvas, title: &str, x_label: &str, y_label: &str) {
        for tick in nice_ticks(self.y_range.0, self.y_range.1, 6) {
            let y = self.y(tick);
            canvas.line(self.left, y, self.right(), y, GRID_COLOR, 1.0);
            canvas.text(
                self.left - 8.0,
                y + 4.0,
                &format::format_tick(tick),
                11.0,
                Anchor::End,
                AXIS_COLOR,
            );
        }
        for tick in nice_ticks(self.x_range.0, self.x_range.1, 7) {
            let x = self.x(tick);
            canvas.line(x, self.bottom(), x, self.bottom() + 5.0, AXIS_COLOR, 1.0);
            canvas.text(
                x,
                self.bottom() + 18.0,
                &format::format_tick(tick),
                11.0,
                Anchor::Middle,
                AXIS_COLOR,
            );
        }

        canvas.line(self.left, self.top, self.left, self.bottom(), AXIS_COLOR, 1.0);
        canvas.line(self.left, self.bottom(), self.right(), self.bottom(), AXIS_COLOR, 1.0);

        canvas.bold_text(
            self.left + self.width / 2.0,
            self.top - 18.0,
            title,
            15.0,
            Anchor::Middle,
        );
        canvas.text(
            self.left + self.width / 2.0,
            self.bottom() + 40.0,
            x_label,
            12.0,
            Anchor::Middle,
            AXIS_COLOR,
        );
        canvas.vertical_text(18.0, self.top + self.height / 2.0, y_label, 12.0);
    }
}

/// Round tick positions (1/2/5 × 10^k steps) inside `[lo, hi]`.
pub fn nice_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    if !(lo.is_finite() && hi.is_finite()) || hi <= lo || target == 0 {
        return Vec::new();
    }
    let raw_step = (hi - lo) / target as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw_step)
        .unwrap_or(10.0 * magnitude);

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last)
        .map(|i| {
            let tick = i as f64 * step;
            // snap float noise such as 0.30000000000000004
            (tick / step).round() * step
        })
        .collect()
}

fn widen((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_round_and_inside_range() {
        let ticks = nice_ticks(0.0, 10.0, 5);
        assert_eq!(ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

        let ticks = nice_ticks(-0.93, 0.41, 6);
        assert!(ticks.iter().all(|t| (-0.93..=0.41).contains(t)));
        assert!(ticks.contains(&0.0));
    }

    #[test]
    fn degenerate_ranges_have_no_ticks() {
        assert!(nice_ticks(1.0, 1.0, 5).is_empty());
        assert!(nice_ticks(f64::NAN, 1.0, 5).is_empty());
    }

    #[test]
    fn frame_maps_corners() {
        let frame = Frame::new(640, 420, (0.0, 10.0), (0.0, 1.0));
        assert_eq!(frame.x(0.0), frame.left);
        assert_eq!(frame.x(10.0), frame.right());
        assert_eq!(frame.y(0.0), frame.bottom());
        assert_eq!(frame.y(1.0), frame.top);
    }

    #[test]
    fn text_is_escaped() {
        let mut canvas = SvgCanvas::new(10, 10);
        canvas.text(0.0, 0.0, "a<b & 'c'", 10.0, Anchor::Start, "#000");
        let svg = canvas.finish();
        assert!(svg.contains("a&lt;b &amp; &apos;c&apos;"));
        assert!(svg.starts_with("<svg"));
    }
}
