//! SVG → pixel rasterization for report pages and PNG downloads.
//!
//! Each call renders into its own in-memory pixmap; nothing touches the filesystem.

use std::sync::Arc;

use once_cell::sync::Lazy;
use usvg::fontdb;

use crate::charts::ChartArtifact;
use crate::core::error::ExportError;

/// Bundled face so chart text renders even where no system fonts exist (wasm).
const EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const EMBEDDED_FAMILY: &str = "DejaVu Sans";

/// Largest pixmap we will allocate (4096 × 4096).
pub const MAX_PIXELS: u64 = 4096 * 4096;

/// Font faces for chart text, loaded once and shared read-only.
static FONT_DB: Lazy<Arc<fontdb::Database>> = Lazy::new(|| {
    let mut db = embedded_font_db();
    #[cfg(not(target_arch = "wasm32"))]
    db.load_system_fonts();
    log::debug!("font database ready ({} faces)", db.len());
    Arc::new(db)
});

fn embedded_font_db() -> fontdb::Database {
    let mut db = fontdb::Database::new();
    db.load_font_data(EMBEDDED_FONT.to_vec());
    db.set_sans_serif_family(EMBEDDED_FAMILY);
    db
}

/// Opaque 8-bit RGB pixels, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

pub fn rasterize(chart: &ChartArtifact, scale: f32) -> Result<RasterImage, ExportError> {
    rasterize_with(chart, scale, FONT_DB.clone())
}

fn rasterize_with(
    chart: &ChartArtifact,
    scale: f32,
    fonts: Arc<fontdb::Database>,
) -> Result<RasterImage, ExportError> {
    let failed = |reason: String| ExportError::Rasterize {
        title: chart.title.clone(),
        reason,
    };

    let mut options = usvg::Options::default();
    options.fontdb = fonts;
    let tree = usvg::Tree::from_str(&chart.svg, &options).map_err(|err| failed(err.to_string()))?;

    if !(scale.is_finite() && scale > 0.0) {
        return Err(failed(format!("invalid scale {scale}")));
    }
    let size = tree.size();
    let (w, h) = (
        (size.width() * scale).ceil() as f64,
        (size.height() * scale).ceil() as f64,
    );
    if w * h > MAX_PIXELS as f64 {
        return Err(failed(format!(
            "{w}×{h} exceeds the {MAX_PIXELS} pixel limit"
        )));
    }
    let (width, height) = (w as u32, h as u32);
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| failed(format!("invalid canvas size {width}×{height}")))?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let rgb = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue()]
        })
        .collect();

    Ok(RasterImage { width, height, rgb })
}

pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, image.width, image.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.write_header()?.write_image_data(&image.rgb)?;
    }
    Ok(buffer)
}
