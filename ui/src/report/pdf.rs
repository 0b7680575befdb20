//! Paginated PDF assembly: one A4 page per chart image.

use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, Str};

use super::raster::RasterImage;

const MM: f32 = 72.0 / 25.4;
const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const MARGIN: f32 = 10.0 * MM;
const IMAGE_WIDTH: f32 = 180.0 * MM;
/// Vertical gap between the heading block and the chart image.
const SPACING: f32 = 10.0 * MM;
const HEADING_SIZE: f32 = 16.0;
const CAPTION_SIZE: f32 = 12.0;

const HEADING_FONT: Name<'static> = Name(b"F1");
const CAPTION_FONT: Name<'static> = Name(b"F2");
const IMAGE_NAME: Name<'static> = Name(b"Im1");

pub struct PageImage<'a> {
    pub caption: &'a str,
    pub image: &'a RasterImage,
}

/// Writes every page in order; `pages` must be non-empty.
pub fn assemble(heading: &str, pages: &[PageImage<'_>]) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let tree_id = alloc.bump();
    let heading_font_id = alloc.bump();
    let caption_font_id = alloc.bump();

    let page_ids: Vec<(Ref, Ref, Ref)> = pages
        .iter()
        .map(|_| (alloc.bump(), alloc.bump(), alloc.bump()))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().map(|(page, _, _)| *page))
        .count(pages.len() as i32);
    pdf.type1_font(heading_font_id)
        .base_font(Name(b"Helvetica-Bold"));
    pdf.type1_font(caption_font_id).base_font(Name(b"Helvetica"));

    let heading = latin_text(heading);
    let total = pages.len();

    for (idx, (entry, (page_id, content_id, image_id))) in pages.iter().zip(&page_ids).enumerate() {
        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(tree_id);
        page.contents(*content_id);
        let mut resources = page.resources();
        resources.x_objects().pair(IMAGE_NAME, *image_id);
        resources
            .fonts()
            .pair(HEADING_FONT, heading_font_id)
            .pair(CAPTION_FONT, caption_font_id);
        resources.finish();
        page.finish();

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&entry.image.rgb, 6);
        let mut image = pdf.image_xobject(*image_id, &compressed);
        image.filter(Filter::FlateDecode);
        image.width(entry.image.width as i32);
        image.height(entry.image.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        image.finish();

        let content = page_content(&heading, &latin_text(entry.caption), entry.image, idx + 1, total);
        pdf.stream(*content_id, &content);
    }

    pdf.finish()
}

fn page_content(heading: &str, caption: &str, image: &RasterImage, number: usize, total: usize) -> Vec<u8> {
    let mut content = Content::new();

    let heading_y = PAGE_HEIGHT - MARGIN - HEADING_SIZE;
    let caption_y = heading_y - CAPTION_SIZE * 1.8;
    write_line(&mut content, HEADING_FONT, HEADING_SIZE, MARGIN, heading_y, heading);
    write_line(&mut content, CAPTION_FONT, CAPTION_SIZE, MARGIN, caption_y, caption);

    let footer = format!("Page {number} of {total}");
    write_line(&mut content, CAPTION_FONT, 9.0, MARGIN, MARGIN, &footer);

    let image_top = caption_y - SPACING;
    let (w, h) = fit_image(image, image_top - MARGIN * 2.0);
    content.save_state();
    content.transform([w, 0.0, 0.0, h, MARGIN, image_top - h]);
    content.x_object(IMAGE_NAME);
    content.restore_state();

    content.finish()
}

/// Fixed width; shrinks only if a tall chart would run off the page.
fn fit_image(image: &RasterImage, max_height: f32) -> (f32, f32) {
    let aspect = image.height as f32 / image.width.max(1) as f32;
    let height = IMAGE_WIDTH * aspect;
    if height > max_height {
        (max_height / aspect, max_height)
    } else {
        (IMAGE_WIDTH, height)
    }
}

fn write_line(content: &mut Content, font: Name<'_>, size: f32, x: f32, y: f32, text: &str) {
    content.begin_text();
    content.set_font(font, size);
    content.next_line(x, y);
    content.show(Str(text.as_bytes()));
    content.end_text();
}

/// The base-14 fonts only cover Latin text; anything else becomes `?`.
fn latin_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}
