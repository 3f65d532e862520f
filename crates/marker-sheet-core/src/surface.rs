use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::error::RenderError;

/// Millimetres to PostScript points.
pub const MM_TO_PT: f64 = 2.8346278;

/// Page-level drawing target that markers are rendered onto.
///
/// A surface is created at a page size in points, told once how many points one drawing
/// unit covers, drawn on, then consumed by [`finish`](Surface::finish).
pub trait Surface {
    /// Points per drawing unit (e.g. [`MM_TO_PT`] to draw in millimetres).
    fn set_unit_scale(&mut self, scale: f64);
    /// `(width, height)` in points.
    fn page_size_pt(&self) -> (f64, f64);
    /// Flushes the page and returns the encoded document.
    fn finish(self) -> Result<Vec<u8>, RenderError>;
}

const FONT_NAME: Name<'static> = Name(b"F1");

/// Single-page PDF surface.
///
/// Drawing coordinates have their origin at the top-left corner with y growing downward,
/// in units set by [`Surface::set_unit_scale`].
pub struct PdfSurface {
    width_pt: f64,
    height_pt: f64,
    scale: f64,
    body: Content,
}

impl PdfSurface {
    pub fn new(width_pt: f64, height_pt: f64) -> Self {
        Self {
            width_pt,
            height_pt,
            scale: 1.0,
            body: Content::new(),
        }
    }

    /// Surface sized for a page given in millimetres.
    pub fn from_mm(width_mm: f64, height_mm: f64) -> Self {
        Self::new(width_mm * MM_TO_PT, height_mm * MM_TO_PT)
    }

    /// Filled square/rectangle; `gray` 0.0 is black, 1.0 white.
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, gray: f32) {
        self.body
            .set_fill_gray(gray)
            .rect(x as f32, y as f32, w as f32, h as f32)
            .fill_nonzero();
    }

    pub fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, gray: f32, line_width: f64) {
        self.body
            .set_stroke_gray(gray)
            .set_line_width(line_width as f32)
            .rect(x as f32, y as f32, w as f32, h as f32)
            .stroke();
    }

    /// Filled disc approximated with four cubic Béziers.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, gray: f32) {
        const KAPPA: f64 = 0.552_284_75;
        let k = r * KAPPA;
        let c = &mut self.body;
        c.set_fill_gray(gray);
        c.move_to((cx + r) as f32, cy as f32);
        c.cubic_to(
            (cx + r) as f32,
            (cy + k) as f32,
            (cx + k) as f32,
            (cy + r) as f32,
            cx as f32,
            (cy + r) as f32,
        );
        c.cubic_to(
            (cx - k) as f32,
            (cy + r) as f32,
            (cx - r) as f32,
            (cy + k) as f32,
            (cx - r) as f32,
            cy as f32,
        );
        c.cubic_to(
            (cx - r) as f32,
            (cy - k) as f32,
            (cx - k) as f32,
            (cy - r) as f32,
            cx as f32,
            (cy - r) as f32,
        );
        c.cubic_to(
            (cx + k) as f32,
            (cy - r) as f32,
            (cx + r) as f32,
            (cy - k) as f32,
            (cx + r) as f32,
            cy as f32,
        );
        c.close_path();
        c.fill_nonzero();
    }

    /// Left-aligned Helvetica text with its baseline at `y`.
    pub fn text(&mut self, x: f64, y: f64, size: f64, text: &str) {
        // Only ASCII goes through the built-in font encoding; anything else becomes '?'.
        let bytes: Vec<u8> = text
            .chars()
            .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
            .collect();
        self.body
            .set_fill_gray(0.0)
            .begin_text()
            .set_font(FONT_NAME, size as f32)
            // Undo the page y-flip so glyphs stand upright.
            .set_text_matrix([1.0, 0.0, 0.0, -1.0, x as f32, y as f32])
            .show(Str(&bytes))
            .end_text();
    }
}

impl Surface for PdfSurface {
    fn set_unit_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn page_size_pt(&self) -> (f64, f64) {
        (self.width_pt, self.height_pt)
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let page_id = Ref::new(3);
        let content_id = Ref::new(4);
        let font_id = Ref::new(5);

        let s = self.scale as f32;
        let mut stream = Content::new();
        stream
            .save_state()
            .transform([s, 0.0, 0.0, -s, 0.0, self.height_pt as f32]);
        let mut tail = Content::new();
        tail.restore_state();
        // Each buffer ends on an operator without a newline; separate them before joining.
        let mut raw = stream.finish();
        for part in [self.body.finish(), tail.finish()] {
            raw.push(b'\n');
            raw.extend_from_slice(&part);
        }

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw, 6);

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id).kids([page_id]).count(1);
        {
            let mut page = pdf.page(page_id);
            page.media_box(Rect::new(
                0.0,
                0.0,
                self.width_pt as f32,
                self.height_pt as f32,
            ))
            .parent(pages_id)
            .contents(content_id);
            page.resources().fonts().pair(FONT_NAME, font_id);
        }
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.stream(content_id, &compressed)
            .filter(Filter::FlateDecode);

        Ok(pdf.finish())
    }
}
