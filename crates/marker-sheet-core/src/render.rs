use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::model::Placement;
use crate::surface::{PdfSurface, Surface};

/// Per-page drawing options, shared by every marker on the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkerStyle {
    /// Extra text printed after the code; may be empty.
    pub description: String,
    pub show_text: bool,
    /// Orientation dot in the top-left corner.
    pub corner_dot: bool,
    /// Thin border along the outer edge, as a cutting guide.
    pub outline: bool,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            description: String::new(),
            show_text: true,
            corner_dot: true,
            outline: true,
        }
    }
}

impl MarkerStyle {
    /// Caption for `code`, or `None` when text is disabled.
    pub fn caption(&self, code: i64) -> Option<String> {
        if !self.show_text {
            return None;
        }
        let description = self.description.trim();
        if description.is_empty() {
            Some(code.to_string())
        } else {
            Some(format!("{code} {description}"))
        }
    }
}

/// Draws a single marker symbol onto a surface.
pub trait MarkerRenderer<S: Surface> {
    /// Draws `code` as a `width` x `width` marker with its top-left corner at `at`.
    fn render(
        &self,
        surface: &mut S,
        code: i64,
        width: f64,
        at: Placement,
        style: &MarkerStyle,
    ) -> Result<(), RenderError>;
}

/// Square binary marker.
///
/// The marker is divided into `CELLS` x `CELLS` cells: a white quiet zone one cell wide, a
/// black border one cell wide, then a `DATA_CELLS` x `DATA_CELLS` data area holding the low
/// bits of the code (most significant first, row-major, black = 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct BitGridRenderer;

impl BitGridRenderer {
    pub const CELLS: usize = 10;
    pub const DATA_CELLS: usize = 6;
    pub const DATA_BITS: u32 = (Self::DATA_CELLS * Self::DATA_CELLS) as u32;
    /// Exclusive upper bound of encodable codes.
    pub const CODE_LIMIT: i64 = 1 << Self::DATA_BITS;

    /// Data bits for `code`, row-major, `true` = black.
    pub fn bits(code: i64) -> Result<Vec<bool>, RenderError> {
        if !(0..Self::CODE_LIMIT).contains(&code) {
            return Err(RenderError::CodeOutOfRange {
                code,
                limit: Self::CODE_LIMIT,
            });
        }
        Ok((0..Self::DATA_BITS)
            .rev()
            .map(|bit| (code >> bit) & 1 == 1)
            .collect())
    }
}

impl MarkerRenderer<PdfSurface> for BitGridRenderer {
    fn render(
        &self,
        surface: &mut PdfSurface,
        code: i64,
        width: f64,
        at: Placement,
        style: &MarkerStyle,
    ) -> Result<(), RenderError> {
        let bits = Self::bits(code)?;
        let cell = width / Self::CELLS as f64;

        // Black frame, then the data area cleared to white.
        let frame = at.x + cell;
        let frame_y = at.y + cell;
        let frame_w = cell * (Self::CELLS - 2) as f64;
        surface.fill_rect(frame, frame_y, frame_w, frame_w, 0.0);
        let data_x = frame + cell;
        let data_y = frame_y + cell;
        let data_w = cell * Self::DATA_CELLS as f64;
        surface.fill_rect(data_x, data_y, data_w, data_w, 1.0);

        for (i, black) in bits.into_iter().enumerate() {
            if black {
                let row = i / Self::DATA_CELLS;
                let col = i % Self::DATA_CELLS;
                surface.fill_rect(
                    data_x + col as f64 * cell,
                    data_y + row as f64 * cell,
                    cell,
                    cell,
                    0.0,
                );
            }
        }

        if style.corner_dot {
            surface.fill_circle(frame + cell / 2.0, frame_y + cell / 2.0, cell * 0.3, 1.0);
        }
        if style.outline {
            surface.stroke_rect(at.x, at.y, width, width, 0.6, (cell * 0.02).max(0.1));
        }
        if let Some(caption) = style.caption(code) {
            let size = cell * 0.5;
            // Baseline inside the bottom quiet zone.
            surface.text(frame, at.y + width - cell * 0.3, size, &caption);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_msb_first() {
        let bits = BitGridRenderer::bits(5).unwrap();
        assert_eq!(bits.len(), 36);
        assert!(bits[..33].iter().all(|b| !b));
        assert_eq!(&bits[33..], &[true, false, true]);
    }

    #[test]
    fn out_of_range_codes_fail() {
        assert!(BitGridRenderer::bits(-1).is_err());
        assert!(BitGridRenderer::bits(BitGridRenderer::CODE_LIMIT).is_err());
        assert!(BitGridRenderer::bits(BitGridRenderer::CODE_LIMIT - 1).is_ok());
    }

    #[test]
    fn caption_includes_description() {
        let mut style = MarkerStyle::default();
        assert_eq!(style.caption(3).as_deref(), Some("3"));
        style.description = "shelf A".into();
        assert_eq!(style.caption(3).as_deref(), Some("3 shelf A"));
        style.show_text = false;
        assert_eq!(style.caption(3), None);
    }
}
