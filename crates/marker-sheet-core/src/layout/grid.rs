use super::too_small;
use crate::error::LayoutError;
use crate::model::{LayoutMode, PageGeometry, Placement};

/// Gap between neighbouring markers in the 2x2 grid. Currently always zero.
pub const GRID_PADDING: f64 = 0.0;

/// Four markers in a 2x2 block centered on the page.
///
/// Order is top-left, top-right, bottom-left, bottom-right; codes are paired against it in
/// that order.
pub fn two_by_two(g: PageGeometry) -> Result<Vec<Placement>, LayoutError> {
    let w = g.marker_width;
    let span = 2.0 * w + GRID_PADDING;
    if span > g.page_width || span > g.page_height {
        return Err(too_small(LayoutMode::FOUR_UP, g));
    }
    let tlx = g.page_width / 2.0 - w - GRID_PADDING / 2.0;
    let tly = g.page_height / 2.0 - w - GRID_PADDING / 2.0;
    let step = GRID_PADDING / 2.0 + w;
    Ok(vec![
        Placement::new(tlx, tly),
        Placement::new(tlx + step, tly),
        Placement::new(tlx, tly + step),
        Placement::new(tlx + step, tly + step),
    ])
}
