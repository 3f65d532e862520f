use super::too_small;
use crate::error::LayoutError;
use crate::model::{LayoutMode, PageGeometry, Placement};

/// One marker centered on the page.
pub fn centered(g: PageGeometry) -> Result<Vec<Placement>, LayoutError> {
    let w = g.marker_width;
    if w > g.page_width || w > g.page_height {
        return Err(too_small(LayoutMode::SINGLE, g));
    }
    Ok(vec![Placement::new(
        (g.page_width - w) / 2.0,
        (g.page_height - w) / 2.0,
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_hundred_mm_is_centered() {
        let p = centered(PageGeometry::new(210.0, 297.0, 100.0)).unwrap();
        assert_eq!(p, vec![Placement::new(55.0, 98.5)]);
    }

    #[test]
    fn full_width_marker_touches_both_edges() {
        let p = centered(PageGeometry::new(100.0, 150.0, 100.0)).unwrap();
        assert_eq!(p[0].x, 0.0);
        assert_eq!(p[0].y, 25.0);
    }

    #[test]
    fn wider_than_page_fails() {
        let err = centered(PageGeometry::new(100.0, 300.0, 101.0)).unwrap_err();
        assert!(matches!(err, LayoutError::TooSmall { mode: 1, .. }));
    }
}
