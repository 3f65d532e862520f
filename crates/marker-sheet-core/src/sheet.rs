use tracing::{info, instrument};

use crate::config::SheetConfig;
use crate::coordinator::{coordinate, render_assignments};
use crate::error::Result;
use crate::layout::LayoutRegistry;
use crate::model::{PageGeometry, SheetLayout};
use crate::render::{BitGridRenderer, MarkerRenderer, MarkerStyle};
use crate::surface::{MM_TO_PT, PdfSurface, Surface};

/// Output of a sheet run: the computed layout and the encoded PDF.
#[derive(Debug)]
pub struct SheetOutput {
    pub layout: SheetLayout,
    pub pdf: Vec<u8>,
}

/// Resolves the paper, computes placements for the configured mode and pairs them with `codes`.
///
/// Nothing is drawn; layout and capacity errors surface here.
#[instrument(skip_all, fields(codes = codes.len()))]
pub fn plan_sheet(
    codes: &[i64],
    cfg: &SheetConfig,
    registry: &LayoutRegistry,
) -> Result<SheetLayout> {
    cfg.validate()?;
    let geometry = PageGeometry::for_paper(cfg.paper, cfg.marker_width_mm);
    let positions = registry.compute_placements(geometry, cfg.layout)?;
    let assignments = coordinate(codes, positions)?;
    Ok(SheetLayout {
        paper: cfg.paper,
        page_width: geometry.page_width,
        page_height: geometry.page_height,
        marker_width: geometry.marker_width,
        mode: cfg.layout,
        assignments,
    })
}

/// Draws every marker of `layout` onto `surface` and finishes it.
///
/// A render failure returns immediately; the surface is dropped without being finished, so no
/// document is produced for a partially drawn page.
#[instrument(skip_all, fields(markers = layout.assignments.len()))]
pub fn render_sheet<S, R>(
    layout: &SheetLayout,
    style: &MarkerStyle,
    mut surface: S,
    renderer: &R,
) -> Result<Vec<u8>>
where
    S: Surface,
    R: MarkerRenderer<S> + ?Sized,
{
    surface.set_unit_scale(MM_TO_PT);
    render_assignments(
        &mut surface,
        renderer,
        &layout.assignments,
        layout.marker_width,
        style,
    )?;
    let bytes = surface.finish()?;
    info!(
        paper = %layout.paper,
        mode = %layout.mode,
        markers = layout.assignments.len(),
        bytes = bytes.len(),
        "sheet rendered"
    );
    Ok(bytes)
}

/// Plans and renders a PDF sheet with the built-in bit-grid markers.
pub fn build_sheet(
    codes: &[i64],
    cfg: &SheetConfig,
    registry: &LayoutRegistry,
) -> Result<SheetOutput> {
    let layout = plan_sheet(codes, cfg, registry)?;
    let surface = PdfSurface::from_mm(layout.page_width, layout.page_height);
    let pdf = render_sheet(&layout, &cfg.style(), surface, &BitGridRenderer)?;
    Ok(SheetOutput { layout, pdf })
}

/// `{prefix}-{codes joined by '-'}.pdf`
pub fn output_file_name(prefix: &str, codes: &[i64]) -> String {
    let joined: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
    format!("{}-{}.pdf", prefix, joined.join("-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_joins_codes() {
        assert_eq!(output_file_name("marker", &[7]), "marker-7.pdf");
        assert_eq!(output_file_name("tags", &[1, 20, 3]), "tags-1-20-3.pdf");
    }
}
