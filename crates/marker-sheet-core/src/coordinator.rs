use tracing::debug;

use crate::error::{CapacityError, RenderError};
use crate::model::{Assignment, Placement};
use crate::render::{MarkerRenderer, MarkerStyle};
use crate::surface::Surface;

/// Pairs requested codes with layout positions.
///
/// - More codes than positions (or no codes at all) fails with [`CapacityError`].
/// - A single code with several positions is repeated into every position.
/// - Otherwise codes and positions are zipped in order.
pub fn coordinate(
    codes: &[i64],
    positions: Vec<Placement>,
) -> Result<Vec<Assignment>, CapacityError> {
    if codes.is_empty() || positions.len() < codes.len() {
        return Err(CapacityError {
            codes: codes.len(),
            positions: positions.len(),
        });
    }

    let assignments: Vec<Assignment> = if let [code] = codes {
        positions
            .into_iter()
            .map(|placement| Assignment {
                code: *code,
                placement,
            })
            .collect()
    } else {
        codes
            .iter()
            .zip(positions)
            .map(|(&code, placement)| Assignment { code, placement })
            .collect()
    };
    debug!(
        requested = codes.len(),
        placed = assignments.len(),
        "assigned codes to positions"
    );
    Ok(assignments)
}

/// Draws each assignment with `renderer`, stopping at the first failure.
pub fn render_assignments<S, R>(
    surface: &mut S,
    renderer: &R,
    assignments: &[Assignment],
    marker_width: f64,
    style: &MarkerStyle,
) -> Result<(), RenderError>
where
    S: Surface,
    R: MarkerRenderer<S> + ?Sized,
{
    for a in assignments {
        debug!(code = a.code, x = a.placement.x, y = a.placement.y, "render marker");
        renderer.render(surface, a.code, marker_width, a.placement, style)?;
    }
    Ok(())
}
