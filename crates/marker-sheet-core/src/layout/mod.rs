use std::collections::BTreeMap;

use crate::error::LayoutError;
use crate::model::{LayoutMode, PageGeometry, Placement};

pub mod grid;
pub mod single;

/// A placement strategy: maps page geometry to marker positions.
///
/// Implementations must be pure, return a fixed number of placements for their mode, and keep
/// every `marker_width` square inside the page without overlaps. They fail with
/// [`LayoutError::TooSmall`] instead of returning a partial layout.
pub type LayoutFn = fn(PageGeometry) -> Result<Vec<Placement>, LayoutError>;

/// Table from [`LayoutMode`] to placement strategy.
///
/// Built once and read afterwards; callers add their own N-up modes with [`LayoutRegistry::register`].
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    layouts: BTreeMap<LayoutMode, LayoutFn>,
}

impl LayoutRegistry {
    /// An empty registry with no modes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in modes: 1 (centered) and 4 (2x2 grid).
    pub fn with_defaults() -> Self {
        Self::new()
            .with(LayoutMode::SINGLE, single::centered)
            .with(LayoutMode::FOUR_UP, grid::two_by_two)
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, mode: LayoutMode, layout: LayoutFn) -> Self {
        self.register(mode, layout);
        self
    }

    /// Adds `layout` under `mode`, returning the strategy it replaced.
    pub fn register(&mut self, mode: LayoutMode, layout: LayoutFn) -> Option<LayoutFn> {
        self.layouts.insert(mode, layout)
    }

    pub fn get(&self, mode: LayoutMode) -> Option<LayoutFn> {
        self.layouts.get(&mode).copied()
    }

    pub fn contains(&self, mode: LayoutMode) -> bool {
        self.layouts.contains_key(&mode)
    }

    /// Registered modes in ascending order.
    pub fn modes(&self) -> impl Iterator<Item = LayoutMode> + '_ {
        self.layouts.keys().copied()
    }

    /// Computes placements for `mode` on the given page.
    pub fn compute_placements(
        &self,
        geometry: PageGeometry,
        mode: LayoutMode,
    ) -> Result<Vec<Placement>, LayoutError> {
        let w = geometry.marker_width;
        if !w.is_finite() || w <= 0.0 {
            return Err(LayoutError::InvalidWidth(w));
        }
        let layout = self.get(mode).ok_or(LayoutError::UnknownMode(mode.0))?;
        let placements = layout(geometry)?;
        tracing::debug!(
            %mode,
            count = placements.len(),
            page_width = geometry.page_width,
            page_height = geometry.page_height,
            marker_width = w,
            "computed placements"
        );
        Ok(placements)
    }
}

/// Convenience wrapper over [`LayoutRegistry::with_defaults`].
pub fn compute_placements(
    page_width: f64,
    page_height: f64,
    marker_width: f64,
    mode: LayoutMode,
) -> Result<Vec<Placement>, LayoutError> {
    LayoutRegistry::with_defaults()
        .compute_placements(PageGeometry::new(page_width, page_height, marker_width), mode)
}

pub(crate) fn too_small(mode: LayoutMode, g: PageGeometry) -> LayoutError {
    LayoutError::TooSmall {
        mode: mode.0,
        page_width: g.page_width,
        page_height: g.page_height,
        marker_width: g.marker_width,
    }
}
