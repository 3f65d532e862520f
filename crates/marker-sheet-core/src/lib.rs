//! Core library for printable fiducial-marker sheets.
//!
//! - Layout: a registry of N-up placement strategies (1 = centered, 4 = 2x2 grid)
//! - Coordinator: pairs requested codes with positions; a lone code tiles every position
//! - Rendering: `MarkerRenderer` draws one marker onto a `Surface`; `PdfSurface` writes the page
//!
//! Quick example:
//! ```ignore
//! use marker_sheet_core::{LayoutRegistry, SheetConfig, build_sheet};
//! # fn main() -> anyhow::Result<()> {
//! let cfg = SheetConfig::builder().four_up(true).marker_width_mm(80.0).build();
//! let out = build_sheet(&[1, 2, 3, 4], &cfg, &LayoutRegistry::with_defaults())?;
//! std::fs::write("marker-1-2-3-4.pdf", out.pdf)?;
//! # Ok(()) }
//! ```

pub mod config;
pub mod coordinator;
pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod render;
pub mod sheet;
pub mod surface;

pub use config::*;
pub use coordinator::*;
pub use error::*;
pub use export::*;
pub use layout::{LayoutFn, LayoutRegistry, compute_placements};
pub use model::*;
pub use render::*;
pub use sheet::*;
pub use surface::*;

/// Convenience prelude for common types and functions.
/// Importing `marker_sheet_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{SheetConfig, SheetConfigBuilder};
    pub use crate::coordinator::coordinate;
    pub use crate::error::{CapacityError, LayoutError, RenderError, SheetError};
    pub use crate::layout::{LayoutFn, LayoutRegistry};
    pub use crate::model::{Assignment, LayoutMode, PageGeometry, PaperSize, Placement, SheetLayout};
    pub use crate::render::{BitGridRenderer, MarkerRenderer, MarkerStyle};
    pub use crate::sheet::{SheetOutput, build_sheet, output_file_name, plan_sheet, render_sheet};
    pub use crate::surface::{MM_TO_PT, PdfSurface, Surface};
}
