use thiserror::Error;

/// Page geometry cannot accommodate the requested marker width/mode.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LayoutError {
    #[error(
        "page too small for requested marker width/mode: {page_width}x{page_height} mm cannot hold {mode}-up markers of {marker_width} mm"
    )]
    TooSmall {
        mode: u32,
        page_width: f64,
        page_height: f64,
        marker_width: f64,
    },
    #[error("unknown layout mode: {0}")]
    UnknownMode(u32),
    #[error("marker width must be a positive finite number, got {0}")]
    InvalidWidth(f64),
}

/// More codes were requested than the layout has positions for.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("cannot fit {codes} markers into {positions} space(s)")]
pub struct CapacityError {
    pub codes: usize,
    pub positions: usize,
}

/// Failure raised by the marker renderer or the drawing surface.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RenderError {
    #[error("marker code {code} cannot be encoded (valid range 0..{limit})")]
    CodeOutOfRange { code: i64, limit: i64 },
    #[error("surface error: {0}")]
    Surface(String),
}

#[derive(Debug, Error)]
pub enum SheetError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Capacity(#[from] CapacityError),
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SheetError>;
