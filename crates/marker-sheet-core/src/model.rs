use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named paper sizes. Dimensions are portrait, in millimetres.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaperSize {
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    A6,
    Letter,
    Legal,
}

impl PaperSize {
    pub const ALL: [PaperSize; 9] = [
        PaperSize::A0,
        PaperSize::A1,
        PaperSize::A2,
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::A6,
        PaperSize::Letter,
        PaperSize::Legal,
    ];

    /// `(width, height)` in millimetres.
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PaperSize::A0 => (841.0, 1189.0),
            PaperSize::A1 => (594.0, 841.0),
            PaperSize::A2 => (420.0, 594.0),
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::A6 => (105.0, 148.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::A0 => "A0",
            PaperSize::A1 => "A1",
            PaperSize::A2 => "A2",
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::A6 => "A6",
            PaperSize::Letter => "LETTER",
            PaperSize::Legal => "LEGAL",
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperSize {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a0" => Ok(Self::A0),
            "a1" => Ok(Self::A1),
            "a2" => Ok(Self::A2),
            "a3" => Ok(Self::A3),
            "a4" => Ok(Self::A4),
            "a5" => Ok(Self::A5),
            "a6" => Ok(Self::A6),
            "letter" => Ok(Self::Letter),
            "legal" => Ok(Self::Legal),
            _ => Err(()),
        }
    }
}

/// Number of markers per page; the key into the layout registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct LayoutMode(pub u32);

impl LayoutMode {
    pub const SINGLE: LayoutMode = LayoutMode(1);
    pub const FOUR_UP: LayoutMode = LayoutMode(4);
}

impl Default for LayoutMode {
    fn default() -> Self {
        LayoutMode::SINGLE
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-up", self.0)
    }
}

/// Input to a layout function. All lengths share one linear unit (millimetres in practice).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width: f64,
    pub page_height: f64,
    pub marker_width: f64,
}

impl PageGeometry {
    pub fn new(page_width: f64, page_height: f64, marker_width: f64) -> Self {
        Self {
            page_width,
            page_height,
            marker_width,
        }
    }

    pub fn for_paper(paper: PaperSize, marker_width: f64) -> Self {
        let (w, h) = paper.dimensions_mm();
        Self::new(w, h, marker_width)
    }
}

/// Top-left corner at which a marker is drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
}

impl Placement {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The `width` x `width` square occupied by a marker placed here.
    pub fn bounds(&self, width: f64) -> MarkerBox {
        MarkerBox {
            x: self.x,
            y: self.y,
            w: width,
        }
    }
}

/// Axis-aligned square occupied by one marker. `x,y` is top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
}

impl MarkerBox {
    pub fn right(&self) -> f64 {
        self.x + self.w
    }
    pub fn bottom(&self) -> f64 {
        self.y + self.w
    }
    /// True if the interiors intersect; touching edges do not count.
    pub fn overlaps(&self, other: &MarkerBox) -> bool {
        !(self.x >= other.right()
            || other.x >= self.right()
            || self.y >= other.bottom()
            || other.y >= self.bottom())
    }
    /// True if the box lies inside a `page_width` x `page_height` page.
    pub fn within(&self, page_width: f64, page_height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right() <= page_width && self.bottom() <= page_height
    }
}

/// A marker code paired with the position it is drawn at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub code: i64,
    pub placement: Placement,
}

/// Everything needed to draw one page: page geometry plus ordered assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetLayout {
    pub paper: PaperSize,
    pub page_width: f64,
    pub page_height: f64,
    pub marker_width: f64,
    pub mode: LayoutMode,
    pub assignments: Vec<Assignment>,
}

impl SheetLayout {
    /// Codes in drawing order (a single requested code appears once per tile).
    pub fn codes(&self) -> impl Iterator<Item = i64> + '_ {
        self.assignments.iter().map(|a| a.code)
    }
}
