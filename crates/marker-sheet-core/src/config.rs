use serde::{Deserialize, Serialize};

use crate::error::{Result, SheetError};
use crate::model::{LayoutMode, PaperSize};
use crate::render::MarkerStyle;

/// Sheet configuration.
/// Key notes:
///   - `layout` selects the N-up strategy from the layout registry (1 and 4 built in)
///   - `marker_width_mm` is the full marker square including its quiet zone
///   - text/dot/outline flags apply to every marker on the page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetConfig {
    #[serde(default)]
    pub paper: PaperSize,
    #[serde(default = "default_marker_width")]
    pub marker_width_mm: f64,
    #[serde(default)]
    pub layout: LayoutMode,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub show_text: bool,
    #[serde(default = "default_true")]
    pub corner_dot: bool,
    #[serde(default = "default_true")]
    pub outline: bool,
    #[serde(default = "default_prefix")]
    pub output_prefix: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            paper: PaperSize::A4,
            marker_width_mm: default_marker_width(),
            layout: LayoutMode::SINGLE,
            description: String::new(),
            show_text: true,
            corner_dot: true,
            outline: true,
            output_prefix: default_prefix(),
        }
    }
}

impl SheetConfig {
    /// Validates configuration values that do not depend on the layout registry.
    pub fn validate(&self) -> Result<()> {
        let w = self.marker_width_mm;
        if !w.is_finite() || w <= 0.0 {
            return Err(SheetError::InvalidConfig(format!(
                "marker_width_mm must be positive, got {w}"
            )));
        }
        if self.layout.0 == 0 {
            return Err(SheetError::InvalidConfig(
                "layout must be at least 1 marker per page".into(),
            ));
        }
        if self.output_prefix.trim().is_empty() {
            return Err(SheetError::InvalidConfig(
                "output_prefix must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Drawing options derived from the text/dot/outline settings.
    pub fn style(&self) -> MarkerStyle {
        MarkerStyle {
            description: self.description.clone(),
            show_text: self.show_text,
            corner_dot: self.corner_dot,
            outline: self.outline,
        }
    }

    /// Create a fluent builder for `SheetConfig`.
    pub fn builder() -> SheetConfigBuilder {
        SheetConfigBuilder::new()
    }
}

fn default_marker_width() -> f64 {
    100.0
}
fn default_true() -> bool {
    true
}
fn default_prefix() -> String {
    "marker".into()
}

/// Builder for `SheetConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct SheetConfigBuilder {
    cfg: SheetConfig,
}

impl SheetConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: SheetConfig::default(),
        }
    }
    pub fn paper(mut self, v: PaperSize) -> Self {
        self.cfg.paper = v;
        self
    }
    pub fn marker_width_mm(mut self, v: f64) -> Self {
        self.cfg.marker_width_mm = v;
        self
    }
    pub fn layout(mut self, v: LayoutMode) -> Self {
        self.cfg.layout = v;
        self
    }
    pub fn four_up(mut self, v: bool) -> Self {
        self.cfg.layout = if v {
            LayoutMode::FOUR_UP
        } else {
            LayoutMode::SINGLE
        };
        self
    }
    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.cfg.description = v.into();
        self
    }
    pub fn show_text(mut self, v: bool) -> Self {
        self.cfg.show_text = v;
        self
    }
    pub fn corner_dot(mut self, v: bool) -> Self {
        self.cfg.corner_dot = v;
        self
    }
    pub fn outline(mut self, v: bool) -> Self {
        self.cfg.outline = v;
        self
    }
    pub fn output_prefix(mut self, v: impl Into<String>) -> Self {
        self.cfg.output_prefix = v.into();
        self
    }
    pub fn build(self) -> SheetConfig {
        self.cfg
    }
}
