use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Margins around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .into_iter()
            .all(|side| side.is_finite() && side >= 0.0)
    }
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self::new(30.0, 30.0, 50.0, 70.0)
    }
}

/// Resolved pixel geometry of one chart instance: outer viewport, margins,
/// and the inner plot area all drawing and inversion is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub margins: ChartMargins,
}

impl ChartLayout {
    pub fn new(viewport: Viewport, margins: ChartMargins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !margins.is_valid() {
            return Err(ChartError::InvalidData(
                "chart margins must be finite and >= 0".to_owned(),
            ));
        }

        let layout = Self { viewport, margins };
        if layout.plot_width() <= 0.0 || layout.plot_height() <= 0.0 {
            return Err(ChartError::InvalidData(
                "margins leave no plot area inside the viewport".to_owned(),
            ));
        }
        Ok(layout)
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        f64::from(self.viewport.width) - self.margins.left - self.margins.right
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        f64::from(self.viewport.height) - self.margins.top - self.margins.bottom
    }

    /// Converts a viewport-relative pointer position into plot coordinates.
    #[must_use]
    pub fn viewport_to_plot(self, x: f64, y: f64) -> (f64, f64) {
        (x - self.margins.left, y - self.margins.top)
    }
}

/// Formats a data value for labels the way instruction text shows it:
/// whole numbers print without a decimal point.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// One draggable bubble: identity is `label`, `x`/`y` are data-space
/// coordinates, `z` drives glyph size and never changes within a challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubblePoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BubblePoint {
    #[must_use]
    pub fn new(label: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            label: label.into(),
            x,
            y,
            z,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.label.is_empty() {
            return Err(ChartError::InvalidData(
                "bubble point label must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.z.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "bubble point `{}` coordinates must be finite",
                self.label
            )));
        }
        Ok(())
    }
}
