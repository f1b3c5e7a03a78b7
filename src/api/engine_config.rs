use crate::core::{ChartMargins, DEFAULT_SNAP_INTERVAL, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::scene::GLYPH_TRANSITION_MS;

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 800;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 450;

/// Construction-time options for one chart instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    pub margins: ChartMargins,
    pub x_axis_title: String,
    pub y_axis_title: String,
    /// Interval dragged Y values snap to.
    pub snap_interval: f64,
    /// Duration of the reconciliation position/radius tween.
    pub glyph_transition_ms: f64,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: ChartMargins::default(),
            x_axis_title: "Number of Stations".to_owned(),
            y_axis_title: "Total System Length (km)".to_owned(),
            snap_interval: DEFAULT_SNAP_INTERVAL,
            glyph_transition_ms: GLYPH_TRANSITION_MS,
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: ChartMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_axis_titles(
        mut self,
        x_axis_title: impl Into<String>,
        y_axis_title: impl Into<String>,
    ) -> Self {
        self.x_axis_title = x_axis_title.into();
        self.y_axis_title = y_axis_title.into();
        self
    }

    #[must_use]
    pub fn with_snap_interval(mut self, snap_interval: f64) -> Self {
        self.snap_interval = snap_interval;
        self
    }

    #[must_use]
    pub fn with_glyph_transition_ms(mut self, glyph_transition_ms: f64) -> Self {
        self.glyph_transition_ms = glyph_transition_ms;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.snap_interval.is_finite() || self.snap_interval <= 0.0 {
            return Err(ChartError::InvalidData(
                "snap interval must be finite and > 0".to_owned(),
            ));
        }
        if !self.glyph_transition_ms.is_finite() || self.glyph_transition_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "glyph transition duration must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(Viewport::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT))
    }
}
