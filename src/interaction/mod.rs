use serde::{Deserialize, Serialize};

/// Drag interaction protocol: one pointer, one glyph at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    Idle,
    Dragging { label: String },
}

impl DragPhase {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Crosshair guide pair revealed while a drag is active.
///
/// Position is the dragged glyph's clamped pixel center; the horizontal
/// guide spans the plot width at `y_px`, the vertical one spans the plot
/// height at `x_px`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideOverlay {
    pub visible: bool,
    pub x_px: f64,
    pub y_px: f64,
}

impl Default for GuideOverlay {
    fn default() -> Self {
        Self {
            visible: false,
            x_px: 0.0,
            y_px: 0.0,
        }
    }
}

/// Value readout following the dragged glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragTooltip {
    pub visible: bool,
    pub x_px: f64,
    pub y_px: f64,
    pub text: String,
}

impl Default for DragTooltip {
    fn default() -> Self {
        Self {
            visible: false,
            x_px: 0.0,
            y_px: 0.0,
            text: String::new(),
        }
    }
}

/// Clamped and snapped drag report delivered to the caller on every move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMove {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Owned interaction state of one chart instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    phase: DragPhase,
    guides: GuideOverlay,
    tooltip: DragTooltip,
}

impl Default for DragPhase {
    fn default() -> Self {
        Self::Idle
    }
}

impl InteractionState {
    #[must_use]
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    #[must_use]
    pub fn dragging_label(&self) -> Option<&str> {
        match &self.phase {
            DragPhase::Dragging { label } => Some(label.as_str()),
            DragPhase::Idle => None,
        }
    }

    #[must_use]
    pub fn guides(&self) -> GuideOverlay {
        self.guides
    }

    #[must_use]
    pub fn tooltip(&self) -> &DragTooltip {
        &self.tooltip
    }

    pub fn begin_drag(&mut self, label: impl Into<String>) {
        self.phase = DragPhase::Dragging {
            label: label.into(),
        };
        self.guides.visible = true;
        self.tooltip.visible = true;
    }

    /// Moves the guide pair and tooltip to follow the dragged glyph.
    pub fn track(&mut self, glyph_x_px: f64, glyph_y_px: f64, tooltip_y_px: f64, text: String) {
        self.guides.x_px = glyph_x_px;
        self.guides.y_px = glyph_y_px;
        self.tooltip.x_px = glyph_x_px;
        self.tooltip.y_px = tooltip_y_px;
        self.tooltip.text = text;
    }

    /// Ends the drag and hides the overlay elements, regardless of how the
    /// drag terminated.
    pub fn end_drag(&mut self) {
        self.phase = DragPhase::Idle;
        self.guides.visible = false;
        self.tooltip.visible = false;
        self.tooltip.text.clear();
    }
}
