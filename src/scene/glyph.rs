use crate::render::Color;

pub const GLYPH_TRANSITION_MS: f64 = 100.0;
pub const GLYPH_STROKE_WIDTH_PX: f64 = 2.0;
pub const GLYPH_OPACITY: f64 = 0.8;
pub const GLYPH_LABEL_OFFSET_PX: f64 = 15.0;
pub const GLYPH_LABEL_FONT_PX: f64 = 11.0;

pub const GLYPH_FILL: Color = Color::rgb8(0x42, 0x99, 0xe1);
pub const GLYPH_STROKE: Color = Color::rgb8(0x2b, 0x6c, 0xb0);
pub const GLYPH_LABEL_COLOR: Color = Color::rgb8(0x2d, 0x37, 0x48);

/// Short position/radius tween started when reconciliation moves a glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GlyphTransition {
    from_x_px: f64,
    from_y_px: f64,
    from_radius_px: f64,
    to_x_px: f64,
    to_y_px: f64,
    to_radius_px: f64,
    elapsed_ms: f64,
    duration_ms: f64,
}

impl GlyphTransition {
    fn progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }
}

/// One retained circle+label pair. Pixel position is plot-relative.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphNode {
    label: String,
    x_px: f64,
    y_px: f64,
    radius_px: f64,
    dragging: bool,
    transition: Option<GlyphTransition>,
}

impl GlyphNode {
    #[must_use]
    pub fn new(label: impl Into<String>, x_px: f64, y_px: f64, radius_px: f64) -> Self {
        Self {
            label: label.into(),
            x_px,
            y_px,
            radius_px,
            dragging: false,
            transition: None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current interpolated center.
    #[must_use]
    pub fn position_px(&self) -> (f64, f64) {
        match &self.transition {
            Some(transition) => {
                let t = transition.progress();
                (
                    transition.from_x_px + (transition.to_x_px - transition.from_x_px) * t,
                    transition.from_y_px + (transition.to_y_px - transition.from_y_px) * t,
                )
            }
            None => (self.x_px, self.y_px),
        }
    }

    #[must_use]
    pub fn radius_px(&self) -> f64 {
        match &self.transition {
            Some(transition) => {
                let t = transition.progress();
                transition.from_radius_px
                    + (transition.to_radius_px - transition.from_radius_px) * t
            }
            None => self.radius_px,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    #[must_use]
    pub fn in_transition(&self) -> bool {
        self.transition.is_some()
    }

    /// Starts a tween from the current interpolated state to the target.
    pub fn begin_transition(
        &mut self,
        to_x_px: f64,
        to_y_px: f64,
        to_radius_px: f64,
        duration_ms: f64,
    ) {
        let (from_x_px, from_y_px) = self.position_px();
        let from_radius_px = self.radius_px();

        self.x_px = to_x_px;
        self.y_px = to_y_px;
        self.radius_px = to_radius_px;

        if duration_ms <= 0.0 {
            self.transition = None;
            return;
        }

        self.transition = Some(GlyphTransition {
            from_x_px,
            from_y_px,
            from_radius_px,
            to_x_px,
            to_y_px,
            to_radius_px,
            elapsed_ms: 0.0,
            duration_ms,
        });
    }

    /// Drag path: moves the glyph immediately, cancelling any tween so the
    /// reconciliation animation cannot fight the pointer.
    pub fn set_position_immediate(&mut self, x_px: f64, y_px: f64) {
        self.x_px = x_px;
        self.y_px = y_px;
        self.transition = None;
    }

    pub fn advance(&mut self, delta_ms: f64) {
        if let Some(transition) = &mut self.transition {
            transition.elapsed_ms += delta_ms.max(0.0);
            if transition.elapsed_ms >= transition.duration_ms {
                self.transition = None;
            }
        }
    }
}
