//! Retained scene graph: static chrome plus one glyph node per point,
//! kept in sync with the point collection through keyed reconciliation.

mod chrome;
mod glyph;

pub use chrome::{
    AXIS_COLOR, AXIS_TICK_FONT_PX, AXIS_TICK_LENGTH_PX, AXIS_TICK_TARGET, AXIS_TITLE_FONT_PX,
    AxisTick, ChartChrome, GRID_COLOR, X_TITLE_OFFSET_PX, Y_TITLE_OFFSET_PX,
};
pub use glyph::{
    GLYPH_FILL, GLYPH_LABEL_COLOR, GLYPH_LABEL_FONT_PX, GLYPH_LABEL_OFFSET_PX, GLYPH_OPACITY,
    GLYPH_STROKE, GLYPH_STROKE_WIDTH_PX, GLYPH_TRANSITION_MS, GlyphNode,
};

use indexmap::IndexMap;

use crate::core::{BubblePoint, FrozenScales, ReconcilePlan};

/// The retained visual state of one mounted chart.
///
/// Glyph order in the map is the draw order; raising a glyph moves it to
/// the end. Chrome is built once at mount and never rebuilt.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGraph {
    chrome: ChartChrome,
    glyphs: IndexMap<String, GlyphNode>,
    glyph_transition_ms: f64,
}

impl SceneGraph {
    #[must_use]
    pub fn mount(
        scales: &FrozenScales,
        points: &[BubblePoint],
        x_title: impl Into<String>,
        y_title: impl Into<String>,
        glyph_transition_ms: f64,
    ) -> Self {
        let chrome = ChartChrome::build(scales, x_title, y_title);
        let mut glyphs = IndexMap::with_capacity(points.len());
        for point in points {
            let (x_px, y_px, radius_px) = scales.project(point);
            glyphs.insert(
                point.label.clone(),
                GlyphNode::new(point.label.clone(), x_px, y_px, radius_px),
            );
        }
        Self {
            chrome,
            glyphs,
            glyph_transition_ms,
        }
    }

    #[must_use]
    pub fn chrome(&self) -> &ChartChrome {
        &self.chrome
    }

    #[must_use]
    pub fn glyph(&self, label: &str) -> Option<&GlyphNode> {
        self.glyphs.get(label)
    }

    pub fn glyph_mut(&mut self, label: &str) -> Option<&mut GlyphNode> {
        self.glyphs.get_mut(label)
    }

    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.glyphs.contains_key(label)
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &GlyphNode> {
        self.glyphs.values()
    }

    /// Draw order, bottom to top.
    #[must_use]
    pub fn draw_order(&self) -> Vec<&str> {
        self.glyphs.keys().map(String::as_str).collect()
    }

    /// Moves a glyph to the top of the draw order. Returns `false` for an
    /// unknown label.
    pub fn raise(&mut self, label: &str) -> bool {
        let Some(index) = self.glyphs.get_index_of(label) else {
            return false;
        };
        let last = self.glyphs.len() - 1;
        self.glyphs.move_index(index, last);
        true
    }

    /// Applies a reconciliation plan: creates appear at their projected
    /// positions, updates tween toward theirs, removals drop out.
    pub fn apply_plan(&mut self, plan: &ReconcilePlan, scales: &FrozenScales) {
        for label in &plan.remove {
            self.glyphs.shift_remove(label);
        }

        for point in &plan.update {
            let (x_px, y_px, radius_px) = scales.project(point);
            if let Some(glyph) = self.glyphs.get_mut(&point.label) {
                glyph.begin_transition(x_px, y_px, radius_px, self.glyph_transition_ms);
            }
        }

        for point in &plan.create {
            let (x_px, y_px, radius_px) = scales.project(point);
            self.glyphs.insert(
                point.label.clone(),
                GlyphNode::new(point.label.clone(), x_px, y_px, radius_px),
            );
        }
    }

    /// Steps all in-flight glyph tweens.
    pub fn advance(&mut self, delta_ms: f64) {
        for glyph in self.glyphs.values_mut() {
            glyph.advance(delta_ms);
        }
    }
}
