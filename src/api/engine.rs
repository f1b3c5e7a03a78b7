use crate::animation::ThresholdAnimation;
use crate::core::{BubblePoint, ChartLayout, FrozenScales, ScaleDomain, Viewport};
use crate::error::ChartResult;
use crate::interaction::{DragPhase, DragTooltip, GuideOverlay, InteractionState};
use crate::render::Renderer;
use crate::scene::SceneGraph;

use super::ChartEngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` coordinates the frozen scales, the retained scene graph,
/// drag interaction, the threshold-hint animation, and renderer calls.
/// Scales and scene freeze together on the first non-empty data set and
/// stay fixed for the engine's lifetime.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) layout: ChartLayout,
    pub(super) scales: Option<FrozenScales>,
    pub(super) scene: Option<SceneGraph>,
    pub(super) points: Vec<BubblePoint>,
    pub(super) interaction: InteractionState,
    pub(super) threshold: Option<ThresholdAnimation>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        let layout = ChartLayout::new(config.viewport, config.margins)?;

        Ok(Self {
            renderer,
            config,
            layout,
            scales: None,
            scene: None,
            points: Vec::new(),
            interaction: InteractionState::default(),
            threshold: None,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    /// Current point collection as last accepted by `set_points` and
    /// adjusted by drag moves.
    #[must_use]
    pub fn points(&self) -> &[BubblePoint] {
        &self.points
    }

    /// The frozen data-space extents, present once the first non-empty
    /// collection has mounted.
    #[must_use]
    pub fn scale_domain(&self) -> Option<ScaleDomain> {
        self.scales.as_ref().map(FrozenScales::domain)
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.scene.is_some()
    }

    #[must_use]
    pub fn drag_phase(&self) -> &DragPhase {
        self.interaction.phase()
    }

    #[must_use]
    pub fn guides(&self) -> GuideOverlay {
        self.interaction.guides()
    }

    #[must_use]
    pub fn tooltip(&self) -> &DragTooltip {
        self.interaction.tooltip()
    }

    #[must_use]
    pub fn threshold_animation_active(&self) -> bool {
        self.threshold.is_some()
    }

    /// Current glyph center in plot coordinates.
    #[must_use]
    pub fn glyph_position_px(&self, label: &str) -> Option<(f64, f64)> {
        self.scene
            .as_ref()
            .and_then(|scene| scene.glyph(label))
            .map(|glyph| glyph.position_px())
    }

    #[must_use]
    pub fn glyph_radius_px(&self, label: &str) -> Option<f64> {
        self.scene
            .as_ref()
            .and_then(|scene| scene.glyph(label))
            .map(|glyph| glyph.radius_px())
    }

    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.scene.as_ref().map_or(0, SceneGraph::glyph_count)
    }

    /// Bottom-to-top draw order of the retained glyphs.
    #[must_use]
    pub fn glyph_draw_order(&self) -> Vec<String> {
        self.scene.as_ref().map_or_else(Vec::new, |scene| {
            scene.draw_order().into_iter().map(str::to_owned).collect()
        })
    }

    /// Tick counts of the chrome built at mount, `(x, y)`.
    #[must_use]
    pub fn chrome_tick_counts(&self) -> Option<(usize, usize)> {
        self.scene
            .as_ref()
            .map(|scene| (scene.chrome().x_ticks().len(), scene.chrome().y_ticks().len()))
    }

    /// Steps glyph tweens and the threshold animation. A finished threshold
    /// run is removed here, which is the only place runs end.
    pub fn advance(&mut self, delta_ms: f64) {
        if let Some(scene) = &mut self.scene {
            scene.advance(delta_ms);
        }
        let finished = self
            .threshold
            .as_mut()
            .is_some_and(|run| !run.advance(delta_ms));
        if finished {
            self.threshold = None;
        }
    }

    /// Builds and submits the current frame to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
