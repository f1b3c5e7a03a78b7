use tracing::{debug, trace};

use crate::core::{BubblePoint, FrozenScales, reconcile};
use crate::error::ChartResult;
use crate::render::Renderer;
use crate::scene::SceneGraph;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Accepts the caller's canonical point collection.
    ///
    /// The first non-empty collection freezes the scale domains and mounts
    /// the scene (chrome plus one glyph per point). Later collections are
    /// reconciled against the retained glyphs by label. An empty collection
    /// is a no-op, and so is any call made while a drag is in progress:
    /// a reconciliation pass must not fight the pointer-driven transform.
    pub fn set_points(&mut self, points: &[BubblePoint]) -> ChartResult<()> {
        if points.is_empty() {
            debug!("ignoring empty point collection");
            return Ok(());
        }
        if self.interaction.is_dragging() {
            trace!("skipping reconciliation while a drag is active");
            return Ok(());
        }
        for point in points {
            point.validate()?;
        }

        if self.scene.is_none() {
            let scales = FrozenScales::from_points(points, self.layout)?;
            let scene = SceneGraph::mount(
                &scales,
                points,
                self.config.x_axis_title.clone(),
                self.config.y_axis_title.clone(),
                self.config.glyph_transition_ms,
            );
            debug!(
                count = points.len(),
                domain = ?scales.domain(),
                "mounted chart with frozen scale domain"
            );
            self.scales = Some(scales);
            self.scene = Some(scene);
        } else if let (Some(scales), Some(scene)) = (self.scales.as_ref(), self.scene.as_mut()) {
            let plan = reconcile(scene.draw_order(), points);
            debug!(
                created = plan.create.len(),
                updated = plan.update.len(),
                removed = plan.remove.len(),
                "reconciling point collection"
            );
            scene.apply_plan(&plan, scales);
        }

        self.points = points.to_vec();
        Ok(())
    }
}
