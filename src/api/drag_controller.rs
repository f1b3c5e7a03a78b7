use tracing::{trace, warn};

use crate::core::snap_value;
use crate::error::{ChartError, ChartResult};
use crate::interaction::PointMove;
use crate::render::Renderer;

use super::ChartEngine;

/// Vertical gap between the dragged glyph center and the tooltip readout.
pub const TOOLTIP_OFFSET_PX: f64 = 45.0;

impl<R: Renderer> ChartEngine<R> {
    /// Begins dragging the glyph with the given label: raises it to the top
    /// of the draw order, marks its dragging visual state, and reveals the
    /// guide lines and tooltip.
    pub fn drag_start(&mut self, label: &str) -> ChartResult<()> {
        let scene = self.scene.as_mut().ok_or_else(|| ChartError::UnknownPoint {
            label: label.to_owned(),
        })?;
        if !scene.contains(label) {
            return Err(ChartError::UnknownPoint {
                label: label.to_owned(),
            });
        }

        if self.interaction.is_dragging() {
            // Single-pointer model; a second start supersedes the first.
            warn!(label, "drag started while another drag was active");
            self.drag_end();
        }

        if let Some(scene) = self.scene.as_mut() {
            scene.raise(label);
            if let Some(glyph) = scene.glyph_mut(label) {
                glyph.set_dragging(true);
            }
        }
        self.interaction.begin_drag(label);
        trace!(label, "drag start");
        Ok(())
    }

    /// Processes one pointer move while a drag is active.
    ///
    /// The pointer position is plot-relative pixels. The X candidate comes
    /// from inverting the X scale against the horizontal coordinate and the
    /// Y candidate from inverting the Y scale against the vertical one; the
    /// Y candidate snaps to the configured interval, then both clamp to
    /// their frozen domains. Every accepted move yields a report; calls
    /// while idle are no-ops, not errors.
    pub fn drag_move(
        &mut self,
        pointer_x_px: f64,
        pointer_y_px: f64,
    ) -> ChartResult<Option<PointMove>> {
        let Some(label) = self.interaction.dragging_label().map(str::to_owned) else {
            return Ok(None);
        };
        if !pointer_x_px.is_finite() || !pointer_y_px.is_finite() {
            warn!(%label, "discarding non-finite pointer position");
            return Ok(None);
        }

        // A drag can only begin on a mounted scene, so scales are frozen here.
        let Some(scales) = self.scales.as_ref() else {
            return Ok(None);
        };
        let domain = scales.domain();

        let x_candidate = scales.x().invert(pointer_x_px);
        let y_candidate = scales.y().invert(pointer_y_px);
        let y_snapped = snap_value(y_candidate, self.config.snap_interval);

        let x = x_candidate.clamp(0.0, domain.x_max());
        let y = y_snapped.clamp(0.0, domain.y_max());

        let glyph_x_px = scales.x().to_pixel(x);
        let glyph_y_px = scales.y().to_pixel(y);

        self.interaction.track(
            glyph_x_px,
            glyph_y_px,
            glyph_y_px - TOOLTIP_OFFSET_PX,
            format!("Y: {y:.0}km"),
        );

        if let Some(glyph) = self
            .scene
            .as_mut()
            .and_then(|scene| scene.glyph_mut(&label))
        {
            glyph.set_position_immediate(glyph_x_px, glyph_y_px);
        }

        if let Some(point) = self.points.iter_mut().find(|point| point.label == label) {
            point.x = x;
            point.y = y;
        }

        trace!(%label, x, y, "drag move");
        Ok(Some(PointMove { label, x, y }))
    }

    /// Ends the active drag, clearing the dragging visual state and hiding
    /// the guide lines and tooltip. Safe to call at any time, including
    /// when no drag is active.
    pub fn drag_end(&mut self) {
        let Some(label) = self.interaction.dragging_label().map(str::to_owned) else {
            return;
        };

        if let Some(scene) = self.scene.as_mut() {
            if let Some(glyph) = scene.glyph_mut(&label) {
                glyph.set_dragging(false);
            }
        }
        self.interaction.end_drag();
        trace!(%label, "drag end");
    }
}
