use tracing::{debug, warn};

use crate::animation::ThresholdAnimation;
use crate::core::RuleDescriptor;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Starts the threshold-hint animation for a rule.
    ///
    /// This is the edge-triggered entry point: the caller invokes it on the
    /// show-signal transition. A run already in flight is replaced, never
    /// stacked, so a stale run cannot starve the new one's cleanup. Before
    /// the first data mount there is no frozen Y scale to position against,
    /// and the trigger is ignored.
    pub fn show_range_animation(&mut self, rule: &RuleDescriptor) -> ChartResult<()> {
        let Some(scales) = self.scales.as_ref() else {
            warn!("range animation triggered before any data was mounted; ignoring");
            return Ok(());
        };

        let run = ThresholdAnimation::from_rule(rule, scales, self.layout.plot_width())?;
        if self.threshold.replace(run).is_some() {
            debug!("replaced in-flight threshold animation");
        }
        Ok(())
    }

    /// Elapsed time of the active threshold run, if any.
    #[must_use]
    pub fn threshold_elapsed_ms(&self) -> Option<f64> {
        self.threshold
            .as_ref()
            .map(ThresholdAnimation::elapsed_ms)
    }
}
