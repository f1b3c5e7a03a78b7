//! Deterministic threshold-hint animation.
//!
//! A run is an explicit list of timed steps advanced by `advance(delta_ms)`.
//! There are no timers: the engine owns at most one run and replaces it on
//! re-trigger, so a stale run can never outlive or duplicate a new one.

use smallvec::SmallVec;

use crate::core::{FrozenScales, RuleDescriptor, RuleOperator, format_number};
use crate::error::ChartResult;

pub const WINDOW_SWEEP_MS: f64 = 2000.0;
pub const WINDOW_FADE_MS: f64 = 300.0;
pub const WINDOW_OPACITY: f64 = 0.3;
pub const THRESHOLD_FADE_IN_MS: f64 = 500.0;
pub const ARROW_COUNT: usize = 5;
pub const ARROW_STAGGER_MS: f64 = 100.0;
pub const ARROW_LEG_MS: f64 = 400.0;
pub const GROUP_FADE_OUT_START_MS: f64 = 2500.0;
pub const GROUP_FADE_OUT_MS: f64 = 500.0;
pub const ARROW_SIZE_PX: f64 = 12.0;
pub const ARROW_CLEARANCE_PX: f64 = 15.0;
pub const THRESHOLD_LABEL_OFFSET_PX: f64 = 10.0;

/// One linear ramp: value moves `from -> to` across
/// `[start_ms, start_ms + duration_ms]` and holds outside that window.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AnimationStep {
    start_ms: f64,
    duration_ms: f64,
    from: f64,
    to: f64,
}

impl AnimationStep {
    const fn new(start_ms: f64, duration_ms: f64, from: f64, to: f64) -> Self {
        Self {
            start_ms,
            duration_ms,
            from,
            to,
        }
    }

    fn end_ms(self) -> f64 {
        self.start_ms + self.duration_ms
    }

    fn value_at(self, at_ms: f64) -> f64 {
        if at_ms <= self.start_ms || self.duration_ms <= 0.0 {
            return self.from;
        }
        if at_ms >= self.end_ms() {
            return self.to;
        }
        let progress = (at_ms - self.start_ms) / self.duration_ms;
        self.from + (self.to - self.from) * progress
    }
}

/// Scalar animated over a chain of steps. Steps are appended in start
/// order; between windows the previous step's end value holds.
#[derive(Debug, Clone, PartialEq, Default)]
struct Channel {
    steps: SmallVec<[AnimationStep; 4]>,
}

impl Channel {
    fn step(mut self, start_ms: f64, duration_ms: f64, from: f64, to: f64) -> Self {
        self.steps
            .push(AnimationStep::new(start_ms, duration_ms, from, to));
        self
    }

    fn value_at(&self, at_ms: f64) -> f64 {
        let Some(first) = self.steps.first() else {
            return 0.0;
        };
        if at_ms < first.start_ms {
            return first.from;
        }
        let mut current = first;
        for step in &self.steps {
            if step.start_ms <= at_ms {
                current = step;
            }
        }
        current.value_at(at_ms)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ThresholdShape {
    /// Translucent band sweeping across the plot (BETWEEN rules).
    Window {
        y_top_px: f64,
        height_px: f64,
        width: Channel,
        opacity: Channel,
    },
    /// Dashed bound line, label, and directional arrows (single-bound rules).
    Directional {
        y_px: f64,
        label: String,
        pointing_up: bool,
        line_opacity: Channel,
        label_opacity: Channel,
        arrow_opacity: SmallVec<[Channel; ARROW_COUNT]>,
        group_opacity: Channel,
    },
}

/// Sampled state of the window animation, in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowVisual {
    pub y_top_px: f64,
    pub height_px: f64,
    pub width_px: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowVisual {
    pub x_px: f64,
    pub opacity: f64,
}

/// Sampled state of the directional animation, in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalVisual {
    pub y_px: f64,
    pub label: String,
    pub pointing_up: bool,
    pub line_opacity: f64,
    pub label_opacity: f64,
    pub arrows: SmallVec<[ArrowVisual; ARROW_COUNT]>,
}

/// What the frame builder should draw for the active run.
#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdVisuals {
    Window(WindowVisual),
    Directional(DirectionalVisual),
}

/// One in-flight threshold-hint run.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdAnimation {
    elapsed_ms: f64,
    total_ms: f64,
    plot_width_px: f64,
    shape: ThresholdShape,
}

impl ThresholdAnimation {
    /// Builds the timed sequence for a validated rule against the frozen
    /// Y scale. The run starts at elapsed zero; the caller advances it.
    pub fn from_rule(
        rule: &RuleDescriptor,
        scales: &FrozenScales,
        plot_width_px: f64,
    ) -> ChartResult<Self> {
        rule.validate()?;

        match rule.operator {
            RuleOperator::Between => {
                // validate() guarantees value_b for BETWEEN.
                let upper = rule.value_b.unwrap_or(rule.value_a);
                let y_top_px = scales.y().to_pixel(upper);
                let y_bottom_px = scales.y().to_pixel(rule.value_a);
                let height_px = (y_bottom_px - y_top_px).max(0.0);

                Ok(Self {
                    elapsed_ms: 0.0,
                    total_ms: WINDOW_SWEEP_MS + WINDOW_FADE_MS,
                    plot_width_px,
                    shape: ThresholdShape::Window {
                        y_top_px,
                        height_px,
                        width: Channel::default().step(0.0, WINDOW_SWEEP_MS, 0.0, plot_width_px),
                        opacity: Channel::default().step(
                            WINDOW_SWEEP_MS,
                            WINDOW_FADE_MS,
                            WINDOW_OPACITY,
                            0.0,
                        ),
                    },
                })
            }
            RuleOperator::LessThan | RuleOperator::GreaterThan => {
                let pointing_up = rule.operator == RuleOperator::LessThan;
                let noun = if pointing_up { "Maximum" } else { "Minimum" };
                let label = format!("{noun}: {}", format_number(rule.value_a));

                let mut arrow_opacity: SmallVec<[Channel; ARROW_COUNT]> = SmallVec::new();
                for index in 0..ARROW_COUNT {
                    let fade_in_start = THRESHOLD_FADE_IN_MS + index as f64 * ARROW_STAGGER_MS;
                    arrow_opacity.push(
                        Channel::default()
                            .step(fade_in_start, ARROW_LEG_MS, 0.0, 0.9)
                            .step(fade_in_start + ARROW_LEG_MS, ARROW_LEG_MS, 0.9, 0.5)
                            .step(fade_in_start + 2.0 * ARROW_LEG_MS, ARROW_LEG_MS, 0.5, 0.9),
                    );
                }

                Ok(Self {
                    elapsed_ms: 0.0,
                    total_ms: GROUP_FADE_OUT_START_MS + GROUP_FADE_OUT_MS,
                    plot_width_px,
                    shape: ThresholdShape::Directional {
                        y_px: scales.y().to_pixel(rule.value_a),
                        label,
                        pointing_up,
                        line_opacity: Channel::default().step(0.0, THRESHOLD_FADE_IN_MS, 0.0, 0.8),
                        label_opacity: Channel::default().step(0.0, THRESHOLD_FADE_IN_MS, 0.0, 1.0),
                        arrow_opacity,
                        group_opacity: Channel::default().step(
                            GROUP_FADE_OUT_START_MS,
                            GROUP_FADE_OUT_MS,
                            1.0,
                            0.0,
                        ),
                    },
                })
            }
        }
    }

    /// Advances the run. Returns `true` while the run is still live;
    /// a finished run's scene elements are due for removal.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.total_ms);
        }
        !self.is_finished()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.total_ms
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    #[must_use]
    pub fn sample(&self) -> ThresholdVisuals {
        let at = self.elapsed_ms;
        match &self.shape {
            ThresholdShape::Window {
                y_top_px,
                height_px,
                width,
                opacity,
            } => ThresholdVisuals::Window(WindowVisual {
                y_top_px: *y_top_px,
                height_px: *height_px,
                width_px: width.value_at(at),
                opacity: opacity.value_at(at),
            }),
            ThresholdShape::Directional {
                y_px,
                label,
                pointing_up,
                line_opacity,
                label_opacity,
                arrow_opacity,
                group_opacity,
            } => {
                let group = group_opacity.value_at(at);
                let spacing = self.plot_width_px / (ARROW_COUNT as f64 + 1.0);
                let arrows = arrow_opacity
                    .iter()
                    .enumerate()
                    .map(|(index, channel)| ArrowVisual {
                        x_px: spacing * (index as f64 + 1.0),
                        opacity: channel.value_at(at) * group,
                    })
                    .collect();

                ThresholdVisuals::Directional(DirectionalVisual {
                    y_px: *y_px,
                    label: label.clone(),
                    pointing_up: *pointing_up,
                    line_opacity: line_opacity.value_at(at) * group,
                    label_opacity: label_opacity.value_at(at) * group,
                    arrows,
                })
            }
        }
    }
}
