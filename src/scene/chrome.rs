use crate::core::{FrozenScales, nice_ticks};
use crate::render::Color;

pub const AXIS_TICK_TARGET: usize = 10;
pub const AXIS_TICK_LENGTH_PX: f64 = 6.0;
pub const AXIS_TICK_FONT_PX: f64 = 10.0;
pub const AXIS_TITLE_FONT_PX: f64 = 12.0;
pub const X_TITLE_OFFSET_PX: f64 = 45.0;
pub const Y_TITLE_OFFSET_PX: f64 = 55.0;

pub const AXIS_COLOR: Color = Color::rgb8(0x4a, 0x55, 0x68);
pub const GRID_COLOR: Color = Color::rgb8(0xe2, 0xe8, 0xf0);

/// One axis tick: the data value and its plot-relative pixel offset along
/// the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub offset_px: f64,
}

/// Static chart furniture computed exactly once when the scales freeze.
///
/// Reconciliation never touches this; any sequence of point updates keeps
/// the same ticks, gridlines, and titles.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartChrome {
    x_ticks: Vec<AxisTick>,
    y_ticks: Vec<AxisTick>,
    x_title: String,
    y_title: String,
}

impl ChartChrome {
    #[must_use]
    pub fn build(
        scales: &FrozenScales,
        x_title: impl Into<String>,
        y_title: impl Into<String>,
    ) -> Self {
        let (x_start, x_end) = scales.x().domain();
        let (y_start, y_end) = scales.y().domain();

        let x_ticks = nice_ticks(x_start, x_end, AXIS_TICK_TARGET)
            .into_iter()
            .map(|value| AxisTick {
                value,
                offset_px: scales.x().to_pixel(value),
            })
            .collect();
        let y_ticks = nice_ticks(y_start, y_end, AXIS_TICK_TARGET)
            .into_iter()
            .map(|value| AxisTick {
                value,
                offset_px: scales.y().to_pixel(value),
            })
            .collect();

        Self {
            x_ticks,
            y_ticks,
            x_title: x_title.into(),
            y_title: y_title.into(),
        }
    }

    #[must_use]
    pub fn x_ticks(&self) -> &[AxisTick] {
        &self.x_ticks
    }

    #[must_use]
    pub fn y_ticks(&self) -> &[AxisTick] {
        &self.y_ticks
    }

    #[must_use]
    pub fn x_title(&self) -> &str {
        &self.x_title
    }

    #[must_use]
    pub fn y_title(&self) -> &str {
        &self.y_title
    }
}
