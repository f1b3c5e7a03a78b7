use crate::error::{ChartError, ChartResult};

/// Linear mapping from a data domain onto the pixel range `[0, range_px]`.
///
/// The pixel range is part of the scale: domains and ranges are frozen
/// together when the chart mounts, so later data updates cannot shift
/// existing geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_px: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64, range_px: f64) -> ChartResult<Self> {
        validate_domain(domain_start, domain_end)?;
        validate_range(range_px)?;
        Ok(Self {
            domain_start,
            domain_end,
            range_px,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range_px(self) -> f64 {
        self.range_px
    }

    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        (value - self.domain_start) / span * self.range_px
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        self.domain_start + pixel / self.range_px * span
    }
}

/// Linear mapping with an inverted pixel range `[range_px, 0]`, so larger
/// data values render higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalScale {
    domain_start: f64,
    domain_end: f64,
    range_px: f64,
}

impl VerticalScale {
    pub fn new(domain_start: f64, domain_end: f64, range_px: f64) -> ChartResult<Self> {
        validate_domain(domain_start, domain_end)?;
        validate_range(range_px)?;
        Ok(Self {
            domain_start,
            domain_end,
            range_px,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range_px(self) -> f64 {
        self.range_px
    }

    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        (1.0 - normalized) * self.range_px
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        self.domain_start + (1.0 - pixel / self.range_px) * span
    }
}

/// Square-root mapping from a data domain onto a radius range, so glyph
/// area (not radius) tracks the data value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    domain_start: f64,
    domain_end: f64,
    radius_min: f64,
    radius_max: f64,
}

impl SqrtScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        radius_min: f64,
        radius_max: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite()
            || !domain_end.is_finite()
            || domain_start < 0.0
            || domain_end < domain_start
        {
            return Err(ChartError::InvalidData(
                "sqrt scale domain must be finite, >= 0, and ordered".to_owned(),
            ));
        }
        if !radius_min.is_finite()
            || !radius_max.is_finite()
            || radius_min <= 0.0
            || radius_max < radius_min
        {
            return Err(ChartError::InvalidData(
                "sqrt scale radius range must be finite, > 0, and ordered".to_owned(),
            ));
        }
        Ok(Self {
            domain_start,
            domain_end,
            radius_min,
            radius_max,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps a data value to a radius. A degenerate domain maps everything to
    /// the middle of the radius range so a lone bubble keeps a stable size.
    #[must_use]
    pub fn to_radius(self, value: f64) -> f64 {
        let sqrt_start = self.domain_start.sqrt();
        let sqrt_end = self.domain_end.sqrt();
        if sqrt_end <= sqrt_start {
            return (self.radius_min + self.radius_max) / 2.0;
        }

        let normalized = (value.max(0.0).sqrt() - sqrt_start) / (sqrt_end - sqrt_start);
        let clamped = normalized.clamp(0.0, 1.0);
        self.radius_min + clamped * (self.radius_max - self.radius_min)
    }
}

/// Selects round tick values covering `[start, end]`, aiming for
/// `target_count` ticks with a step from the 1/2/5 decade ladder.
#[must_use]
pub fn nice_ticks(start: f64, end: f64, target_count: usize) -> Vec<f64> {
    if !start.is_finite() || !end.is_finite() || end <= start || target_count == 0 {
        return Vec::new();
    }

    let raw_step = (end - start) / target_count as f64;
    let magnitude = 10.0_f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    // Same rounding thresholds as d3's tick increment selection.
    let step = if residual >= 50.0_f64.sqrt() {
        10.0 * magnitude
    } else if residual >= 10.0_f64.sqrt() {
        5.0 * magnitude
    } else if residual >= 2.0_f64.sqrt() {
        2.0 * magnitude
    } else {
        magnitude
    };

    let mut ticks = Vec::new();
    let mut tick = (start / step).ceil() * step;
    // Epsilon in step units guards against accumulated float error at the top end.
    let limit = end + step * 1e-9;
    while tick <= limit {
        ticks.push(tick);
        tick += step;
    }
    ticks
}

fn validate_domain(start: f64, end: f64) -> ChartResult<()> {
    if !start.is_finite() || !end.is_finite() || start == end {
        return Err(ChartError::InvalidData(
            "scale domain must be finite and non-zero".to_owned(),
        ));
    }
    Ok(())
}

fn validate_range(range_px: f64) -> ChartResult<()> {
    if !range_px.is_finite() || range_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "scale pixel range must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
