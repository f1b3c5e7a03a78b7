use serde::{Deserialize, Serialize};

use crate::core::scale::{LinearScale, SqrtScale, VerticalScale};
use crate::core::types::{BubblePoint, ChartLayout};
use crate::error::{ChartError, ChartResult};

pub const X_DOMAIN_ROUND_STEP: f64 = 50.0;
pub const Y_DOMAIN_ROUND_STEP: f64 = 100.0;
pub const DOMAIN_PADDING_RATIO: f64 = 1.1;
pub const GLYPH_RADIUS_MIN_PX: f64 = 8.0;
pub const GLYPH_RADIUS_MAX_PX: f64 = 30.0;

/// Data-space extents frozen at mount time.
///
/// Recomputing these on point updates would make every glyph and axis
/// rescale mid-drag, so a chart instance computes them exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleDomain {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub z: (f64, f64),
}

impl ScaleDomain {
    /// Derives the frozen domain from the initial point collection:
    /// x and y are padded by 10% and rounded up to a round step, z is the
    /// raw extent feeding the radius scale.
    pub fn from_points(points: &[BubblePoint]) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::InvalidData(
                "cannot derive a scale domain from an empty point collection".to_owned(),
            ));
        }
        for point in points {
            point.validate()?;
        }

        let max_x = fold_max(points.iter().map(|p| p.x));
        let max_y = fold_max(points.iter().map(|p| p.y));
        let min_z = points.iter().map(|p| p.z).fold(f64::INFINITY, f64::min);
        let max_z = fold_max(points.iter().map(|p| p.z));

        Ok(Self {
            x: (0.0, round_up_to_step(max_x * DOMAIN_PADDING_RATIO, X_DOMAIN_ROUND_STEP)),
            y: (0.0, round_up_to_step(max_y * DOMAIN_PADDING_RATIO, Y_DOMAIN_ROUND_STEP)),
            z: (min_z, max_z),
        })
    }

    #[must_use]
    pub fn x_max(self) -> f64 {
        self.x.1
    }

    #[must_use]
    pub fn y_max(self) -> f64 {
        self.y.1
    }
}

/// The three pixel mappings of one chart instance, built once from the
/// frozen domain and the resolved layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrozenScales {
    domain: ScaleDomain,
    x: LinearScale,
    y: VerticalScale,
    radius: SqrtScale,
}

impl FrozenScales {
    pub fn from_points(points: &[BubblePoint], layout: ChartLayout) -> ChartResult<Self> {
        let domain = ScaleDomain::from_points(points)?;
        Self::from_domain(domain, layout)
    }

    pub fn from_domain(domain: ScaleDomain, layout: ChartLayout) -> ChartResult<Self> {
        let x = LinearScale::new(domain.x.0, domain.x.1, layout.plot_width())?;
        let y = VerticalScale::new(domain.y.0, domain.y.1, layout.plot_height())?;
        let radius = SqrtScale::new(
            domain.z.0,
            domain.z.1,
            GLYPH_RADIUS_MIN_PX,
            GLYPH_RADIUS_MAX_PX,
        )?;
        Ok(Self {
            domain,
            x,
            y,
            radius,
        })
    }

    #[must_use]
    pub fn domain(&self) -> ScaleDomain {
        self.domain
    }

    #[must_use]
    pub fn x(&self) -> LinearScale {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> VerticalScale {
        self.y
    }

    #[must_use]
    pub fn radius(&self) -> SqrtScale {
        self.radius
    }

    /// Maps a point's data coordinates to its glyph center and radius.
    #[must_use]
    pub fn project(&self, point: &BubblePoint) -> (f64, f64, f64) {
        (
            self.x.to_pixel(point.x),
            self.y.to_pixel(point.y),
            self.radius.to_radius(point.z),
        )
    }
}

fn round_up_to_step(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

fn fold_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}
