pub mod domain;
pub mod reconcile;
pub mod rule;
pub mod scale;
pub mod snap;
pub mod types;

pub use domain::{
    DOMAIN_PADDING_RATIO, FrozenScales, GLYPH_RADIUS_MAX_PX, GLYPH_RADIUS_MIN_PX, ScaleDomain,
    X_DOMAIN_ROUND_STEP, Y_DOMAIN_ROUND_STEP,
};
pub use reconcile::{ReconcilePlan, reconcile};
pub use rule::{RuleDescriptor, RuleOperator, RuleOutcome, evaluate_points};
pub use scale::{LinearScale, SqrtScale, VerticalScale, nice_ticks};
pub use snap::{DEFAULT_SNAP_INTERVAL, snap_value};
pub use types::{BubblePoint, ChartLayout, ChartMargins, Viewport, format_number};
