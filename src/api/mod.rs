mod data_controller;
mod drag_controller;
mod engine;
mod engine_config;
mod frame_builder;
mod threshold_controller;

pub use drag_controller::TOOLTIP_OFFSET_PX;
pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
pub use frame_builder::{
    GUIDE_COLOR, GUIDE_DASH, GUIDE_OPACITY, GUIDE_STROKE_WIDTH_PX, THRESHOLD_COLOR,
    THRESHOLD_DASH, THRESHOLD_LABEL_FONT_PX, THRESHOLD_STROKE_WIDTH_PX, TOOLTIP_BG,
    TOOLTIP_CORNER_RADIUS_PX, TOOLTIP_FONT_PX, TOOLTIP_PAD_X_PX, TOOLTIP_PAD_Y_PX, WINDOW_FILL,
};
