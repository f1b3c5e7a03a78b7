use crate::animation::{
    ARROW_CLEARANCE_PX, ARROW_SIZE_PX, THRESHOLD_LABEL_OFFSET_PX, ThresholdVisuals,
};
use crate::core::format_number;
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive, TrianglePrimitive,
};
use crate::scene::{
    AXIS_COLOR, AXIS_TICK_FONT_PX, AXIS_TICK_LENGTH_PX, AXIS_TITLE_FONT_PX, GLYPH_FILL,
    GLYPH_LABEL_COLOR, GLYPH_LABEL_FONT_PX, GLYPH_LABEL_OFFSET_PX, GLYPH_OPACITY, GLYPH_STROKE,
    GLYPH_STROKE_WIDTH_PX, GRID_COLOR, X_TITLE_OFFSET_PX, Y_TITLE_OFFSET_PX,
};

use super::ChartEngine;

pub const GUIDE_COLOR: Color = Color::rgb8(0xff, 0x00, 0x00);
pub const GUIDE_OPACITY: f64 = 0.6;
pub const GUIDE_STROKE_WIDTH_PX: f64 = 1.5;
pub const GUIDE_DASH: LineStrokeStyle = LineStrokeStyle::Dashed {
    dash_px: 5.0,
    gap_px: 5.0,
};

pub const TOOLTIP_BG: Color = Color::rgb8(0x33, 0x33, 0x33);
pub const TOOLTIP_FONT_PX: f64 = 12.0;
pub const TOOLTIP_CORNER_RADIUS_PX: f64 = 4.0;
pub const TOOLTIP_PAD_X_PX: f64 = 6.0;
pub const TOOLTIP_PAD_Y_PX: f64 = 3.0;

pub const WINDOW_FILL: Color = Color::rgb8(0x31, 0x82, 0xce);

pub const THRESHOLD_COLOR: Color = Color::rgb8(0xe5, 0x3e, 0x3e);
pub const THRESHOLD_STROKE_WIDTH_PX: f64 = 3.0;
pub const THRESHOLD_DASH: LineStrokeStyle = LineStrokeStyle::Dashed {
    dash_px: 8.0,
    gap_px: 4.0,
};
pub const THRESHOLD_LABEL_FONT_PX: f64 = 14.0;

impl<R: Renderer> ChartEngine<R> {
    /// Flattens the retained scene, interaction overlays, and any active
    /// threshold run into one deterministic frame.
    ///
    /// An unmounted engine produces an empty frame: no data, nothing drawn.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport);
        let Some(scene) = &self.scene else {
            return Ok(frame);
        };

        let ox = self.config.margins.left;
        let oy = self.config.margins.top;
        let plot_width = self.layout.plot_width();
        let plot_height = self.layout.plot_height();
        let chrome = scene.chrome();

        // Gridlines under everything else.
        for tick in chrome.x_ticks() {
            frame.lines.push(LinePrimitive::new(
                ox + tick.offset_px,
                oy,
                ox + tick.offset_px,
                oy + plot_height,
                1.0,
                GRID_COLOR,
            ));
        }
        for tick in chrome.y_ticks() {
            frame.lines.push(LinePrimitive::new(
                ox,
                oy + tick.offset_px,
                ox + plot_width,
                oy + tick.offset_px,
                1.0,
                GRID_COLOR,
            ));
        }

        // Axis lines and tick marks.
        frame.lines.push(LinePrimitive::new(
            ox,
            oy + plot_height,
            ox + plot_width,
            oy + plot_height,
            1.0,
            AXIS_COLOR,
        ));
        frame
            .lines
            .push(LinePrimitive::new(ox, oy, ox, oy + plot_height, 1.0, AXIS_COLOR));

        for tick in chrome.x_ticks() {
            frame.lines.push(LinePrimitive::new(
                ox + tick.offset_px,
                oy + plot_height,
                ox + tick.offset_px,
                oy + plot_height + AXIS_TICK_LENGTH_PX,
                1.0,
                AXIS_COLOR,
            ));
            frame.texts.push(TextPrimitive::new(
                format_number(tick.value),
                ox + tick.offset_px,
                oy + plot_height + AXIS_TICK_LENGTH_PX + 2.0,
                AXIS_TICK_FONT_PX,
                AXIS_COLOR,
                TextHAlign::Center,
            ));
        }
        for tick in chrome.y_ticks() {
            frame.lines.push(LinePrimitive::new(
                ox - AXIS_TICK_LENGTH_PX,
                oy + tick.offset_px,
                ox,
                oy + tick.offset_px,
                1.0,
                AXIS_COLOR,
            ));
            frame.texts.push(TextPrimitive::new(
                format_number(tick.value),
                ox - AXIS_TICK_LENGTH_PX - 3.0,
                oy + tick.offset_px - AXIS_TICK_FONT_PX / 2.0,
                AXIS_TICK_FONT_PX,
                AXIS_COLOR,
                TextHAlign::Right,
            ));
        }

        // Axis titles.
        frame.texts.push(TextPrimitive::new(
            chrome.x_title(),
            ox + plot_width / 2.0,
            oy + plot_height + X_TITLE_OFFSET_PX - AXIS_TITLE_FONT_PX,
            AXIS_TITLE_FONT_PX,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
        frame.texts.push(
            TextPrimitive::new(
                chrome.y_title(),
                ox - Y_TITLE_OFFSET_PX + AXIS_TITLE_FONT_PX,
                oy + plot_height / 2.0,
                AXIS_TITLE_FONT_PX,
                AXIS_COLOR,
                TextHAlign::Center,
            )
            .with_rotation(-90.0),
        );

        // Threshold visuals sampled from the active run.
        let threshold_visuals = self.threshold.as_ref().map(|run| run.sample());

        if let Some(ThresholdVisuals::Window(window)) = &threshold_visuals {
            if window.width_px > 0.0 && window.height_px > 0.0 && window.opacity > 0.0 {
                frame.rects.push(RectPrimitive::new(
                    ox,
                    oy + window.y_top_px,
                    window.width_px,
                    window.height_px,
                    WINDOW_FILL.with_alpha(window.opacity.clamp(0.0, 1.0)),
                ));
            }
        }

        // Drag guides and tooltip.
        let guides = self.interaction.guides();
        if guides.visible {
            let guide_color = GUIDE_COLOR.with_alpha(GUIDE_OPACITY);
            frame.lines.push(
                LinePrimitive::new(
                    ox,
                    oy + guides.y_px,
                    ox + plot_width,
                    oy + guides.y_px,
                    GUIDE_STROKE_WIDTH_PX,
                    guide_color,
                )
                .with_stroke_style(GUIDE_DASH),
            );
            frame.lines.push(
                LinePrimitive::new(
                    ox + guides.x_px,
                    oy,
                    ox + guides.x_px,
                    oy + plot_height,
                    GUIDE_STROKE_WIDTH_PX,
                    guide_color,
                )
                .with_stroke_style(GUIDE_DASH),
            );
        }

        let tooltip = self.interaction.tooltip();
        if tooltip.visible && !tooltip.text.is_empty() {
            let text_width = estimate_text_width(&tooltip.text, TOOLTIP_FONT_PX);
            let text_x = ox + tooltip.x_px;
            let text_top = oy + tooltip.y_px - TOOLTIP_FONT_PX;
            frame.rects.push(
                RectPrimitive::new(
                    text_x - text_width / 2.0 - TOOLTIP_PAD_X_PX,
                    text_top - TOOLTIP_PAD_Y_PX,
                    text_width + 2.0 * TOOLTIP_PAD_X_PX,
                    TOOLTIP_FONT_PX + 2.0 * TOOLTIP_PAD_Y_PX,
                    TOOLTIP_BG,
                )
                .with_corner_radius(TOOLTIP_CORNER_RADIUS_PX),
            );
            frame.texts.push(
                TextPrimitive::new(
                    tooltip.text.clone(),
                    text_x,
                    text_top,
                    TOOLTIP_FONT_PX,
                    Color::rgb(1.0, 1.0, 1.0),
                    TextHAlign::Center,
                )
                .with_bold(),
            );
        }

        // Glyphs, bottom to top in retained draw order.
        for glyph in scene.glyphs() {
            let (x_px, y_px) = glyph.position_px();
            let radius_px = glyph.radius_px();
            let opacity = if glyph.is_dragging() { 1.0 } else { GLYPH_OPACITY };
            frame.circles.push(CirclePrimitive::new(
                ox + x_px,
                oy + y_px,
                radius_px,
                GLYPH_FILL.with_alpha(opacity),
                GLYPH_STROKE.with_alpha(opacity),
                GLYPH_STROKE_WIDTH_PX,
            ));
            frame.texts.push(TextPrimitive::new(
                glyph.label(),
                ox + x_px,
                oy + y_px + radius_px + GLYPH_LABEL_OFFSET_PX - GLYPH_LABEL_FONT_PX,
                GLYPH_LABEL_FONT_PX,
                GLYPH_LABEL_COLOR,
                TextHAlign::Center,
            ));
        }

        if let Some(ThresholdVisuals::Directional(directional)) = &threshold_visuals {
            frame.lines.push(
                LinePrimitive::new(
                    ox,
                    oy + directional.y_px,
                    ox + plot_width,
                    oy + directional.y_px,
                    THRESHOLD_STROKE_WIDTH_PX,
                    THRESHOLD_COLOR.with_alpha(directional.line_opacity.clamp(0.0, 1.0)),
                )
                .with_stroke_style(THRESHOLD_DASH),
            );
            frame.texts.push(
                TextPrimitive::new(
                    directional.label.clone(),
                    ox + plot_width / 2.0,
                    oy + directional.y_px - THRESHOLD_LABEL_OFFSET_PX - THRESHOLD_LABEL_FONT_PX,
                    THRESHOLD_LABEL_FONT_PX,
                    THRESHOLD_COLOR.with_alpha(directional.label_opacity.clamp(0.0, 1.0)),
                    TextHAlign::Center,
                )
                .with_bold(),
            );

            for arrow in &directional.arrows {
                let x = ox + arrow.x_px;
                let fill = THRESHOLD_COLOR.with_alpha(arrow.opacity.clamp(0.0, 1.0));
                let triangle = if directional.pointing_up {
                    let apex_y = oy + directional.y_px - ARROW_CLEARANCE_PX;
                    TrianglePrimitive::new(
                        x,
                        apex_y,
                        x - ARROW_SIZE_PX / 2.0,
                        apex_y - ARROW_SIZE_PX,
                        x + ARROW_SIZE_PX / 2.0,
                        apex_y - ARROW_SIZE_PX,
                        fill,
                    )
                } else {
                    let apex_y = oy + directional.y_px + ARROW_CLEARANCE_PX;
                    TrianglePrimitive::new(
                        x,
                        apex_y,
                        x - ARROW_SIZE_PX / 2.0,
                        apex_y + ARROW_SIZE_PX,
                        x + ARROW_SIZE_PX / 2.0,
                        apex_y + ARROW_SIZE_PX,
                        fill,
                    )
                };
                frame.triangles.push(triangle);
            }
        }

        Ok(frame)
    }
}

/// Deterministic width estimate for tooltip sizing: headless frames have no
/// font metrics, so the box is sized from a mean glyph-width ratio.
fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * 0.6
}
