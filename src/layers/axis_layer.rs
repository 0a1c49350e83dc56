use std::rc::Rc;

use crate::core::{Scale, TICK_COUNT, axis_ticks};
use crate::error::ChartResult;
use crate::render::{
    CanvasLayerKind, DrawSurface, LinePrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use super::{AxisStyle, Layer};

/// Right-hand price axis with a bottom baseline.
///
/// Redrawn in full on every call from the scale's live domain; there is
/// nothing to cache.
#[derive(Debug, Clone)]
pub struct AxisLayer {
    scale: Rc<Scale>,
    style: AxisStyle,
}

impl AxisLayer {
    #[must_use]
    pub fn new(scale: Rc<Scale>) -> Self {
        Self::with_style(scale, AxisStyle::default())
    }

    #[must_use]
    pub fn with_style(scale: Rc<Scale>, style: AxisStyle) -> Self {
        Self { scale, style }
    }

    #[must_use]
    pub fn scale(&self) -> &Rc<Scale> {
        &self.scale
    }

    #[must_use]
    pub fn style(&self) -> AxisStyle {
        self.style
    }

    pub fn rebind_scale(&mut self, scale: Rc<Scale>) {
        self.scale = scale;
    }

    /// x of the vertical axis, snapped to a pixel center for a crisp hairline.
    #[must_use]
    pub fn axis_x(&self) -> f64 {
        (self.scale.width() - self.scale.padding()).round() + 0.5
    }

    fn axis_line(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> LinePrimitive {
        LinePrimitive::new(x1, y1, x2, y2, self.style.line_width, self.style.line_color)
    }
}

impl Layer for AxisLayer {
    fn kind(&self) -> CanvasLayerKind {
        CanvasLayerKind::Axis
    }

    fn draw(&mut self, surface: &mut dyn DrawSurface) -> ChartResult<()> {
        let padding = self.scale.padding();
        let bottom = self.scale.height() - padding;
        let axis_x = self.axis_x();

        surface.stroke_line(&self.axis_line(axis_x, padding, axis_x, bottom))?;
        surface.stroke_line(&self.axis_line(padding, bottom, axis_x, bottom))?;

        let tick_end = axis_x + self.style.tick_length_px;
        let label_x = axis_x + self.style.label_offset_px;
        for tick in axis_ticks(self.scale.domain(), TICK_COUNT) {
            let y = self.scale.map_y(tick.value);
            surface.stroke_line(&self.axis_line(axis_x, y, tick_end, y))?;
            let label = TextPrimitive::new(
                tick.label,
                label_x,
                y,
                self.style.label_font_size_px,
                self.style.label_color,
                TextHAlign::Left,
            )
            .with_v_align(TextVAlign::Middle);
            surface.fill_text(&label)?;
        }
        Ok(())
    }
}
