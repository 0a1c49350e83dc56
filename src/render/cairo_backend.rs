use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;

use crate::core::{LinePath, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ClearRect, Color, DrawSurface, LineCap, LineJoin, LinePrimitive, PathStroke, TextHAlign,
    TextPrimitive, TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoSurfaceStats {
    pub clears: usize,
    pub lines_drawn: usize,
    pub paths_drawn: usize,
    pub texts_drawn: usize,
}

/// Transparent ARGB32 image surface drawn with Cairo, labels laid out with
/// Pango.
///
/// A live chart uses one `CairoSurface` per layer; [`composite_to_png`]
/// flattens them for export.
#[derive(Debug)]
pub struct CairoSurface {
    surface: ImageSurface,
    context: Context,
    stats: CairoSurfaceStats,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            surface,
            context,
            stats: CairoSurfaceStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn stats(&self) -> CairoSurfaceStats {
        self.stats
    }

    pub fn write_png(&self) -> ChartResult<Vec<u8>> {
        self.surface.flush();
        let mut bytes = Vec::new();
        self.surface
            .write_to_png(&mut bytes)
            .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))?;
        Ok(bytes)
    }
}

impl DrawSurface for CairoSurface {
    fn size(&self) -> Viewport {
        Viewport::new(
            u32::try_from(self.surface.width()).unwrap_or(0),
            u32::try_from(self.surface.height()).unwrap_or(0),
        )
    }

    fn clear_rect(&mut self, rect: ClearRect) -> ChartResult<()> {
        let context = &self.context;
        context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        context.set_operator(Operator::Clear);
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        let filled = context
            .fill()
            .map_err(|err| map_backend_error("failed to clear rectangle", err));
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;
        filled?;
        self.stats.clears += 1;
        Ok(())
    }

    fn stroke_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        line.validate()?;
        let context = &self.context;
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.set_line_cap(cairo::LineCap::Butt);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        self.stats.lines_drawn += 1;
        Ok(())
    }

    fn stroke_path(&mut self, path: &LinePath, stroke: &PathStroke) -> ChartResult<()> {
        stroke.validate()?;
        let Some((&(x0, y0), rest)) = path.vertices().split_first() else {
            return Ok(());
        };

        let context = &self.context;
        context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        apply_color(context, stroke.color);
        context.set_line_width(stroke.width);
        context.set_line_cap(map_line_cap(stroke.cap));
        context.set_line_join(map_line_join(stroke.join));
        context.new_path();
        context.move_to(x0, y0);
        for &(x, y) in rest {
            context.line_to(x, y);
        }
        let stroked = context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err));
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;
        stroked?;
        self.stats.paths_drawn += 1;
        Ok(())
    }

    fn fill_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        let context = &self.context;
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        let y = match text.v_align {
            TextVAlign::Top => text.y,
            TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
            TextVAlign::Baseline => text.y - f64::from(layout.baseline()) / f64::from(pango::SCALE),
        };

        apply_color(context, text.color);
        context.move_to(x, y);
        pangocairo::functions::show_layout(context, &layout);
        self.stats.texts_drawn += 1;
        Ok(())
    }
}

/// Paints `background`, then every layer in order, and encodes the result
/// as PNG. All layers must share the first layer's size.
pub fn composite_to_png(layers: &[&CairoSurface], background: Color) -> ChartResult<Vec<u8>> {
    let Some(first) = layers.first() else {
        return Err(ChartError::InvalidData(
            "at least one layer is required to composite".to_owned(),
        ));
    };
    let width = first.surface.width();
    let height = first.surface.height();
    if layers
        .iter()
        .any(|layer| layer.surface.width() != width || layer.surface.height() != height)
    {
        return Err(ChartError::InvalidData(
            "composited layers must share one size".to_owned(),
        ));
    }

    let target = ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create composite surface", err))?;
    let context = Context::new(&target)
        .map_err(|err| map_backend_error("failed to create composite context", err))?;
    apply_color(&context, background);
    context
        .paint()
        .map_err(|err| map_backend_error("failed to paint background", err))?;

    for layer in layers {
        layer.surface.flush();
        context
            .set_source_surface(&layer.surface, 0.0, 0.0)
            .map_err(|err| map_backend_error("failed to set layer source", err))?;
        context
            .paint()
            .map_err(|err| map_backend_error("failed to paint layer", err))?;
    }
    drop(context);

    let mut bytes = Vec::new();
    target
        .write_to_png(&mut bytes)
        .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))?;
    Ok(bytes)
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_line_cap(cap: LineCap) -> cairo::LineCap {
    match cap {
        LineCap::Butt => cairo::LineCap::Butt,
        LineCap::Round => cairo::LineCap::Round,
        LineCap::Square => cairo::LineCap::Square,
    }
}

fn map_line_join(join: LineJoin) -> cairo::LineJoin {
    match join {
        LineJoin::Miter => cairo::LineJoin::Miter,
        LineJoin::Round => cairo::LineJoin::Round,
        LineJoin::Bevel => cairo::LineJoin::Bevel,
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
