mod frame;
mod layer_stack;
mod primitives;
mod recording_surface;

pub use frame::{PathRecord, RenderFrame};
pub use layer_stack::{CanvasLayerKind, LayerStack};
pub use primitives::{
    ClearRect, Color, LineCap, LineJoin, LinePrimitive, PathStroke, TextHAlign, TextPrimitive,
    TextVAlign,
};
pub use recording_surface::RecordingSurface;

use crate::core::{LinePath, Viewport};
use crate::error::ChartResult;

/// Drawing capability handed to layers, one surface per layer.
///
/// Surfaces are created and owned by the host; the chart only clears them
/// and issues primitives. Each call may fail when the backend does.
pub trait DrawSurface {
    /// Pixel size of the surface itself, independent of any chart geometry.
    fn size(&self) -> Viewport;

    fn clear_rect(&mut self, rect: ClearRect) -> ChartResult<()>;

    fn stroke_line(&mut self, line: &LinePrimitive) -> ChartResult<()>;

    fn stroke_path(&mut self, path: &LinePath, stroke: &PathStroke) -> ChartResult<()>;

    fn fill_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;

    /// Erases the entire visible area reported by [`DrawSurface::size`].
    fn clear(&mut self) -> ChartResult<()> {
        let size = self.size();
        self.clear_rect(ClearRect::new(
            0.0,
            0.0,
            f64::from(size.width),
            f64::from(size.height),
        ))
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoSurface, CairoSurfaceStats, composite_to_png};
