mod axis_layer;
mod cache;
mod line_layer;
mod style;

pub use axis_layer::AxisLayer;
pub use cache::DirtyCache;
pub use line_layer::LineLayer;
pub use style::{AxisStyle, LineStyle};

use crate::error::ChartResult;
use crate::render::{CanvasLayerKind, DrawSurface};

/// Component that renders into one drawing surface.
pub trait Layer {
    fn kind(&self) -> CanvasLayerKind;

    fn draw(&mut self, surface: &mut dyn DrawSurface) -> ChartResult<()>;
}
