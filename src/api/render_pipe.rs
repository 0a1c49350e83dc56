use tracing::trace;

use crate::error::ChartResult;
use crate::layers::Layer;
use crate::render::{CanvasLayerKind, DrawSurface, LayerStack};

/// Drawable layers of one chart, by name.
pub struct RenderLayers<'a> {
    pub axis: &'a mut dyn Layer,
    pub line: &'a mut dyn Layer,
}

impl RenderLayers<'_> {
    fn get_mut(&mut self, kind: CanvasLayerKind) -> &mut dyn Layer {
        match kind {
            CanvasLayerKind::Axis => &mut *self.axis,
            CanvasLayerKind::Line => &mut *self.line,
        }
    }
}

/// Drawing surfaces of one chart, named like the layers they receive.
pub struct RenderContexts<'a> {
    pub axis: &'a mut dyn DrawSurface,
    pub line: &'a mut dyn DrawSurface,
}

impl RenderContexts<'_> {
    fn get_mut(&mut self, kind: CanvasLayerKind) -> &mut dyn DrawSurface {
        match kind {
            CanvasLayerKind::Axis => &mut *self.axis,
            CanvasLayerKind::Line => &mut *self.line,
        }
    }
}

/// Clears every surface, then draws each layer into its own surface.
///
/// Both passes walk the canonical [`LayerStack`] (axis, then line), so the
/// call order is fixed. The first backend failure aborts the pass.
pub struct RenderPipe;

impl RenderPipe {
    pub fn render(
        layers: &mut RenderLayers<'_>,
        contexts: &mut RenderContexts<'_>,
    ) -> ChartResult<()> {
        Self::render_stack(&LayerStack::canonical(), layers, contexts)
    }

    pub fn render_stack(
        stack: &LayerStack,
        layers: &mut RenderLayers<'_>,
        contexts: &mut RenderContexts<'_>,
    ) -> ChartResult<()> {
        for kind in stack.iter() {
            contexts.get_mut(kind).clear()?;
        }
        for kind in stack.iter() {
            let layer = layers.get_mut(kind);
            debug_assert_eq!(layer.kind(), kind, "layer bound under the wrong name");
            layer.draw(contexts.get_mut(kind))?;
            trace!(layer = kind.name(), "layer drawn");
        }
        Ok(())
    }
}
