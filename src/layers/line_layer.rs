use std::rc::Rc;

use tracing::trace;

use crate::core::{LinePath, Scale, project_line_path};
use crate::data::SeriesHandle;
use crate::error::ChartResult;
use crate::render::{CanvasLayerKind, DrawSurface};

use super::{DirtyCache, Layer, LineStyle};

/// Series polyline with a cached path.
///
/// The layer does not watch its inputs. Whoever changes the buffer, the
/// scale domain or the geometry must call [`LineLayer::mark_dirty`] before
/// the next draw; otherwise the previous path is stroked again.
#[derive(Debug)]
pub struct LineLayer {
    data: SeriesHandle,
    scale: Rc<Scale>,
    style: LineStyle,
    path: DirtyCache<LinePath>,
    rebuild_count: u64,
}

impl LineLayer {
    #[must_use]
    pub fn new(data: SeriesHandle, scale: Rc<Scale>) -> Self {
        Self::with_style(data, scale, LineStyle::default())
    }

    #[must_use]
    pub fn with_style(data: SeriesHandle, scale: Rc<Scale>, style: LineStyle) -> Self {
        Self {
            data,
            scale,
            style,
            path: DirtyCache::new(),
            rebuild_count: 0,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.path.invalidate();
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.path.is_dirty()
    }

    /// Number of path rebuilds since construction.
    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Path from the last rebuild; `None` before the first draw or when the
    /// buffer held fewer than two points.
    #[must_use]
    pub fn cached_path(&self) -> Option<&LinePath> {
        self.path.peek()
    }

    #[must_use]
    pub fn style(&self) -> LineStyle {
        self.style
    }

    /// Points the layer at a new scale, e.g. after a resize, and invalidates.
    pub fn rebind_scale(&mut self, scale: Rc<Scale>) {
        self.scale = scale;
        self.mark_dirty();
    }
}

impl Layer for LineLayer {
    fn kind(&self) -> CanvasLayerKind {
        CanvasLayerKind::Line
    }

    fn draw(&mut self, surface: &mut dyn DrawSurface) -> ChartResult<()> {
        let data = &self.data;
        let scale = &self.scale;
        let rebuild_count = &mut self.rebuild_count;
        let path = self.path.ensure_fresh(|| {
            *rebuild_count += 1;
            let buffer = data.borrow();
            trace!(points = buffer.len(), "rebuild line path");
            project_line_path(&*buffer, scale)
        });

        match path {
            Some(path) => surface.stroke_path(path, &self.style.stroke()),
            None => Ok(()),
        }
    }
}
