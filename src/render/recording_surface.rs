use tracing::trace;

use crate::core::{LinePath, Viewport};
use crate::error::ChartResult;
use crate::render::{
    ClearRect, DrawSurface, LinePrimitive, PathRecord, PathStroke, RenderFrame, TextPrimitive,
};

/// Headless surface used by tests, benches and hosts without a backend.
///
/// Every primitive is validated and kept in a [`RenderFrame`]; a full clear
/// empties the frame, mirroring what a pixel surface would show.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    frame: RenderFrame,
    clear_count: usize,
    path_stroke_count: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            frame: RenderFrame::new(viewport),
            clear_count: 0,
            path_stroke_count: 0,
        }
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    /// Number of `clear_rect` calls over the surface lifetime.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Number of `stroke_path` calls over the surface lifetime.
    #[must_use]
    pub fn path_stroke_count(&self) -> usize {
        self.path_stroke_count
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.frame.viewport
    }

    fn clear_rect(&mut self, rect: ClearRect) -> ChartResult<()> {
        self.frame.apply_clear(rect);
        self.clear_count += 1;
        Ok(())
    }

    fn stroke_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        line.validate()?;
        self.frame.lines.push(*line);
        Ok(())
    }

    fn stroke_path(&mut self, path: &LinePath, stroke: &PathStroke) -> ChartResult<()> {
        let record = PathRecord {
            path: path.clone(),
            stroke: *stroke,
        };
        record.validate()?;
        self.frame.paths.push(record);
        self.path_stroke_count += 1;
        trace!(vertices = path.vertices().len(), "recorded path stroke");
        Ok(())
    }

    fn fill_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        self.frame.texts.push(text.clone());
        Ok(())
    }
}
