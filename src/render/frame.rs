use crate::core::{LinePath, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{ClearRect, LinePrimitive, PathStroke, TextPrimitive};

/// One stroked polyline as recorded by a headless surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PathRecord {
    pub path: LinePath,
    pub stroke: PathStroke,
}

impl PathRecord {
    pub fn validate(&self) -> ChartResult<()> {
        self.stroke.validate()?;
        if self
            .path
            .vertices()
            .iter()
            .any(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(ChartError::InvalidData(
                "path vertices must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Backend-agnostic content of one surface since its last full clear.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub paths: Vec<PathRecord>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            paths: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Drops everything when `rect` covers the frame; partial clears keep
    /// the recorded primitives since they cannot be split.
    pub fn apply_clear(&mut self, rect: ClearRect) {
        if rect.covers(
            f64::from(self.viewport.width),
            f64::from(self.viewport.height),
        ) {
            self.lines.clear();
            self.paths.clear();
            self.texts.clear();
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for record in &self.paths {
            record.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.paths.is_empty() && self.texts.is_empty()
    }
}
