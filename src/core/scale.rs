use std::cell::Cell;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// Fixed pixel geometry of a chart's drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl ScaleGeometry {
    #[must_use]
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        let all_valid = [self.width, self.height, self.padding]
            .into_iter()
            .all(|value| value.is_finite() && value >= 0.0);
        if !all_valid {
            return Err(ChartError::InvalidGeometry {
                width: self.width,
                height: self.height,
                padding: self.padding,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn drawable_width(self) -> f64 {
        self.width - self.padding * 2.0
    }

    #[must_use]
    pub fn drawable_height(self) -> f64 {
        self.height - self.padding * 2.0
    }
}

/// Value range mapped onto the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Builds a domain, widening a zero-size range to `[min, min + 1]`.
    #[must_use]
    pub fn normalized(min: f64, max: f64) -> Self {
        let max = if max == min { min + 1.0 } else { max };
        Self { min, max }
    }

    /// `max - min`, or `1.0` when the range collapses to zero.
    #[must_use]
    pub fn span(self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 { 1.0 } else { span }
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Coordinate mapper shared by the axis and line layers of one chart.
///
/// Geometry is fixed at construction. The domain sits in a `Cell` so the
/// owning chart can update it while layers keep an `Rc<Scale>`; the type is
/// therefore `!Sync` and meant for single-threaded use.
#[derive(Debug)]
pub struct Scale {
    geometry: ScaleGeometry,
    domain: Cell<Domain>,
}

impl Scale {
    pub fn new(geometry: ScaleGeometry) -> ChartResult<Self> {
        geometry.validate()?;
        Ok(Self {
            geometry,
            domain: Cell::new(Domain::default()),
        })
    }

    #[must_use]
    pub fn geometry(&self) -> ScaleGeometry {
        self.geometry
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.geometry.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.geometry.height
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.geometry.padding
    }

    /// Sets the vertical value range.
    ///
    /// `min == max` is widened to `[min, min + 1]`; any other pair is stored
    /// as given, including a reversed one.
    pub fn set_domain(&self, min: f64, max: f64) {
        let domain = Domain::normalized(min, max);
        trace!(min = domain.min, max = domain.max, "set scale domain");
        self.domain.set(domain);
    }

    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain.get()
    }

    /// Maps a zero-based index among `total` points to an x pixel.
    #[must_use]
    pub fn map_x(&self, index: usize, total: usize) -> f64 {
        let padding = self.geometry.padding;
        if total <= 1 {
            return padding;
        }
        let ratio = index as f64 / (total - 1) as f64;
        padding + ratio * self.geometry.drawable_width()
    }

    /// Maps a value to a y pixel; larger values land higher (smaller y).
    #[must_use]
    pub fn map_y(&self, value: f64) -> f64 {
        let domain = self.domain.get();
        let ratio = (value - domain.min) / domain.span();
        self.geometry.height - self.geometry.padding - ratio * self.geometry.drawable_height()
    }
}
