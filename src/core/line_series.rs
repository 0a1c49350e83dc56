use serde::{Deserialize, Serialize};

use crate::core::{Scale, SeriesPoint};

/// Open polyline in pixel space: the first vertex is the move-to, every
/// following vertex is a straight line-to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinePath {
    vertices: Vec<(f64, f64)>,
}

impl LinePath {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Discards any previous vertices and starts a new path at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.vertices.clear();
        self.vertices.push((x, y));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.vertices.push((x, y));
    }

    #[must_use]
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Projects series points into one polyline, index-spaced on x.
///
/// Returns `None` for fewer than two points: there is no line to draw.
/// Single pass, no smoothing.
#[must_use]
pub fn project_line_path<'a, I>(points: I, scale: &Scale) -> Option<LinePath>
where
    I: IntoIterator<Item = &'a SeriesPoint>,
    I::IntoIter: ExactSizeIterator,
{
    let points = points.into_iter();
    let len = points.len();
    if len < 2 {
        return None;
    }

    let mut path = LinePath::with_capacity(len);
    for (index, point) in points.enumerate() {
        let x = scale.map_x(index, len);
        let y = scale.map_y(point.price);
        if index == 0 {
            path.move_to(x, y);
        } else {
            path.line_to(x, y);
        }
    }
    Some(path)
}
