use std::cell::{Ref, RefCell};
use std::collections::VecDeque;
use std::collections::vec_deque::Iter;
use std::rc::Rc;

use crate::core::SeriesPoint;
use crate::core::primitives::finite_min_max;

/// Upper bound on storage reserved up front; larger buffers grow on demand.
const PREALLOCATED_POINTS: usize = 1_024;

/// Chronological FIFO of series points capped at `max_points`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBuffer {
    points: VecDeque<SeriesPoint>,
    max_points: usize,
}

impl SeriesBuffer {
    /// `max_points` is clamped to at least one entry.
    #[must_use]
    pub fn new(max_points: usize) -> Self {
        let max_points = max_points.max(1);
        Self {
            points: VecDeque::with_capacity(max_points.min(PREALLOCATED_POINTS) + 1),
            max_points,
        }
    }

    #[must_use]
    pub fn max_points(&self) -> usize {
        self.max_points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends `point`; returns the evicted oldest point on overflow.
    pub fn push(&mut self, point: SeriesPoint) -> Option<SeriesPoint> {
        self.points.push_back(point);
        if self.points.len() > self.max_points {
            self.points.pop_front()
        } else {
            None
        }
    }

    /// Empties the buffer in place and seeds it with one point.
    pub fn reset_to(&mut self, seed: SeriesPoint) {
        self.points.clear();
        self.points.push_back(seed);
    }

    pub fn iter(&self) -> Iter<'_, SeriesPoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&SeriesPoint> {
        self.points.front()
    }

    #[must_use]
    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.back()
    }

    /// Lowest and highest finite price, `None` when empty.
    #[must_use]
    pub fn price_range(&self) -> Option<(f64, f64)> {
        finite_min_max(self.points.iter().map(|point| point.price))
    }
}

impl<'a> IntoIterator for &'a SeriesBuffer {
    type Item = &'a SeriesPoint;
    type IntoIter = Iter<'a, SeriesPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Read-only handle on a buffer owned by a [`RealtimeSeries`](super::RealtimeSeries).
///
/// Cloning shares the same buffer. Holding the `Ref` from [`SeriesHandle::borrow`]
/// across a tick panics: consumers read, draw and release.
#[derive(Debug, Clone)]
pub struct SeriesHandle {
    inner: Rc<RefCell<SeriesBuffer>>,
}

impl SeriesHandle {
    pub(crate) fn new(inner: Rc<RefCell<SeriesBuffer>>) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn borrow(&self) -> Ref<'_, SeriesBuffer> {
        self.inner.borrow()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    #[must_use]
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.inner.borrow().price_range()
    }

    /// Copies the current points, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<SeriesPoint> {
        self.inner.borrow().iter().copied().collect()
    }

    /// Whether both handles observe the same underlying buffer.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<SeriesBuffer> for SeriesHandle {
    fn from(buffer: SeriesBuffer) -> Self {
        Self::new(Rc::new(RefCell::new(buffer)))
    }
}
