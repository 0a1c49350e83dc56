/// Derived value rebuilt lazily after explicit invalidation.
///
/// Starts dirty. `ensure_fresh` runs the builder only while dirty; the
/// builder may return `None` to record that there is currently nothing to
/// hold, which is still a fresh state.
#[derive(Debug, Clone)]
pub struct DirtyCache<T> {
    value: Option<T>,
    dirty: bool,
}

impl<T> DirtyCache<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: None,
            dirty: true,
        }
    }

    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Last built value, which may be stale while dirty.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn ensure_fresh(&mut self, build: impl FnOnce() -> Option<T>) -> Option<&T> {
        if self.dirty {
            self.value = build();
            self.dirty = false;
        }
        self.value.as_ref()
    }
}

impl<T> Default for DirtyCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
