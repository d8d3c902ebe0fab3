//! Configuration types for building streams from iterators

use serde::{Deserialize, Serialize};

/// Controls how [`Stream::collect_with`](crate::stream::Stream::collect_with)
/// materializes an iterator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Capacity reserved before the first element is pulled
    pub initial_capacity: usize,
    /// Upper bound on the number of elements; `None` means unbounded
    pub max_elements: Option<usize>,
}

impl StreamConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_max_elements(mut self, max: usize) -> Self {
        self.max_elements = Some(max);
        self
    }

    /// Capacity to reserve, never more than the element limit.
    pub(crate) fn reserve_hint(&self) -> usize {
        match self.max_elements {
            Some(max) => self.initial_capacity.min(max),
            None => self.initial_capacity,
        }
    }
}
