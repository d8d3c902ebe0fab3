//! Stream constructors: from_slice, from_array, from_vec, empty, collect_with

use std::rc::Rc;

use super::core::Stream;
use crate::error::{StreamError, StreamResult};
use crate::stream_configuration::StreamConfig;

impl<T> Stream<T> {
    /// A stream that takes ownership of `data` without cloning its elements.
    ///
    /// The elements are moved into a fresh reference-counted buffer.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data: Rc::from(data) }
    }

    /// A stream over the elements of a fixed-size array.
    pub fn from_array<const N: usize>(array: [T; N]) -> Self {
        Self::from_vec(Vec::from(array))
    }

    pub fn empty() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Drains `source` into a stream, honouring the limits in `config`.
    ///
    /// With `max_elements` set, at most one element past the limit is pulled
    /// before failing with [`StreamError::CapacityExceeded`], so an infinite
    /// iterator is rejected instead of exhausting memory.
    pub fn collect_with<I>(source: I, config: &StreamConfig) -> StreamResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut data = Vec::with_capacity(config.reserve_hint());
        for item in source {
            if let Some(limit) = config.max_elements {
                if data.len() == limit {
                    log::warn!("Source exceeded the limit of {} elements", limit);
                    return Err(StreamError::CapacityExceeded { limit });
                }
            }
            data.push(item);
        }
        Ok(Self::from_vec(data))
    }
}

impl<T: Clone> Stream<T> {
    /// A stream over a copy of `slice`.
    ///
    /// The caller's storage is not aliased; later changes to it are not seen
    /// by the stream.
    pub fn from_slice(slice: &[T]) -> Self {
        Self { data: Rc::from(slice) }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for Stream<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T, const N: usize> From<[T; N]> for Stream<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_array(array)
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
