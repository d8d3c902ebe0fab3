//! Terminal operations: for_each, find, matching, count, min/max, reduce, to_slice
use std::cmp::Ordering;
use std::slice;

use super::core::Stream;
use crate::optional::Optional;

/// Converts an integer three-way result (negative, zero, positive) into an
/// [`Ordering`].
pub fn ordering_of(n: i64) -> Ordering {
    n.cmp(&0)
}

/// Adapts an integer-valued comparator such as `|a, b| a - b` into one
/// returning [`Ordering`].
pub fn three_way<T, F>(mut comparator: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> i64,
{
    move |a: &T, b: &T| ordering_of(comparator(a, b))
}

impl<T> Stream<T> {
    /// Calls `consumer` once per element, in order.
    pub fn for_each<F>(&self, consumer: F)
    where
        F: FnMut(&T),
    {
        self.data.iter().for_each(consumer);
    }

    /// True when every element satisfies `predicate`; true for an empty stream.
    pub fn all_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.data.iter().all(predicate)
    }

    /// True when at least one element satisfies `predicate`.
    pub fn any_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.data.iter().any(predicate)
    }

    pub fn none_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        !self.any_match(predicate)
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A read-only view of the backing storage.
    ///
    /// The slice aliases the stream's storage (and that of any stream
    /// sharing it). Writing through it is impossible, so a stream still
    /// referenced elsewhere cannot be corrupted. Use
    /// [`to_vec`](Stream::to_vec) for an owned copy.
    pub fn to_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    fn extreme_by<F>(&self, mut comparator: F, wanted: Ordering) -> Option<&T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut iter = self.data.iter();
        let mut best = iter.next()?;
        for candidate in iter {
            // Strict comparison keeps the earliest element on ties.
            if comparator(candidate, best) == wanted {
                best = candidate;
            }
        }
        Some(best)
    }
}

impl<T: Clone> Stream<T> {
    /// The first element, or an empty Optional for an empty stream.
    pub fn find_first(&self) -> Optional<T> {
        self.data.first().cloned().into()
    }

    /// Same as [`find_first`](Stream::find_first); the stream is ordered and
    /// sequential, so "any" is always the first element.
    pub fn find_any(&self) -> Optional<T> {
        self.find_first()
    }

    /// The smallest element under `comparator`, earliest on ties.
    pub fn min<F>(&self, comparator: F) -> Optional<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.extreme_by(comparator, Ordering::Less).cloned().into()
    }

    /// The largest element under `comparator`, earliest on ties.
    pub fn max<F>(&self, comparator: F) -> Optional<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.extreme_by(comparator, Ordering::Greater).cloned().into()
    }

    /// Left fold seeded with the first element.
    ///
    /// Returns an empty Optional for an empty stream. There is no
    /// identity-seeded variant.
    pub fn reduce<F>(&self, mut operator: F) -> Optional<T>
    where
        F: FnMut(T, T) -> T,
    {
        let mut iter = self.data.iter().cloned();
        match iter.next() {
            Some(first) => Optional::of(iter.fold(first, &mut operator)),
            None => Optional::empty(),
        }
    }

    /// An owned copy of the elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }
}

impl<'a, T> IntoIterator for &'a Stream<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
