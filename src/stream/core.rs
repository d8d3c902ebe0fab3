//! The stream type and its intermediate operations

use std::any::Any;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::value::AnyValue;

/// An ordered, fully materialized sequence of elements.
///
/// The backing storage is reference counted and never mutated. Cloning a
/// stream, [`to_stream`](Stream::to_stream), and a [`limit`](Stream::limit)
/// that keeps every element share that storage; all other intermediate
/// operations allocate their own.
pub struct Stream<T> {
    pub(crate) data: Rc<[T]>,
}

impl<T> Stream<T> {
    /// Wraps an already computed stage output.
    pub(crate) fn stage(name: &'static str, input_len: usize, output: Vec<T>) -> Self {
        log::trace!("{}: {} -> {} elements", name, input_len, output.len());
        Self::from_vec(output)
    }

    /// A stream sharing this stream's backing storage.
    pub fn to_stream(&self) -> Self {
        Self { data: Rc::clone(&self.data) }
    }

    /// Applies `mapper` to every element, erasing the output type.
    ///
    /// Downstream predicates, comparators and reducers receive
    /// [`AnyValue`]s and must downcast them to the concrete type.
    ///
    /// ```
    /// use rs2_optional_stream::stream::Stream;
    ///
    /// let total = Stream::from_vec(vec![1, 2, 3])
    ///     .map(|x| *x as i64 * 10)
    ///     .reduce(|a, b| {
    ///         let sum = a.downcast::<i64>().unwrap() + b.downcast::<i64>().unwrap();
    ///         rs2_optional_stream::AnyValue::new(sum)
    ///     });
    /// assert_eq!(total.get().downcast::<i64>(), Ok(60));
    /// ```
    pub fn map<U, F>(&self, mut mapper: F) -> Stream<AnyValue>
    where
        U: Any + fmt::Debug,
        F: FnMut(&T) -> U,
    {
        let output = self.data.iter().map(|x| AnyValue::new(mapper(x))).collect();
        Stream::stage("map", self.data.len(), output)
    }

    /// Applies `mapper` to every element, keeping the output type.
    pub fn map_to<U, F>(&self, mapper: F) -> Stream<U>
    where
        F: FnMut(&T) -> U,
    {
        let output = self.data.iter().map(mapper).collect();
        Stream::stage("map_to", self.data.len(), output)
    }
}

impl<T: Clone> Stream<T> {
    /// Keeps, in order, every element for which `predicate` holds.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        let output = self.data.iter().filter(|x| predicate(*x)).cloned().collect();
        Self::stage("filter", self.data.len(), output)
    }

    /// Reorders the elements by `comparator`.
    ///
    /// The sort is stable: elements the comparator ranks `Equal` keep their
    /// input order.
    pub fn sorted<F>(&self, mut comparator: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut output = self.data.to_vec();
        output.sort_by(|a, b| comparator(a, b));
        Self::stage("sorted", self.data.len(), output)
    }

    /// Sorted by a key extracted from each element, stable on equal keys.
    pub fn sorted_by_key<K, F>(&self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sorted(|a, b| key(a).cmp(&key(b)))
    }

    /// At most the first `n` elements.
    ///
    /// When `n` covers the whole stream the result shares this stream's
    /// storage.
    pub fn limit(&self, n: usize) -> Self {
        if n >= self.data.len() {
            log::trace!("limit: {} elements kept", self.data.len());
            return self.to_stream();
        }
        Self::stage("limit", self.data.len(), self.data[..n].to_vec())
    }

    /// Everything after the first `n` elements; empty when `n` covers the
    /// whole stream.
    pub fn skip(&self, n: usize) -> Self {
        let output = match self.data.get(n..) {
            Some(rest) => rest.to_vec(),
            None => Vec::new(),
        };
        Self::stage("skip", self.data.len(), output)
    }
}

impl<T: Clone + Eq + Hash> Stream<T> {
    /// Each distinct element once, at the position of its first occurrence.
    ///
    /// Requires value equality on the element type. Types without it are
    /// rejected at compile time:
    ///
    /// ```compile_fail
    /// use rs2_optional_stream::stream::Stream;
    ///
    /// struct Point { x: i32 }
    /// Stream::from_vec(vec![Point { x: 1 }]).distinct();
    /// ```
    pub fn distinct(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.data.len());
        let output = self
            .data
            .iter()
            .filter(|x| seen.insert(*x))
            .cloned()
            .collect();
        Self::stage("distinct", self.data.len(), output)
    }
}

impl<T: Clone> Stream<T> {
    /// Each element whose `key` was not produced by an earlier element, in
    /// order.
    ///
    /// This is how a stream of [`AnyValue`]s is deduplicated: the key
    /// function recovers the concrete type.
    ///
    /// ```
    /// use rs2_optional_stream::stream::Stream;
    ///
    /// let parities = Stream::from_vec(vec![1, 1, 2, 3])
    ///     .map(|x| x % 2)
    ///     .distinct_by(|v| v.downcast::<i32>().unwrap_or_default());
    /// assert_eq!(parities.count(), 2);
    /// ```
    pub fn distinct_by<K, F>(&self, mut key: F) -> Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut seen = HashSet::with_capacity(self.data.len());
        let output = self
            .data
            .iter()
            .filter(|x| seen.insert(key(*x)))
            .cloned()
            .collect();
        Self::stage("distinct_by", self.data.len(), output)
    }
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        self.to_stream()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stream").field(&&*self.data).finish()
    }
}
