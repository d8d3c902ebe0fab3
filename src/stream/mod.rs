//! Eager, ordered streams over finite sequences
//!
//! A [`Stream`] is built from an existing sequence, transformed by
//! intermediate operations and finished by a terminal operation.
//!
//! Every intermediate operation computes its complete output before it
//! returns. Nothing is deferred, so a side-effecting function passed to a
//! stage runs exactly once per element of that stage, however many terminal
//! operations are later called on downstream streams. Streams over unbounded
//! sources are not supported; see
//! [`Stream::collect_with`] for a bounded way to drain an iterator.
//!
//! Intermediate operations borrow the receiver and return a new stream, so a
//! single stream can feed several independent pipelines.

pub mod core;
pub mod constructors;
pub mod utility;

// Re-export core types
pub use core::Stream;

// Re-export comparator helpers
pub use utility::{ordering_of, three_way};
