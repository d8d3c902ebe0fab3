//! Error types for the fallible Optional and Stream APIs
//!
//! Contract violations (for example a panicking comparator) are not
//! represented here. Legitimate absence of a result is an empty
//! [`Optional`](crate::optional::Optional), not an error.

use thiserror::Error;

/// Main error type for the fallible operations of this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// A type-erased value did not hold the requested concrete type
    #[error("type mismatch: value is not a {expected}")]
    TypeMismatch { expected: &'static str },

    /// `try_get` was called on an empty Optional
    #[error("no value present")]
    NoValue,

    /// A bounded collection yielded more elements than allowed
    #[error("source exceeded the configured limit of {limit} elements")]
    CapacityExceeded { limit: usize },
}

/// Result type for the fallible operations of this crate
pub type StreamResult<T> = Result<T, StreamError>;
