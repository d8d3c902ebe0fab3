//! Optional values and eager, chainable streams over finite sequences.
//!
//! ```
//! use rs2_optional_stream::{AnyValue, Stream};
//!
//! let total = Stream::from_array([1, 2, 3, 4, 5, 6])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| *x as i64 * 10)
//!     .reduce(|a, b| {
//!         let a = a.downcast::<i64>().unwrap_or_default();
//!         let b = b.downcast::<i64>().unwrap_or_default();
//!         AnyValue::new(a + b)
//!     });
//! assert_eq!(total.to_string(), "Optional[120]");
//! ```

pub mod error;
pub mod optional;
pub mod stream;
pub mod value;

pub mod pipe;

pub mod stream_configuration;

// Re-export the main types at the crate root
pub use error::{StreamError, StreamResult};
pub use optional::{shared, Optional, Shared};
pub use stream::{ordering_of, three_way, Stream};
pub use stream_configuration::StreamConfig;
pub use value::AnyValue;
