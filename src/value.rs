//! Dynamically typed stream elements produced by a type-erasing `map`
//!
//! After [`Stream::map`](crate::stream::Stream::map) the element type is
//! [`AnyValue`]. Predicates, comparators and reducers on such a stream must
//! recover the concrete type themselves with [`AnyValue::downcast_ref`] or
//! [`AnyValue::downcast`].
//!
//! `AnyValue` has no equality, so a mapped stream is deduplicated with
//! [`Stream::distinct_by`](crate::stream::Stream::distinct_by) and a key
//! function that unboxes the value.

use std::any::{self, Any};
use std::fmt;
use std::rc::Rc;

use crate::error::{StreamError, StreamResult};

trait Erased: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any + fmt::Debug> Erased for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

/// A reference-counted value whose static type has been erased.
#[derive(Clone)]
pub struct AnyValue {
    inner: Rc<dyn Erased>,
}

impl AnyValue {
    pub fn new<U: Any + fmt::Debug>(value: U) -> Self {
        Self { inner: Rc::new(value) }
    }

    // `Rc<dyn Erased>` is itself `Erased`; dispatch through the trait object.
    fn erased(&self) -> &dyn Erased {
        &*self.inner
    }

    pub fn is<U: Any>(&self) -> bool {
        self.erased().as_any().is::<U>()
    }

    /// Borrows the value as `U`, or `None` when it holds another type.
    pub fn downcast_ref<U: Any>(&self) -> Option<&U> {
        self.erased().as_any().downcast_ref::<U>()
    }

    /// Clones the value out as `U`.
    pub fn downcast<U: Any + Clone>(&self) -> StreamResult<U> {
        self.downcast_ref::<U>()
            .cloned()
            .ok_or(StreamError::TypeMismatch { expected: any::type_name::<U>() })
    }

    /// Name of the concrete type held, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.erased().type_name()
    }
}

impl Default for AnyValue {
    fn default() -> Self {
        Self::new(())
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.erased(), f)
    }
}

// Strings render bare; every other type falls back to its Debug form.
impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = self.downcast_ref::<String>() {
            return f.write_str(s);
        }
        if let Some(s) = self.downcast_ref::<&'static str>() {
            return f.write_str(s);
        }
        fmt::Debug::fmt(self.erased(), f)
    }
}
