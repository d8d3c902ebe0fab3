//! A container that makes the presence or absence of a value explicit
//!
//! Unlike a sentinel such as `0` or `""`, an [`Optional`] distinguishes
//! "a zero value is present" from "nothing is present". Absence is reported
//! only through [`Optional::is_present`]; [`Optional::get`] never fails and
//! yields `T::default()` when nothing is present.
//!
//! # Ownership
//!
//! * [`Optional::of`] takes ownership of its value.
//! * [`Optional::of_nullable`] aliases caller storage held in a [`Shared`]
//!   cell. Later writes through the caller's handle are visible to `get`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Serialize, Serializer};

use crate::error::{StreamError, StreamResult};

/// Caller-owned storage that an [`Optional`] may alias.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wraps a value in a [`Shared`] cell.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

enum Slot<T> {
    Owned(T),
    Aliased(Shared<T>),
    Empty,
}

/// A value of type `T` that may or may not be present.
pub struct Optional<T> {
    slot: Slot<T>,
}

impl<T> Optional<T> {
    /// A present Optional owning `value`.
    pub fn of(value: T) -> Self {
        Self { slot: Slot::Owned(value) }
    }

    /// A present Optional aliasing `storage`, or an empty one for `None`.
    ///
    /// No copy is taken: the Optional keeps a handle to the same cell, so
    /// mutation through the caller's handle is observed by later `get` calls.
    ///
    /// ```
    /// use rs2_optional_stream::optional::{shared, Optional};
    ///
    /// let cell = shared(1);
    /// let opt = Optional::of_nullable(Some(&cell));
    /// *cell.borrow_mut() = 2;
    /// assert_eq!(opt.get(), 2);
    /// ```
    ///
    /// # Panics
    ///
    /// Reading the value (`get`, `to_option`, formatting, serializing)
    /// panics while the caller holds a `borrow_mut` on the cell.
    pub fn of_nullable(storage: Option<&Shared<T>>) -> Self {
        match storage {
            Some(cell) => Self { slot: Slot::Aliased(Rc::clone(cell)) },
            None => Self::empty(),
        }
    }

    /// An Optional holding nothing.
    pub fn empty() -> Self {
        Self { slot: Slot::Empty }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self.slot, Slot::Empty)
    }

    /// True when the value is held through caller storage.
    pub fn is_aliased(&self) -> bool {
        matches!(self.slot, Slot::Aliased(_))
    }
}

impl<T: Clone> Optional<T> {
    /// The current value, or `None` when absent.
    pub fn to_option(&self) -> Option<T> {
        match &self.slot {
            Slot::Owned(value) => Some(value.clone()),
            Slot::Aliased(cell) => Some(cell.borrow().clone()),
            Slot::Empty => None,
        }
    }

    /// The current value, or [`StreamError::NoValue`] when absent.
    pub fn try_get(&self) -> StreamResult<T> {
        self.to_option().ok_or(StreamError::NoValue)
    }
}

impl<T: Clone + Default> Optional<T> {
    /// The current value, or `T::default()` when absent.
    ///
    /// Check [`is_present`](Self::is_present) to tell a present default
    /// value apart from absence.
    ///
    /// # Panics
    ///
    /// For an aliased Optional, panics if the shared cell is mutably
    /// borrowed at the time of the call.
    pub fn get(&self) -> T {
        self.to_option().unwrap_or_default()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::of(v),
            None => Self::empty(),
        }
    }
}

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        let slot = match &self.slot {
            Slot::Owned(value) => Slot::Owned(value.clone()),
            Slot::Aliased(cell) => Slot::Aliased(Rc::clone(cell)),
            Slot::Empty => Slot::Empty,
        };
        Self { slot }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Owned(value) => write!(f, "Optional[{}]", value),
            Slot::Aliased(cell) => write!(f, "Optional[{}]", cell.borrow()),
            Slot::Empty => write!(f, "Optional.empty"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Owned(value) => f.debug_tuple("Optional::Owned").field(value).finish(),
            Slot::Aliased(cell) => f.debug_tuple("Optional::Aliased").field(&*cell.borrow()).finish(),
            Slot::Empty => f.write_str("Optional::Empty"),
        }
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.slot {
            Slot::Owned(value) => serializer.serialize_some(value),
            Slot::Aliased(cell) => serializer.serialize_some(&*cell.borrow()),
            Slot::Empty => serializer.serialize_none(),
        }
    }
}
