//! Defines the [`Optional`] type
//!
//! An [`Optional<T>`] holds either one `T` or nothing. Unlike [`Option`],
//! every operation that hands the value to the caller is a *destructive
//! read*: the value is moved out and the container is left empty, in one
//! step. A container can therefore never be read twice without being
//! filled again.
//!
//! The container is move-only. It does not implement [`Clone`], even when
//! `T` does, since two containers must never both believe they own the
//! same value. [`Optional::take`] moves the content into a fresh container
//! and leaves the source observably empty.
//!
//! ```
//! use optional::Optional;
//!
//! let mut fd = Optional::some(3);
//! assert_eq!(fd.unwrap(), Ok(3));
//! assert!(fd.is_none());
//! assert!(fd.unwrap().is_err());
//! ```
//!
//! Absence is always handled through one of these policies:
//!
//! | Operation          | Empty                 | Populated                 |
//! |--------------------|-----------------------|---------------------------|
//! | `unwrap`/`expect`  | `Err(UnwrapError)`    | `Ok(value)`, empties      |
//! | `unwrap_or`        | producer result       | value, producer not run   |
//! | `unwrap_def`       | default               | value, empties            |
//! | `match_with`       | `on_none()`           | `on_some(value)`, empties |
//! | `if_some`          | no-op                 | `f(value)`, empties       |
//! | `if_none`          | `f()`                 | no-op                     |

use std::borrow::Cow;
use std::mem;

use crate::error::UnwrapError;


/// A value of type `T`, or the absence of one
///
/// Extraction moves the value out and leaves the container empty.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub enum Optional<T> {
    Some(T),
    None,
}

//------------ Construction --------------------------------------------------

impl<T> Optional<T> {
    /// Create an empty `Optional`.
    pub const fn none() -> Self {
        Self::None
    }

    /// Create an empty `Optional`.
    ///
    /// Same as [`Optional::none`].
    pub const fn empty() -> Self {
        Self::None
    }

    /// Create an `Optional` holding `value`.
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Create an `Optional` from a standard [`Option`].
    ///
    /// `Optional::from` always wraps its argument, so
    /// `Optional::from(Some(1))` is an `Optional<Option<i32>>`. Use this
    /// to adopt the content of an `Option` instead.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(x) => Self::Some(x),
            None => Self::None,
        }
    }

    /// Convert into a standard [`Option`], consuming the container.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(x) => Some(x),
            Self::None => None,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

//------------ Assignment ----------------------------------------------------

impl<T> Optional<T> {
    /// Store `value`, dropping whatever was held before.
    pub fn set(&mut self, value: T) {
        *self = Self::Some(value);
    }

    /// Store `value` and return the previous content.
    pub fn replace(&mut self, value: T) -> Self {
        mem::replace(self, Self::Some(value))
    }

    /// Drop the held value, if any.
    pub fn clear(&mut self) {
        *self = Self::None;
    }

    /// Move the content into a new `Optional`, leaving `self` empty.
    ///
    /// This is the explicit form of a move: afterwards `self.is_none()`
    /// holds and the returned container owns the value.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    fn take_value(&mut self) -> Option<T> {
        mem::take(self).into_option()
    }
}

//------------ Queries -------------------------------------------------------

impl<T> Optional<T> {
    /// Check if the container holds a value.
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Check if the container is empty.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrow the held value.
    ///
    /// This is not an extraction: the value stays in the container and
    /// the state does not change.
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(x) => Some(x),
            Self::None => None,
        }
    }

    /// Mutably borrow the held value.
    ///
    /// The value may be edited in place, but it stays in the container.
    /// A populated container remains populated.
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Some(x) => Some(x),
            Self::None => None,
        }
    }
}

//------------ Extraction ----------------------------------------------------

impl<T> Optional<T> {
    /// Extract the value, leaving the container empty.
    ///
    /// Fails with the message `"Option is None value"` if the container
    /// is empty. The error records the location of this call.
    #[track_caller]
    pub fn unwrap(&mut self) -> Result<T, UnwrapError> {
        match self.take_value() {
            Some(x) => Ok(x),
            None => Err(UnwrapError::empty()),
        }
    }

    /// Extract the value, failing with a caller-chosen error kind.
    ///
    /// Behaves exactly like [`Optional::unwrap`]; on failure the
    /// [`UnwrapError`] is converted into `E`. This lets callers plug the
    /// container into their own error types.
    #[track_caller]
    pub fn unwrap_as<E: From<UnwrapError>>(&mut self) -> Result<T, E> {
        self.unwrap().map_err(E::from)
    }

    /// Extract the value, failing with `msg` if the container is empty.
    #[track_caller]
    pub fn expect(
        &mut self,
        msg: impl Into<Cow<'static, str>>,
    ) -> Result<T, UnwrapError> {
        match self.take_value() {
            Some(x) => Ok(x),
            None => Err(UnwrapError::new(msg)),
        }
    }

    /// Extract the value, failing with `msg` as a caller-chosen error kind.
    #[track_caller]
    pub fn expect_as<E: From<UnwrapError>>(
        &mut self,
        msg: impl Into<Cow<'static, str>>,
    ) -> Result<T, E> {
        self.expect(msg).map_err(E::from)
    }

    /// Extract the value, or compute one with `f` if the container is empty.
    ///
    /// `f` is called exactly once when the container is empty and never
    /// when it holds a value, so callers must not rely on side effects of
    /// `f`. The container is empty afterwards either way.
    pub fn unwrap_or<F>(&mut self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.take_value() {
            Some(x) => x,
            None => f(),
        }
    }

    /// Extract the value, or return `default` if the container is empty.
    pub fn unwrap_def(&mut self, default: T) -> T {
        self.take_value().unwrap_or(default)
    }
}

//------------ Combinators ---------------------------------------------------

impl<T> Optional<T> {
    /// Dispatch on presence, running exactly one of the closures.
    ///
    /// If the container holds a value, it is moved into `on_some` and the
    /// container is left empty. Otherwise `on_none` is called. Both
    /// branches produce the same result type.
    pub fn match_with<R, S, N>(&mut self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self.take_value() {
            Some(x) => on_some(x),
            None => on_none(),
        }
    }

    /// Move the value into `f` if there is one.
    ///
    /// The container is empty afterwards. Returns `self` for chaining.
    ///
    /// # Chaining order
    ///
    /// Always chain [`Optional::if_none`] *before* `if_some`. Because
    /// `if_some` empties the container, an `if_none` placed after it sees
    /// an empty container and fires as well:
    ///
    /// ```
    /// use optional::Optional;
    ///
    /// let mut calls = Vec::new();
    /// let mut opt = Optional::some(9);
    /// opt.if_some(|_| calls.push("some"));
    /// opt.if_none(|| calls.push("none"));
    /// assert_eq!(calls, ["some", "none"]);
    /// ```
    pub fn if_some<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(T),
    {
        if let Some(x) = self.take_value() {
            f(x);
        }
        self
    }

    /// Call `f` if the container is empty.
    ///
    /// Returns `self` for chaining. See [`Optional::if_some`] for why this
    /// must come first in a chain.
    pub fn if_none<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
        self
    }
}
