//! A move-only optional container with destructive reads
//!
//! [`Optional<T>`] represents a value of type `T` or the absence of one.
//! Absence always has to be handled explicitly, through one of the
//! extraction methods or combinators. Reading the value out of the
//! container moves it to the caller and leaves the container empty.
//!
//! The only failure is [`UnwrapError`], returned by [`Optional::unwrap`]
//! and [`Optional::expect`] on an empty container. All other operations
//! always succeed.

#[macro_use]
mod macros;

mod error;
mod optional;

#[cfg(feature = "cli")]
pub mod demo;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{UnwrapError, DEFAULT_MESSAGE};
pub use optional::Optional;
