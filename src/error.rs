//! Defines the [`UnwrapError`] type

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// Message used by [`Optional::unwrap`] when no message is supplied
///
/// [`Optional::unwrap`]: crate::Optional::unwrap
pub const DEFAULT_MESSAGE: &str = "Option is None value";

/// A value was requested from an empty [`Optional`]
///
/// This is the only failure an [`Optional`] can produce. It is returned by
/// [`Optional::unwrap`] and [`Optional::expect`] (and their `_as`
/// counterparts) when the container holds nothing at the time of the call.
///
/// The error remembers where the extraction was attempted, so even the
/// default message points at the offending call site.
///
/// [`Optional`]: crate::Optional
/// [`Optional::unwrap`]: crate::Optional::unwrap
/// [`Optional::expect`]: crate::Optional::expect
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnwrapError {
    message: Cow<'static, str>,
    location: &'static Location<'static>,
}

impl UnwrapError {
    #[track_caller]
    pub(crate) fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            location: Location::caller(),
        }
    }

    #[track_caller]
    pub(crate) fn empty() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }

    /// The diagnostic message, without the location
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source location of the failed extraction
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}:{}:{}",
            self.message,
            self.location.file(),
            self.location.line(),
            self.location.column()
        )
    }
}

impl std::error::Error for UnwrapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_message() {
        let err = UnwrapError::empty();
        assert_eq!(err.message(), "Option is None value");
        assert_eq!(err.location().file(), file!());
    }

    #[test]
    fn display_includes_location() {
        let err = UnwrapError::new("no descriptor");
        let line = err.location().line();
        assert_eq!(
            err.to_string(),
            format!("no descriptor at {}:{}:{}", file!(), line, err.location().column())
        );
    }

    #[test]
    fn owned_message() {
        let name = String::from("config");
        let err = UnwrapError::new(format!("missing {name}"));
        assert_eq!(err.message(), "missing config");
    }
}
