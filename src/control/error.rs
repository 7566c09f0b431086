//! The uniform failure payload used at panic and rejection boundaries.
//!
//! [`Error`] is what `try_catch_error` style adapters put on the `Left` side.
//! Whatever went wrong (a panic with a string payload, a panic with an
//! arbitrary payload, an `Err` returned by a fallible future) is coerced into
//! this one shape, so code downstream of the boundary only ever handles a
//! message plus an optional cause.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

const UNKNOWN_PANIC_MESSAGE: &str = "unknown panic";

/// A failure with a human-readable message and an optional underlying cause.
///
/// # Examples
///
/// ```rust
/// use railway::control::Error;
/// use std::error::Error as _;
///
/// let parse_failure = "abc".parse::<i32>().unwrap_err();
/// let error = Error::with_cause("invalid age", parse_failure);
///
/// assert_eq!(error.to_string(), "invalid age");
/// assert!(error.source().is_some());
/// ```
#[derive(Clone, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl Error {
    /// Creates an error that carries only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates an error with a message and the error that caused it.
    pub fn with_cause<C>(message: impl Into<String>, cause: C) -> Self
    where
        C: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// Wraps an arbitrary error, reusing its `Display` output as the message.
    ///
    /// ```rust
    /// use railway::control::Error;
    ///
    /// let error = Error::wrap(std::io::Error::other("disk on fire"));
    /// assert_eq!(error.message(), "disk on fire");
    /// ```
    pub fn wrap<C>(cause: C) -> Self
    where
        C: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: cause.to_string(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// Coerces a panic payload into an `Error`.
    ///
    /// `&str` and `String` payloads become the message, an `Error` raised with
    /// [`std::panic::panic_any`] is kept as is, and anything else becomes
    /// `"unknown panic"`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let error = match payload.downcast::<Self>() {
            Ok(error) => *error,
            Err(payload) => match payload.downcast::<String>() {
                Ok(message) => Self::new(*message),
                Err(payload) => payload.downcast_ref::<&'static str>().map_or_else(
                    || Self::new(UNKNOWN_PANIC_MESSAGE),
                    |message| Self::new(*message),
                ),
            },
        };
        tracing::debug!(failure = %error.message, "captured panic as failure");
        error
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the underlying cause, if one was recorded.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("Error");
        debug.field("message", &self.message);
        if let Some(cause) = &self.cause {
            debug.field("cause", &cause.to_string());
        }
        debug.finish()
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.cause.as_ref().map(ToString::to_string)
                == other.cause.as_ref().map(ToString::to_string)
    }
}

impl Eq for Error {}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync + 'static>> for Error {
    fn from(cause: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        Self {
            message: cause.to_string(),
            cause: Some(Arc::from(cause)),
        }
    }
}
