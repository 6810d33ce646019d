//! Captured exceptions.
//!
//! An [`Exception`] is what remains of a failure that escaped as a panic or
//! as a boxed `std::error::Error`: its rendered message, plus the original
//! error when there was one. It is never inspected structurally; two
//! exceptions are equal when their messages are.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

const UNKNOWN_PANIC: &str = "panic with a non-string payload";

/// An opaque captured failure.
///
/// Cloning is cheap: the original error is shared.
///
/// # Examples
///
/// ```rust
/// use cairn::control::Exception;
///
/// let io = std::io::Error::other("disk full");
/// let exception = Exception::from_error(io);
///
/// assert_eq!(exception.message(), "disk full");
/// assert_eq!(exception, Exception::new("disk full"));
/// assert!(std::error::Error::source(&exception).is_some());
/// ```
#[derive(Clone)]
pub struct Exception {
    message: String,
    source: Option<Arc<dyn StdError + Send + Sync + 'static>>,
}

impl Exception {
    /// Creates an exception from a message alone.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Captures an error, keeping it as the exception's source.
    pub fn from_error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: error.to_string(),
            source: Some(Arc::new(error)),
        }
    }

    /// Captures a panic payload.
    ///
    /// Payloads raised by `panic!` with a message are `&str` or `String`;
    /// anything else gets a generic message.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => payload
                .downcast_ref::<&str>()
                .map_or_else(|| UNKNOWN_PANIC.to_string(), |message| (*message).to_string()),
        };
        Self::new(message)
    }

    /// Returns the rendered message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl PartialEq for Exception {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for Exception {}

impl Hash for Exception {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
    }
}

impl fmt::Debug for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Exception")
            .field("message", &self.message)
            .field("has_source", &self.source.is_some())
            .finish()
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl StdError for Exception {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}
