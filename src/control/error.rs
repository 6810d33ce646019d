//! Error values used by the containers.
//!
//! Two kinds of error live here:
//!
//! - [`Error`]: the default structured failure carried by
//!   [`Outcome<T>`](super::Outcome) and [`Fault`](super::Fault). It is plain
//!   data: an immutable message.
//! - [`ContractError`]: a programmer error, raised only by the escape hatches
//!   (`get_or_die`) or returned by their checked forms (`try_get`,
//!   `Maybe::try_some`).

use std::fmt;

use thiserror::Error as ThisError;

/// A structured, application-level error: an immutable message.
///
/// This is the error type of [`Outcome<T>`](super::Outcome) when no other
/// error type is named.
///
/// # Examples
///
/// ```rust
/// use cairn::control::Error;
///
/// let error = Error::new("Boom!");
/// assert_eq!(error.message(), "Boom!");
/// assert_eq!(error, Error::from("Boom!"));
/// assert_eq!(error.to_string(), "Boom!");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Error {
    message: String,
}

impl Error {
    /// Creates an error from its message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message describing the error.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl From<&str> for Error {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// A violated caller contract.
///
/// These are programmer errors, never domain failures: building a present
/// value from an absent one, or forcing a value out of a container that does
/// not hold one.
#[derive(Clone, PartialEq, Eq, Hash, Debug, ThisError)]
pub enum ContractError {
    /// An argument that must be present was absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value was forced out of a container that does not hold one.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Logs a contract violation and panics with it.
#[cold]
#[track_caller]
pub(crate) fn die(violation: ContractError) -> ! {
    tracing::error!(%violation, "contract violation");
    panic!("{violation}")
}
