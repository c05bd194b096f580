//! The misuse taxonomy shared by every fallible container operation.

use core::fmt;

/// An error reported by a container operation.
///
/// Every variant describes a misuse of the container, detected before any
/// structural change: an operation that returns an error leaves the
/// container exactly as it found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The list was never given a comparator.
    ///
    /// Lists reach this state through [`Default`], or by being left behind
    /// by `core::mem::take`. Every operation on such a list is rejected
    /// until it is rebuilt through a constructor.
    Uninitialized,
    /// A removal or peek was attempted on a container with no elements.
    Empty,
    /// A positional operation named an index outside the valid range.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Uninitialized => f.write_str("list has no comparator configured"),
            Error::Empty => f.write_str("container is empty"),
            Error::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
