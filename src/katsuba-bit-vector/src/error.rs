use thiserror::Error;

/// Errors that may occur when working with [`BitVector`]s.
///
/// [`BitVector`]: crate::BitVector
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit was addressed past the end of the vector.
    #[error("bit index {index} out of range for vector of {size} bits")]
    IndexOutOfBounds { index: usize, size: usize },

    /// More bits were requested than the vector holds.
    #[error("cannot acquire {requested} bits from a vector of {available} bits")]
    InsufficientBits { requested: usize, available: usize },

    /// An argument violated the preconditions of an operation.
    #[error("illegal argument: {0}")]
    IllegalArgument(&'static str),

    /// A character in a textual bit representation was not a valid digit.
    #[error("invalid digit '{digit}' at position {index}")]
    InvalidDigit { digit: char, index: usize },
}

/// A [`Result`][std::result::Result] defaulting to [`Error`] on failure.
pub type Result<T, E = Error> = std::result::Result<T, E>;
