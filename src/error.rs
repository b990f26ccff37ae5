//! Error types.

use core::fmt;

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced by the arithmetic and primality kernel.
///
/// All of these are unrecoverable from the caller's point of view; the
/// prime searcher is the only component that swallows one (it logs the
/// failure and moves on to the next candidate).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A caller-facing precondition was violated: division by zero, an even
    /// modulus passed to Montgomery exponentiation, a modular inverse that
    /// does not exist, or a shift amount beyond a single limb width.
    InvalidArgument(&'static str),

    /// An internal arithmetic invariant failed. This signals a bug in the
    /// kernel itself rather than in the caller.
    InvariantViolation(&'static str),

    /// Malformed hex input.
    ParseError(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::InvariantViolation(msg) => write!(f, "arithmetic invariant violated: {msg}"),
            Self::ParseError(msg) => write!(f, "malformed hex input: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
