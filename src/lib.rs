#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

use alloc::string::String;
use core::fmt;

mod context;
pub use context::{ContainerKind, TraversalContext};
mod index;
mod pointer;
pub use pointer::Pointer;
pub mod token;
pub use token::Tokens;

#[cfg(test)]
mod arbitrary;

/// Indicates that a pointer expression was malformed and unable to be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The expression was non-empty and did not start with a slash (`'/'`).
    ///
    /// Carries the offending expression.
    NoLeadingSlash(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLeadingSlash(_) => {
                write!(
                    f,
                    "json pointer is malformed as it does not start with a slash ('/')"
                )
            }
        }
    }
}

impl ParseError {
    /// The expression which failed to parse.
    ///
    /// ```
    /// # use chainptr::Pointer;
    /// let err = Pointer::parse("foo/bar").unwrap_err();
    /// assert_eq!(err.expression(), "foo/bar");
    /// ```
    pub fn expression(&self) -> &str {
        match self {
            Self::NoLeadingSlash(expr) => expr,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
