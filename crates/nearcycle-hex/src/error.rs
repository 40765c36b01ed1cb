//! Error types for the hex grid.

use std::error::Error;
use std::fmt;

/// Errors from hex grid construction and parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HexError {
    /// Resolution level outside the fixed ladder `0..=6`.
    InvalidResolution {
        /// The rejected level.
        level: u8,
    },
    /// A cell identifier string did not match `"R{level}:{q}:{r}"`.
    InvalidCellId {
        /// The rejected input.
        input: String,
    },
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolution { level } => {
                write!(f, "resolution level {level} outside ladder 0..=6")
            }
            Self::InvalidCellId { input } => {
                write!(f, "malformed cell identifier '{input}'")
            }
        }
    }
}

impl Error for HexError {}
