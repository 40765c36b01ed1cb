//! Error types for core vocabulary validation.

use std::error::Error;
use std::fmt;

/// Errors from [`Location::new`](crate::Location::new).
///
/// A location is rejected before it can reach the spatial index; downstream
/// code never sees a coordinate outside the valid ranges.
#[derive(Clone, Debug, PartialEq)]
pub enum CoordError {
    /// Latitude outside `[-90, 90]`.
    LatitudeOutOfRange {
        /// The rejected value.
        value: f64,
    },
    /// Longitude outside `[-180, 180]`.
    LongitudeOutOfRange {
        /// The rejected value.
        value: f64,
    },
    /// NaN or infinite coordinate.
    NotFinite {
        /// Which axis carried the value: `"latitude"` or `"longitude"`.
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LatitudeOutOfRange { value } => {
                write!(f, "latitude {value} outside [-90, 90]")
            }
            Self::LongitudeOutOfRange { value } => {
                write!(f, "longitude {value} outside [-180, 180]")
            }
            Self::NotFinite { axis, value } => {
                write!(f, "{axis} must be finite, got {value}")
            }
        }
    }
}

impl Error for CoordError {}

/// Error from parsing a material type string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialParseError {
    /// The unrecognized input, after trimming.
    pub input: String,
}

impl fmt::Display for MaterialParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown material type '{}'", self.input)
    }
}

impl Error for MaterialParseError {}
