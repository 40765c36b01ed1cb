//! The request error taxonomy.

use nearcycle_core::MaterialParseError;
use std::fmt;

/// Everything a proximity request can fail with.
///
/// Validation failures are the caller's fault and map to `400`; a
/// well-formed request about an actor the service does not know maps
/// to `404`. An empty result set is not an error — the service reports
/// it through [`crate::MatchResponse`].
#[derive(Clone, Debug, PartialEq)]
pub enum MatchError {
    /// The requester email is not a plausible address.
    InvalidEmail {
        /// The rejected input, trimmed.
        input: String,
    },
    /// The material named neither a known material nor `"any"`.
    InvalidMaterial {
        /// The rejected input, normalized.
        input: String,
    },
    /// The range string did not parse as a `"lo-hi km"` band.
    InvalidRange {
        /// The rejected input.
        input: String,
    },
    /// The search radius resolved to zero or below.
    NonPositiveRadius {
        /// The rejected radius.
        radius_km: f64,
    },
    /// The planned scan would cover more rings than the configured cap.
    QueryTooBroad {
        /// Rings the request would need.
        ring_count: u32,
        /// The configured cap.
        max_ring_count: u32,
    },
    /// No seller is registered under the requester email.
    UnknownRequester {
        /// The email the lookup used.
        email: String,
    },
    /// The requester exists but has no registered address to search from.
    NoRegisteredAddress {
        /// The requester's email.
        email: String,
    },
}

impl MatchError {
    /// HTTP-style status for the error: `400` for malformed input,
    /// `404` for a missing requester or address.
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidEmail { .. }
            | Self::InvalidMaterial { .. }
            | Self::InvalidRange { .. }
            | Self::NonPositiveRadius { .. }
            | Self::QueryTooBroad { .. } => 400,
            Self::UnknownRequester { .. } | Self::NoRegisteredAddress { .. } => 404,
        }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail { input } => write!(f, "invalid requester email: {input:?}"),
            Self::InvalidMaterial { input } => {
                write!(f, "unknown material: {input:?} (or \"any\")")
            }
            Self::InvalidRange { input } => {
                write!(f, "invalid range: {input:?}, expected \"lo-hi km\"")
            }
            Self::NonPositiveRadius { radius_km } => {
                write!(f, "search radius must be positive, got {radius_km} km")
            }
            Self::QueryTooBroad { ring_count, max_ring_count } => write!(
                f,
                "query needs {ring_count} rings, more than the {max_ring_count} allowed"
            ),
            Self::UnknownRequester { email } => {
                write!(f, "no seller registered as {email}")
            }
            Self::NoRegisteredAddress { email } => {
                write!(f, "seller {email} has no registered address")
            }
        }
    }
}

impl std::error::Error for MatchError {}

impl From<MaterialParseError> for MatchError {
    fn from(err: MaterialParseError) -> Self {
        Self::InvalidMaterial { input: err.input }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        assert_eq!(MatchError::InvalidEmail { input: "x".into() }.status(), 400);
        assert_eq!(
            MatchError::QueryTooBroad { ring_count: 99, max_ring_count: 48 }.status(),
            400
        );
    }

    #[test]
    fn missing_actors_are_not_found() {
        assert_eq!(
            MatchError::UnknownRequester { email: "a@b.io".into() }.status(),
            404
        );
        assert_eq!(
            MatchError::NoRegisteredAddress { email: "a@b.io".into() }.status(),
            404
        );
    }

    #[test]
    fn material_parse_failures_convert() {
        let err = "mud".parse::<nearcycle_core::MaterialType>().unwrap_err();
        match MatchError::from(err) {
            MatchError::InvalidMaterial { input } => assert_eq!(input, "mud"),
            other => panic!("expected InvalidMaterial, got {other:?}"),
        }
    }
}
