//! Strongly-typed actor identifiers.

use std::fmt;

/// Identifies a registered actor (seller household or buyer organization).
///
/// Identifiers are assigned by the surrounding account system; the matching
/// engine treats them as opaque. Sellers and buyers share one ID space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ActorId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
