//! The fixed resolution ladder.

use crate::error::HexError;
use std::fmt;

/// One level of the indexing ladder, `R0` (finest) through `R6` (coarsest).
///
/// Each level carries a nominal cell edge length in kilometres. The ladder
/// is fixed: every address profile holds exactly one cell per level, and
/// the query planner selects a level by comparing edge lengths against the
/// requested radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Resolution(u8);

/// Nominal hex edge length (= circumradius) per level, kilometres,
/// finest to coarsest.
const EDGE_KM: [f64; Resolution::COUNT] = [0.5, 1.0, 2.5, 5.0, 12.0, 30.0, 75.0];

impl Resolution {
    /// Number of levels in the ladder.
    pub const COUNT: usize = 7;

    /// The finest level (smallest cells).
    pub const FINEST: Resolution = Resolution(0);

    /// The coarsest level (largest cells).
    pub const COARSEST: Resolution = Resolution(6);

    /// All levels, finest to coarsest.
    pub const ALL: [Resolution; Resolution::COUNT] = [
        Resolution(0),
        Resolution(1),
        Resolution(2),
        Resolution(3),
        Resolution(4),
        Resolution(5),
        Resolution(6),
    ];

    /// Construct from a ladder level.
    ///
    /// Returns `Err(HexError::InvalidResolution)` for levels outside `0..=6`.
    pub fn new(level: u8) -> Result<Self, HexError> {
        if (level as usize) < Self::COUNT {
            Ok(Self(level))
        } else {
            Err(HexError::InvalidResolution { level })
        }
    }

    /// Ladder level, `0` = finest.
    pub fn level(self) -> u8 {
        self.0
    }

    /// Nominal cell edge length at this level, kilometres.
    pub fn edge_km(self) -> f64 {
        EDGE_KM[self.0 as usize]
    }

    /// Iterate the ladder coarsest-first (the planner's walk order).
    pub fn coarse_to_fine() -> impl Iterator<Item = Resolution> {
        Self::ALL.iter().rev().copied()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
