//! Per-address resolution ladders.

use crate::cell::HexCell;
use crate::project::cell_containing;
use crate::resolution::Resolution;
use nearcycle_core::Location;

/// One cell per ladder level for a single location.
///
/// A profile is complete by construction — `[HexCell; 7]` cannot hold a
/// partial ladder — so a registered profile always satisfies the
/// one-cell-per-level invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexProfile {
    cells: [HexCell; Resolution::COUNT],
}

impl HexProfile {
    /// Index a location at every ladder level.
    ///
    /// Deterministic and total for any valid [`Location`].
    pub fn of(location: &Location) -> Self {
        let cells =
            std::array::from_fn(|i| cell_containing(location, Resolution::ALL[i]));
        Self { cells }
    }

    /// The cell at one ladder level.
    pub fn cell_at(&self, res: Resolution) -> HexCell {
        self.cells[res.level() as usize]
    }

    /// All cells, finest to coarsest.
    pub fn cells(&self) -> impl Iterator<Item = HexCell> + '_ {
        self.cells.iter().copied()
    }
}

/// An actor's registered address: raw coordinates plus the derived ladder.
///
/// Recomputed wholesale whenever the address changes; the location and its
/// profile can never drift apart because the only constructor derives one
/// from the other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AddressProfile {
    location: Location,
    profile: HexProfile,
}

impl AddressProfile {
    /// Build the profile for a validated location.
    pub fn new(location: Location) -> Self {
        Self {
            location,
            profile: HexProfile::of(&location),
        }
    }

    /// The raw coordinates.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The derived resolution ladder.
    pub fn profile(&self) -> &HexProfile {
        &self.profile
    }
}
