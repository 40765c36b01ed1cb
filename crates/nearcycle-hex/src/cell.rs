//! Hex cells in axial coordinates, with neighbour and ring enumeration.

use crate::error::HexError;
use crate::resolution::Resolution;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Pointy-top hex offsets in axial `(dq, dr)` order: E, NE, NW, W, SW, SE.
const HEX_OFFSETS: [(i32, i32); 6] = [
    (1, 0),  // E
    (1, -1), // NE
    (0, -1), // NW
    (-1, 0), // W
    (-1, 1), // SW
    (0, 1),  // SE
];

/// One cell of the hex tiling at a specific [`Resolution`].
///
/// Cells use axial coordinates `(q, r)` on a pointy-top lattice. The grid
/// is unbounded in both axes (the projection bounds usable coordinates in
/// practice); every cell has exactly six neighbours.
///
/// Grid distance is cube distance, `max(|dq|, |dr|, |dq + dr|)`, which
/// equals the graph geodesic: the number of hex steps between two cells.
///
/// The string form is `"R{level}:{q}:{r}"`, e.g. `"R3:204:-156"`, and
/// round-trips through [`FromStr`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexCell {
    res: Resolution,
    q: i32,
    r: i32,
}

impl HexCell {
    /// Construct a cell from axial coordinates at a resolution.
    pub fn new(res: Resolution, q: i32, r: i32) -> Self {
        Self { res, q, r }
    }

    /// The cell's resolution level.
    pub fn resolution(&self) -> Resolution {
        self.res
    }

    /// Axial q coordinate.
    pub fn q(&self) -> i32 {
        self.q
    }

    /// Axial r coordinate.
    pub fn r(&self) -> i32 {
        self.r
    }

    /// The six adjacent cells, in E, NE, NW, W, SW, SE order.
    pub fn neighbours(&self) -> SmallVec<[HexCell; 6]> {
        HEX_OFFSETS
            .iter()
            .map(|(dq, dr)| HexCell::new(self.res, self.q + dq, self.r + dr))
            .collect()
    }

    /// Hex steps between two cells at the same resolution.
    ///
    /// Returns `None` when the resolutions differ — cells of different
    /// ladder levels have no common lattice.
    pub fn grid_distance(&self, other: &HexCell) -> Option<u32> {
        if self.res != other.res {
            return None;
        }
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = ((self.q + self.r) - (other.q + other.r)).abs();
        Some(dq.max(dr).max(ds) as u32)
    }

    /// All cells within `k` hex steps, the origin included.
    ///
    /// A disk of radius `k` holds `3k(k+1) + 1` cells. Enumeration order
    /// is deterministic (q-major over the axial range).
    pub fn disk(&self, k: u32) -> Vec<HexCell> {
        let k = k as i32;
        let mut cells = Vec::with_capacity((3 * k * (k + 1) + 1) as usize);
        for dq in -k..=k {
            let lo = (-k).max(-dq - k);
            let hi = k.min(-dq + k);
            for dr in lo..=hi {
                cells.push(HexCell::new(self.res, self.q + dq, self.r + dr));
            }
        }
        cells
    }

    /// The cells exactly `k` hex steps away.
    ///
    /// `k = 0` is the cell itself; otherwise a ring holds `6k` cells.
    pub fn ring(&self, k: u32) -> Vec<HexCell> {
        self.disk(k)
            .into_iter()
            .filter(|c| self.grid_distance(c) == Some(k))
            .collect()
    }
}

impl fmt::Display for HexCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.res, self.q, self.r)
    }
}

impl FromStr for HexCell {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || HexError::InvalidCellId {
            input: s.to_string(),
        };
        let rest = s.strip_prefix('R').ok_or_else(malformed)?;
        let mut parts = rest.splitn(3, ':');
        let level: u8 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(malformed)?;
        let q: i32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(malformed)?;
        let r: i32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(malformed)?;
        let res = Resolution::new(level).map_err(|_| malformed())?;
        Ok(HexCell::new(res, q, r))
    }
}
