//! The closed set of tradeable material types.

use crate::error::MaterialParseError;
use std::fmt;
use std::str::FromStr;

/// A material category a buyer organization accepts.
///
/// The set is closed: registration rejects anything outside it, so the
/// registry can bucket by material without an open-ended key space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MaterialType {
    /// Plastic waste (PET, HDPE, mixed).
    Plastic,
    /// Paper and cardboard.
    Paper,
    /// Scrap metal.
    Metal,
    /// Glass.
    Glass,
    /// Electronic waste.
    EWaste,
    /// Organic / compostable waste.
    Organic,
}

impl MaterialType {
    /// All material types, in registry bucket order.
    pub const ALL: [MaterialType; 6] = [
        MaterialType::Plastic,
        MaterialType::Paper,
        MaterialType::Metal,
        MaterialType::Glass,
        MaterialType::EWaste,
        MaterialType::Organic,
    ];

    /// Canonical lowercase name, as stored by the surrounding service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plastic => "plastic",
            Self::Paper => "paper",
            Self::Metal => "metal",
            Self::Glass => "glass",
            Self::EWaste => "ewaste",
            Self::Organic => "organic",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialType {
    type Err = MaterialParseError;

    /// Parse a material name. Input is trimmed and matched
    /// case-insensitively; `"e-waste"` is accepted as an alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "plastic" => Ok(Self::Plastic),
            "paper" => Ok(Self::Paper),
            "metal" => Ok(Self::Metal),
            "glass" => Ok(Self::Glass),
            "ewaste" | "e-waste" => Ok(Self::EWaste),
            "organic" => Ok(Self::Organic),
            _ => Err(MaterialParseError { input: normalized }),
        }
    }
}

/// Material constraint on a proximity query.
///
/// Requests may ask for one specific material or for `"any"`, which matches
/// every buyer regardless of the material it accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialFilter {
    /// Match buyers accepting any material.
    Any,
    /// Match only buyers accepting this material.
    Only(MaterialType),
}

impl MaterialFilter {
    /// Parse a request-level material string: `"any"` (case-insensitive)
    /// or a [`MaterialType`] name.
    pub fn parse(s: &str) -> Result<Self, MaterialParseError> {
        if s.trim().eq_ignore_ascii_case("any") {
            return Ok(Self::Any);
        }
        s.parse().map(Self::Only)
    }

    /// Whether a buyer with the given material satisfies this filter.
    pub fn matches(&self, material: MaterialType) -> bool {
        match self {
            Self::Any => true,
            Self::Only(m) => *m == material,
        }
    }
}
