//! Hierarchical hexagonal grid indexing for Nearcycle.
//!
//! This crate maps validated geographic locations onto a ladder of
//! pointy-top hexagonal lattices, one per [`Resolution`], from fine
//! (sub-kilometre cells) to coarse (tens of kilometres). Every cell has
//! exactly six geometric neighbours; ring and disk enumeration around a
//! cell is the geometric core of the proximity search.
//!
//! # Tiling
//!
//! Cells live on a fixed equirectangular projection of the sphere
//! (x = R·longitude, y = R·latitude, in kilometres). The projection keeps
//! cell assignment a pure function of the location and gives a uniform
//! 6-neighbour topology, at the cost of east–west compression by
//! cos(latitude); query planning compensates for that compression when it
//! converts a radius into a ring count.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod geo;
pub mod profile;
pub mod project;
pub mod resolution;

pub use cell::HexCell;
pub use error::HexError;
pub use geo::{haversine_km, EARTH_RADIUS_KM};
pub use profile::{AddressProfile, HexProfile};
pub use project::{cell_center_location, cell_containing};
pub use resolution::Resolution;
