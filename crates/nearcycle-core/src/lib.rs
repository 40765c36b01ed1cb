//! Core types for the Nearcycle proximity matching engine.
//!
//! This is the leaf crate with zero dependencies. It defines the
//! fundamental vocabulary used throughout the Nearcycle workspace:
//! actor identifiers, validated geographic locations, and the closed
//! set of tradeable material types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod location;
pub mod material;

pub use error::{CoordError, MaterialParseError};
pub use id::ActorId;
pub use location::Location;
pub use material::{MaterialFilter, MaterialType};
