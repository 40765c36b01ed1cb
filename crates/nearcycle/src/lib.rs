//! Nearcycle: geographic proximity matching over a hierarchical hex grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Nearcycle sub-crates. For most users, adding `nearcycle` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use nearcycle::prelude::*;
//! use std::sync::Arc;
//!
//! // Register one seller household and one buyer organization.
//! let directory = InMemoryDirectory::new();
//! directory.upsert_seller(SellerRecord {
//!     id: ActorId(1),
//!     email: "asha@example.com".into(),
//!     address: Some(AddressProfile::new(Location::new(12.97, 77.59).unwrap())),
//! });
//! directory.upsert_buyer(BuyerRecord {
//!     id: ActorId(2),
//!     org_name: "PetCycle".into(),
//!     material: MaterialType::Plastic,
//!     address: AddressProfile::new(Location::new(12.99, 77.61).unwrap()),
//!     contact: "+91-80-5550".into(),
//!     location_url: "https://maps.example/petcycle".into(),
//! });
//!
//! // Start the service and ask for plastic buyers within 10 km.
//! let service = MatchService::start(MatchConfig::default(), Arc::new(directory)).unwrap();
//! let request = MatchRequest {
//!     requester_email: "asha@example.com".into(),
//!     material: "plastic".into(),
//!     range: Some("0-10 km".into()),
//! };
//! let response = service.find_buyers(&request).unwrap();
//! assert!(response.success);
//! assert_eq!(response.matches[0].org_name, "PetCycle");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `nearcycle-core` | IDs, locations, materials |
//! | [`hex`] | `nearcycle-hex` | The resolution ladder, cells, projection |
//! | [`registry`] | `nearcycle-registry` | Spatial index and actor directory |
//! | [`engine`] | `nearcycle-engine` | Planning, collection, ranking, service |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: identifiers, validated locations, materials
/// (`nearcycle-core`).
pub use nearcycle_core as types;

/// Hex grid: resolution ladder, cells, projection, address profiles
/// (`nearcycle-hex`).
pub use nearcycle_hex as hex;

/// Spatial registry and actor directory (`nearcycle-registry`).
pub use nearcycle_registry as registry;

/// The matching pipeline and service (`nearcycle-engine`).
pub use nearcycle_engine as engine;

/// The most commonly used types, importable in one line.
pub mod prelude {
    pub use nearcycle_core::{ActorId, Location, MaterialFilter, MaterialType};
    pub use nearcycle_engine::{
        MatchConfig, MatchError, MatchRequest, MatchResponse, MatchService, ProximityMatch,
    };
    pub use nearcycle_hex::{AddressProfile, HexCell, HexProfile, Resolution};
    pub use nearcycle_registry::{
        BuyerRecord, Directory, InMemoryDirectory, Registry, SellerRecord, ShardedRegistry,
    };
}
