//! Sharded spatial registry and actor directory for Nearcycle.
//!
//! The registry is the only shared mutable structure in the matching
//! engine: a mapping from (material, cell) buckets to insertion-ordered
//! sets of buyer identifiers, partitioned across lock shards so readers
//! and writers touching unrelated buckets never contend. The directory
//! holds the full buyer/seller records the registry entries point at.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod directory;
pub mod registry;

pub use directory::{BuyerRecord, Directory, InMemoryDirectory, SellerRecord};
pub use registry::{Registry, ShardedRegistry};
