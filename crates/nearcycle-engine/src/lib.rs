//! The Nearcycle matching pipeline.
//!
//! A proximity request flows through four stages:
//!
//! 1. **Validate** — [`MatchRequest::validate`] normalizes the requester
//!    email, parses the material filter, and resolves the range band into
//!    a radius in kilometres.
//! 2. **Plan** — [`RangePlan::for_origin`] picks the ladder level whose
//!    cell edge best fits the radius and converts the radius into a ring
//!    count, compensating for east–west projection compression at the
//!    origin's latitude.
//! 3. **Collect** — [`collect_candidates`] scans the disk of cells around
//!    the origin cell and unions the registry buckets it touches.
//! 4. **Rank** — [`rank_candidates`] resolves candidate records, drops
//!    anything beyond the true great-circle radius, and returns the
//!    closest matches in ascending distance order.
//!
//! [`MatchService`] owns the registry and directory and runs the whole
//! pipeline per request.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collect;
pub mod config;
pub mod error;
pub mod plan;
pub mod rank;
pub mod request;
pub mod service;

pub use collect::collect_candidates;
pub use config::{ConfigError, MatchConfig};
pub use error::MatchError;
pub use plan::RangePlan;
pub use rank::{rank_candidates, ProximityMatch};
pub use request::{MatchRequest, ValidRequest};
pub use service::{MatchResponse, MatchService};
