//! Shared test fixtures for the Nearcycle workspace.

#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{buyer_at, destination, directory_with, seller_at, seller_without_address};
