//! The matching service: registry ownership plus the request pipeline.

use crate::collect::collect_candidates;
use crate::config::{ConfigError, MatchConfig};
use crate::error::MatchError;
use crate::plan::RangePlan;
use crate::rank::{rank_candidates, ProximityMatch};
use crate::request::MatchRequest;
use nearcycle_core::ActorId;
use nearcycle_registry::{BuyerRecord, Directory, Registry, ShardedRegistry};
use std::sync::Arc;

/// The response body for a proximity request that reached the pipeline.
///
/// An empty result is reported here rather than as a [`MatchError`]:
/// the request was well-formed and the search ran, there was simply
/// nobody in range.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResponse {
    /// Whether any matches were found.
    pub success: bool,
    /// Human-readable outcome summary.
    pub message: String,
    /// Ranked matches, closest first. Empty when `success` is false.
    pub matches: Vec<ProximityMatch>,
}

impl MatchResponse {
    /// HTTP-style status: `200` with matches, `405` without.
    ///
    /// `405` for an empty result is a wire-compatibility oddity the
    /// surrounding clients already depend on.
    pub fn status(&self) -> u16 {
        if self.success {
            200
        } else {
            405
        }
    }
}

/// Owns the spatial registry and runs proximity requests against it.
///
/// The registry is hydrated from the directory once at startup; buyer
/// mutations afterwards must go through [`MatchService::upsert_buyer`]
/// and [`MatchService::remove_buyer`] so the index and the records never
/// drift apart.
pub struct MatchService {
    config: MatchConfig,
    directory: Arc<dyn Directory>,
    registry: ShardedRegistry,
}

impl MatchService {
    /// Validate the configuration, build the registry, and index every
    /// buyer the directory already holds.
    pub fn start(config: MatchConfig, directory: Arc<dyn Directory>) -> Result<Self, ConfigError> {
        config.validate()?;
        let registry = ShardedRegistry::new(config.shard_count);
        let buyers = directory.buyers();
        for buyer in &buyers {
            registry.upsert(buyer.id, buyer.material, buyer.address.profile());
        }
        tracing::info!(buyers = buyers.len(), shards = config.shard_count, "registry hydrated");
        Ok(Self { config, directory, registry })
    }

    /// The configuration the service is running with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Register or re-register a buyer, updating record and index
    /// together. An address or material change re-buckets the buyer at
    /// every ladder level.
    pub fn upsert_buyer(&self, record: BuyerRecord) {
        self.registry
            .upsert(record.id, record.material, record.address.profile());
        self.directory.upsert_buyer(record);
    }

    /// Deregister a buyer from index and directory. Returns the removed
    /// record, if any.
    pub fn remove_buyer(&self, id: ActorId) -> Option<BuyerRecord> {
        self.registry.remove(id);
        self.directory.remove_buyer(id)
    }

    /// Run the full pipeline for one request.
    pub fn find_buyers(&self, request: &MatchRequest) -> Result<MatchResponse, MatchError> {
        let valid = request.validate(&self.config)?;
        let seller = self
            .directory
            .seller_by_email(&valid.email)
            .ok_or_else(|| MatchError::UnknownRequester { email: valid.email.clone() })?;
        let address = seller
            .address
            .ok_or_else(|| MatchError::NoRegisteredAddress { email: valid.email.clone() })?;

        let plan = RangePlan::for_origin(address.location(), valid.radius_km, &self.config)?;
        let origin_cell = address.profile().cell_at(plan.resolution);
        tracing::debug!(
            requester = %seller.id,
            radius_km = valid.radius_km,
            resolution = %plan.resolution,
            ring_count = plan.ring_count,
            "scanning"
        );

        let candidates = collect_candidates(&origin_cell, plan.ring_count, valid.filter, &self.registry);
        let matches = rank_candidates(
            address.location(),
            valid.radius_km,
            candidates,
            self.directory.as_ref(),
            self.config.max_results,
        );

        if matches.is_empty() {
            return Ok(MatchResponse {
                success: false,
                message: "no buyers matched within the requested range".to_string(),
                matches,
            });
        }
        Ok(MatchResponse {
            success: true,
            message: format!("{} buyer(s) found", matches.len()),
            matches,
        })
    }

    /// [`MatchService::find_buyers`] flattened into a status and body,
    /// the shape an HTTP handler returns directly.
    pub fn handle(&self, request: &MatchRequest) -> (u16, MatchResponse) {
        match self.find_buyers(request) {
            Ok(response) => (response.status(), response),
            Err(err) => (
                err.status(),
                MatchResponse {
                    success: false,
                    message: err.to_string(),
                    matches: Vec::new(),
                },
            ),
        }
    }
}
