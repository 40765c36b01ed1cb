//! Distance ranking and result shaping.

use nearcycle_core::{ActorId, Location, MaterialType};
use nearcycle_hex::haversine_km;
use nearcycle_registry::Directory;

/// One ranked match, ready for the response body.
#[derive(Clone, Debug, PartialEq)]
pub struct ProximityMatch {
    /// Buyer organization name.
    pub org_name: String,
    /// The material this buyer accepts.
    pub material: MaterialType,
    /// Great-circle distance from the requester, kilometres, rounded
    /// to two decimals.
    pub distance_km: f64,
    /// Contact details, verbatim from registration.
    pub contact: String,
    /// Map link for the buyer's location.
    pub location_url: String,
}

/// Resolve candidates, filter by true ground distance, and keep the
/// closest `max_results` in ascending distance order.
///
/// Candidates whose directory record has vanished are skipped with a
/// warning; one stale index entry must not fail the whole request. The
/// sort is stable, so equal distances keep collection order, and
/// distances are rounded only after sorting and truncation.
pub fn rank_candidates(
    origin: &Location,
    radius_km: f64,
    candidates: impl IntoIterator<Item = ActorId>,
    directory: &dyn Directory,
    max_results: usize,
) -> Vec<ProximityMatch> {
    let mut hits = Vec::new();
    for id in candidates {
        let Some(record) = directory.buyer(id) else {
            tracing::warn!(actor = %id, "indexed buyer has no directory record, skipping");
            continue;
        };
        let distance_km = haversine_km(origin, record.address.location());
        if distance_km <= radius_km {
            hits.push((distance_km, record));
        }
    }
    hits.sort_by(|a, b| a.0.total_cmp(&b.0));
    hits.truncate(max_results);
    hits.into_iter()
        .map(|(distance_km, record)| ProximityMatch {
            org_name: record.org_name,
            material: record.material,
            distance_km: (distance_km * 100.0).round() / 100.0,
            contact: record.contact,
            location_url: record.location_url,
        })
        .collect()
}
