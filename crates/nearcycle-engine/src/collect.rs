//! Candidate collection over the scan disk.

use indexmap::IndexSet;
use nearcycle_core::{ActorId, MaterialFilter, MaterialType};
use nearcycle_hex::HexCell;
use nearcycle_registry::Registry;

/// Union the registry buckets across the disk around `origin`.
///
/// Enumeration order is deterministic: cells in disk order, actors in
/// bucket insertion order, first sighting wins. The set is a superset of
/// the true result — the disk over-covers by construction — and ranking
/// prunes it by ground distance.
pub fn collect_candidates(
    origin: &HexCell,
    ring_count: u32,
    filter: MaterialFilter,
    registry: &dyn Registry,
) -> IndexSet<ActorId> {
    let mut candidates = IndexSet::new();
    for cell in origin.disk(ring_count) {
        match filter {
            MaterialFilter::Only(material) => {
                candidates.extend(registry.lookup(material, &cell));
            }
            MaterialFilter::Any => {
                for material in MaterialType::ALL {
                    candidates.extend(registry.lookup(material, &cell));
                }
            }
        }
    }
    candidates
}
