//! Radius → (resolution, ring count) planning.

use crate::config::MatchConfig;
use crate::error::MatchError;
use nearcycle_core::Location;
use nearcycle_hex::Resolution;

/// The geometry of one query: which ladder level to scan, and how far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangePlan {
    /// Ladder level whose cells the scan enumerates.
    pub resolution: Resolution,
    /// Disk radius around the origin cell, in hex steps.
    pub ring_count: u32,
}

impl RangePlan {
    /// Plan a scan for a radius measured on the projection plane.
    ///
    /// Walks the ladder coarsest-first and picks the first level whose
    /// cell edge fits inside the radius, so the disk stays small; a
    /// radius below even the finest edge falls back to the finest level.
    /// The ring count is `ceil(radius / edge) + 1` — the extra ring
    /// absorbs the origin sitting anywhere within its cell, so a target
    /// inside the radius can never land outside the disk.
    pub fn for_radius(radius_km: f64, max_ring_count: u32) -> Result<Self, MatchError> {
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(MatchError::NonPositiveRadius { radius_km });
        }
        let resolution = Resolution::coarse_to_fine()
            .find(|res| res.edge_km() <= radius_km)
            .unwrap_or(Resolution::FINEST);
        // Compared in f64 before narrowing so an absurd radius cannot
        // wrap the cast.
        let rings = (radius_km / resolution.edge_km()).ceil() + 1.0;
        if rings > f64::from(max_ring_count) {
            return Err(MatchError::QueryTooBroad {
                ring_count: rings as u32,
                max_ring_count,
            });
        }
        Ok(Self {
            resolution,
            ring_count: rings as u32,
        })
    }

    /// Plan a scan from a concrete origin.
    ///
    /// The projection stretches east–west ground distance by the secant
    /// of the latitude, so the ground radius is inflated by that factor
    /// (latitude clamped to the configured cap) before planning. The
    /// inflation only widens the scan; ranking still filters by true
    /// ground distance.
    pub fn for_origin(
        origin: &Location,
        radius_km: f64,
        config: &MatchConfig,
    ) -> Result<Self, MatchError> {
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(MatchError::NonPositiveRadius { radius_km });
        }
        let lat = origin
            .latitude()
            .abs()
            .min(config.max_compensated_latitude_deg);
        let inflated = radius_km / lat.to_radians().cos();
        Self::for_radius(inflated, config.max_ring_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(lat: f64, lng: f64) -> Location {
        Location::new(lat, lng).unwrap()
    }

    #[test]
    fn picks_the_coarsest_level_that_fits() {
        let plan = RangePlan::for_radius(5.0, 48).unwrap();
        assert_eq!(plan.resolution.edge_km(), 5.0);
        assert_eq!(plan.ring_count, 2);

        let plan = RangePlan::for_radius(3.0, 48).unwrap();
        assert_eq!(plan.resolution.edge_km(), 2.5);
        assert_eq!(plan.ring_count, 3);

        let plan = RangePlan::for_radius(2000.0, 48).unwrap();
        assert_eq!(plan.resolution, Resolution::COARSEST);
        assert_eq!(plan.ring_count, 28);
    }

    #[test]
    fn tiny_radius_falls_back_to_the_finest_level() {
        let plan = RangePlan::for_radius(0.4, 48).unwrap();
        assert_eq!(plan.resolution, Resolution::FINEST);
        assert_eq!(plan.ring_count, 2);
    }

    #[test]
    fn rejects_non_positive_and_non_finite_radii() {
        for radius in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            match RangePlan::for_radius(radius, 48) {
                Err(MatchError::NonPositiveRadius { .. }) => {}
                other => panic!("expected NonPositiveRadius for {radius}, got {other:?}"),
            }
        }
    }

    #[test]
    fn ring_cap_rejects_oversized_scans() {
        match RangePlan::for_radius(31.0, 2) {
            Err(MatchError::QueryTooBroad { ring_count, max_ring_count }) => {
                assert_eq!(ring_count, 3);
                assert_eq!(max_ring_count, 2);
            }
            other => panic!("expected QueryTooBroad, got {other:?}"),
        }
    }

    #[test]
    fn equator_needs_no_compensation() {
        let config = MatchConfig::default();
        let at_equator = RangePlan::for_origin(&loc(0.0, 12.0), 10.0, &config).unwrap();
        let plain = RangePlan::for_radius(10.0, config.max_ring_count).unwrap();
        assert_eq!(at_equator, plain);
    }

    #[test]
    fn high_latitude_widens_the_scan() {
        let config = MatchConfig::default();
        let equator = RangePlan::for_origin(&loc(0.0, 0.0), 10.0, &config).unwrap();
        let oslo = RangePlan::for_origin(&loc(60.0, 10.7), 10.0, &config).unwrap();
        // sec(60°) = 2: either a coarser level or more rings.
        assert!(
            oslo.resolution > equator.resolution
                || (oslo.resolution == equator.resolution
                    && oslo.ring_count > equator.ring_count)
        );
    }

    #[test]
    fn compensation_is_clamped_near_the_poles() {
        let config = MatchConfig::default();
        let at_cap = RangePlan::for_origin(&loc(80.0, 0.0), 10.0, &config).unwrap();
        let beyond_cap = RangePlan::for_origin(&loc(89.0, 0.0), 10.0, &config).unwrap();
        assert_eq!(at_cap, beyond_cap);
    }

    #[test]
    fn southern_latitudes_compensate_like_northern() {
        let config = MatchConfig::default();
        let north = RangePlan::for_origin(&loc(55.0, 3.0), 8.0, &config).unwrap();
        let south = RangePlan::for_origin(&loc(-55.0, 3.0), 8.0, &config).unwrap();
        assert_eq!(north, south);
    }
}
