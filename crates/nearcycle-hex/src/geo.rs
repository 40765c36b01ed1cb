//! Great-circle distance.

use nearcycle_core::Location;

/// Mean Earth radius, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two locations via the haversine formula,
/// kilometres.
///
/// This is the exact-distance step of the pipeline: ring enumeration
/// over-covers a circle, and every candidate is re-checked against this
/// value before it can appear in a result.
pub fn haversine_km(a: &Location, b: &Location) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let dlat = lat2 - lat1;
    let dlng = (b.longitude() - a.longitude()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    // Clamp before asin: floating error can push h a hair above 1 for
    // near-antipodal pairs.
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn loc(lat: f64, lng: f64) -> Location {
        Location::new(lat, lng).unwrap()
    }

    const ONE_DEGREE_KM: f64 = 2.0 * std::f64::consts::PI * EARTH_RADIUS_KM / 360.0;

    #[test]
    fn zero_distance_for_same_point() {
        let p = loc(12.97, 77.59);
        assert_eq!(haversine_km(&p, &p), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let d = haversine_km(&loc(0.0, 0.0), &loc(0.0, 1.0));
        assert!((d - ONE_DEGREE_KM).abs() < 0.01, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude_anywhere() {
        let d = haversine_km(&loc(45.0, 10.0), &loc(46.0, 10.0));
        assert!((d - ONE_DEGREE_KM).abs() < 0.01, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_the_circumference() {
        let d = haversine_km(&loc(0.0, 0.0), &loc(0.0, 180.0));
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half).abs() < 0.01, "got {d}");
    }

    proptest! {
        #[test]
        fn symmetric_and_nonnegative(
            lat1 in -89.0f64..89.0, lng1 in -179.0f64..179.0,
            lat2 in -89.0f64..89.0, lng2 in -179.0f64..179.0,
        ) {
            let a = loc(lat1, lng1);
            let b = loc(lat2, lng2);
            let ab = haversine_km(&a, &b);
            let ba = haversine_km(&b, &a);
            prop_assert!(ab >= 0.0);
            prop_assert!((ab - ba).abs() < 1e-9);
        }
    }
}
