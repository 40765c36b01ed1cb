//! Point-to-cell projection.
//!
//! Locations are projected onto a fixed equirectangular plane
//! (x = R·longitude, y = R·latitude, kilometres) and assigned to the
//! containing pointy-top hex via fractional axial coordinates and cube
//! rounding. Assignment is a pure function of the location and the
//! resolution: the same address always lands in the same cell.

use crate::cell::HexCell;
use crate::geo::EARTH_RADIUS_KM;
use crate::resolution::Resolution;
use nearcycle_core::Location;

/// Project a location onto the plane, kilometres.
fn plane_xy(location: &Location) -> (f64, f64) {
    let x = EARTH_RADIUS_KM * location.longitude().to_radians();
    let y = EARTH_RADIUS_KM * location.latitude().to_radians();
    (x, y)
}

/// Round fractional axial coordinates to the containing cell.
///
/// Standard cube rounding: round all three cube axes, then repair the one
/// with the largest rounding error so `q + r + s = 0` holds.
fn axial_round(qf: f64, rf: f64) -> (i32, i32) {
    let sf = -qf - rf;
    let mut q = qf.round();
    let mut r = rf.round();
    let s = sf.round();
    let dq = (q - qf).abs();
    let dr = (r - rf).abs();
    let ds = (s - sf).abs();
    if dq > dr && dq > ds {
        q = -r - s;
    } else if dr > ds {
        r = -q - s;
    }
    (q as i32, r as i32)
}

/// The cell containing `location` at `res`.
///
/// Deterministic and total: every valid location maps to exactly one cell
/// per resolution.
pub fn cell_containing(location: &Location, res: Resolution) -> HexCell {
    let (x, y) = plane_xy(location);
    let size = res.edge_km();
    let sqrt3 = 3.0_f64.sqrt();
    // Pointy-top pixel-to-hex transform.
    let qf = (sqrt3 / 3.0 * x - y / 3.0) / size;
    let rf = (2.0 / 3.0 * y) / size;
    let (q, r) = axial_round(qf, rf);
    HexCell::new(res, q, r)
}

/// The location of a cell's centre, if it falls inside valid coordinate
/// ranges.
///
/// Inverse of the projection used by [`cell_containing`]; intended for
/// diagnostics and tests. Cells projected from real addresses always have
/// in-range centres; synthetic extreme coordinates may not.
pub fn cell_center_location(cell: &HexCell) -> Option<Location> {
    let size = cell.resolution().edge_km();
    let sqrt3 = 3.0_f64.sqrt();
    let x = size * sqrt3 * (cell.q() as f64 + cell.r() as f64 / 2.0);
    let y = size * 1.5 * cell.r() as f64;
    let lat = (y / EARTH_RADIUS_KM).to_degrees();
    let lng = (x / EARTH_RADIUS_KM).to_degrees();
    Location::new(lat, lng).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn loc(lat: f64, lng: f64) -> Location {
        Location::new(lat, lng).unwrap()
    }

    #[test]
    fn assignment_is_deterministic() {
        let p = loc(12.97, 77.59);
        for res in Resolution::ALL {
            assert_eq!(cell_containing(&p, res), cell_containing(&p, res));
        }
    }

    #[test]
    fn cell_center_maps_back_to_its_cell() {
        let p = loc(12.97, 77.59);
        for res in Resolution::ALL {
            let cell = cell_containing(&p, res);
            let center = cell_center_location(&cell).unwrap();
            assert_eq!(cell_containing(&center, res), cell, "res {res}");
        }
    }

    #[test]
    fn distant_points_get_distinct_fine_cells() {
        // ~15 km apart: far beyond an R0 cell (0.5 km edge).
        let a = loc(12.97, 77.59);
        let b = loc(12.97, 77.73);
        assert_ne!(
            cell_containing(&a, Resolution::FINEST),
            cell_containing(&b, Resolution::FINEST)
        );
    }

    #[test]
    fn nearby_points_share_a_coarse_cell_or_adjacent() {
        // ~1.5 km apart: at R6 (75 km edge) they are in the same cell or,
        // at worst, straddle one boundary.
        let a = loc(12.97, 77.59);
        let b = loc(12.97, 77.604);
        let ca = cell_containing(&a, Resolution::COARSEST);
        let cb = cell_containing(&b, Resolution::COARSEST);
        assert!(ca.grid_distance(&cb).unwrap() <= 1);
    }

    proptest! {
        /// Two points at most one nominal edge apart on the plane land in
        /// cells at most two hex steps apart.
        #[test]
        fn close_points_land_in_close_cells(
            lat in -60.0f64..60.0,
            lng in -179.0f64..179.0,
            dx_frac in -1.0f64..1.0,
            dy_frac in -1.0f64..1.0,
        ) {
            let res = Resolution::new(3).unwrap();
            // Offsets expressed as fractions of one cell edge, converted
            // back to degrees on the equirectangular plane.
            let edge = res.edge_km();
            let dlat = (dy_frac * edge / EARTH_RADIUS_KM).to_degrees();
            let dlng = (dx_frac * edge / EARTH_RADIUS_KM).to_degrees();
            let a = loc(lat, lng);
            let b = loc(lat + dlat, lng + dlng);
            let ca = cell_containing(&a, res);
            let cb = cell_containing(&b, res);
            prop_assert!(ca.grid_distance(&cb).unwrap() <= 2);
        }
    }
}
