//! Validated geographic coordinates.

use crate::error::CoordError;
use std::fmt;

/// A validated (latitude, longitude) pair in degrees.
///
/// Construction is the only validation gate: a `Location` that exists is
/// always in range and finite. Locations are immutable — an address edit
/// replaces the whole value, it never patches one axis.
///
/// # Examples
///
/// ```
/// use nearcycle_core::Location;
///
/// let blr = Location::new(12.97, 77.59).unwrap();
/// assert_eq!(blr.latitude(), 12.97);
/// assert!(Location::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    lat: f64,
    lng: f64,
}

impl Location {
    /// Validate and construct a location.
    ///
    /// Returns `Err(CoordError::NotFinite)` for NaN/infinite input,
    /// `Err(CoordError::LatitudeOutOfRange)` for latitude outside
    /// `[-90, 90]`, and `Err(CoordError::LongitudeOutOfRange)` for
    /// longitude outside `[-180, 180]`.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordError> {
        if !lat.is_finite() {
            return Err(CoordError::NotFinite {
                axis: "latitude",
                value: lat,
            });
        }
        if !lng.is_finite() {
            return Err(CoordError::NotFinite {
                axis: "longitude",
                value: lng,
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordError::LatitudeOutOfRange { value: lat });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoordError::LongitudeOutOfRange { value: lng });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees, `[-90, 90]`.
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees, `[-180, 180]`.
    pub fn longitude(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_coordinates() {
        let loc = Location::new(12.97, 77.59).unwrap();
        assert_eq!(loc.latitude(), 12.97);
        assert_eq!(loc.longitude(), 77.59);
    }

    #[test]
    fn accepts_range_boundaries() {
        assert!(Location::new(90.0, 180.0).is_ok());
        assert!(Location::new(-90.0, -180.0).is_ok());
        assert!(Location::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_latitude_out_of_range() {
        match Location::new(90.01, 0.0) {
            Err(CoordError::LatitudeOutOfRange { value }) => assert_eq!(value, 90.01),
            other => panic!("expected LatitudeOutOfRange, got {other:?}"),
        }
        assert!(Location::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn rejects_longitude_out_of_range() {
        match Location::new(0.0, -180.5) {
            Err(CoordError::LongitudeOutOfRange { value }) => assert_eq!(value, -180.5),
            other => panic!("expected LongitudeOutOfRange, got {other:?}"),
        }
        assert!(Location::new(0.0, 181.0).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        match Location::new(f64::NAN, 0.0) {
            Err(CoordError::NotFinite { axis, .. }) => assert_eq!(axis, "latitude"),
            other => panic!("expected NotFinite, got {other:?}"),
        }
        match Location::new(0.0, f64::INFINITY) {
            Err(CoordError::NotFinite { axis, .. }) => assert_eq!(axis, "longitude"),
            other => panic!("expected NotFinite, got {other:?}"),
        }
    }
}
