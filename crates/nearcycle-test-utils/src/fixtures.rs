//! Geodesy helpers and canned actor records.
//!
//! Tests describe scenarios in terms of true ground distances
//! ("a buyer 4.9 km north-east of the origin"); [`destination`] turns
//! those into coordinates so assertions can compare against the same
//! distances the ranker computes.

use nearcycle_core::{ActorId, Location, MaterialType};
use nearcycle_hex::{AddressProfile, EARTH_RADIUS_KM};
use nearcycle_registry::{BuyerRecord, InMemoryDirectory, SellerRecord};

/// The point `distance_km` from `origin` along `bearing_deg`
/// (0° = north, 90° = east), on the 6371 km sphere.
pub fn destination(origin: &Location, bearing_deg: f64, distance_km: f64) -> Location {
    let lat1 = origin.latitude().to_radians();
    let lng1 = origin.longitude().to_radians();
    let bearing = bearing_deg.to_radians();
    let delta = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos()).asin();
    let lng2 = lng1
        + (bearing.sin() * delta.sin() * lat1.cos())
            .atan2(delta.cos() - lat1.sin() * lat2.sin());

    let lat_deg = lat2.to_degrees();
    let mut lng_deg = lng2.to_degrees();
    if lng_deg > 180.0 {
        lng_deg -= 360.0;
    } else if lng_deg < -180.0 {
        lng_deg += 360.0;
    }
    Location::new(lat_deg, lng_deg).expect("destination outside coordinate ranges")
}

/// A buyer record at a location.
pub fn buyer_at(id: u64, org_name: &str, material: MaterialType, location: Location) -> BuyerRecord {
    BuyerRecord {
        id: ActorId(id),
        org_name: org_name.to_string(),
        material,
        address: AddressProfile::new(location),
        contact: format!("+91-00-{id:04}"),
        location_url: format!("https://maps.example/org/{id}"),
    }
}

/// A seller record with a registered address.
pub fn seller_at(id: u64, email: &str, location: Location) -> SellerRecord {
    SellerRecord {
        id: ActorId(id),
        email: email.to_string(),
        address: Some(AddressProfile::new(location)),
    }
}

/// A seller who registered but never completed address capture.
pub fn seller_without_address(id: u64, email: &str) -> SellerRecord {
    SellerRecord {
        id: ActorId(id),
        email: email.to_string(),
        address: None,
    }
}

/// A directory pre-populated with the given records.
pub fn directory_with(
    sellers: Vec<SellerRecord>,
    buyers: Vec<BuyerRecord>,
) -> InMemoryDirectory {
    use nearcycle_registry::Directory;
    let dir = InMemoryDirectory::new();
    for s in sellers {
        dir.upsert_seller(s);
    }
    for b in buyers {
        dir.upsert_buyer(b);
    }
    dir
}
