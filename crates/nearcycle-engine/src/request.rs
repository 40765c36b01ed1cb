//! Raw request validation.
//!
//! Requests arrive as strings straight off the wire. [`MatchRequest`]
//! holds them untouched; [`MatchRequest::validate`] is the single
//! checkpoint that turns them into typed values, so the rest of the
//! pipeline never sees unvalidated input.

use crate::config::MatchConfig;
use crate::error::MatchError;
use nearcycle_core::MaterialFilter;

/// A proximity request as received, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRequest {
    /// Login email identifying the requesting seller.
    pub requester_email: String,
    /// Material name, or `"any"`.
    pub material: String,
    /// Range band `"lo-hi km"`. Absent means the configured default
    /// radius.
    pub range: Option<String>,
}

/// A request that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidRequest {
    /// Trimmed requester email.
    pub email: String,
    /// Parsed material constraint.
    pub filter: MaterialFilter,
    /// Search radius, kilometres. Always positive and finite.
    pub radius_km: f64,
}

impl MatchRequest {
    /// Validate every field, resolving an absent range band to the
    /// configured default radius.
    pub fn validate(&self, config: &MatchConfig) -> Result<ValidRequest, MatchError> {
        let email = checked_email(&self.requester_email)?;
        let filter = MaterialFilter::parse(&self.material)?;
        let radius_km = match &self.range {
            Some(band) => range_band_radius(band)?,
            None => config.default_radius_km,
        };
        Ok(ValidRequest { email, filter, radius_km })
    }
}

/// Shape-check an email: one `@`, a non-empty local part, a domain with
/// an interior dot, no whitespace. Deliverability is the mail system's
/// problem, not ours.
fn checked_email(raw: &str) -> Result<String, MatchError> {
    let email = raw.trim();
    let reject = || MatchError::InvalidEmail { input: email.to_string() };
    if email.chars().any(char::is_whitespace) {
        return Err(reject());
    }
    let (local, domain) = email.split_once('@').ok_or_else(reject)?;
    if local.is_empty() || domain.contains('@') {
        return Err(reject());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(reject());
    }
    Ok(email.to_string())
}

/// Resolve a `"lo-hi km"` band to its upper bound in kilometres.
///
/// The upper bound is the search radius: a seller asking for buyers
/// "1-5 km" away accepts anything up to 5 km, including closer than
/// 1 km.
fn range_band_radius(raw: &str) -> Result<f64, MatchError> {
    let reject = || MatchError::InvalidRange { input: raw.to_string() };
    let body = raw.trim().to_ascii_lowercase();
    let body = body.strip_suffix("km").unwrap_or(&body).trim_end();
    let (lo, hi) = body.split_once('-').ok_or_else(reject)?;
    let lo: f64 = lo.trim().parse().map_err(|_| reject())?;
    let hi: f64 = hi.trim().parse().map_err(|_| reject())?;
    if !lo.is_finite() || !hi.is_finite() || lo < 0.0 || hi < lo {
        return Err(reject());
    }
    if hi <= 0.0 {
        return Err(MatchError::NonPositiveRadius { radius_km: hi });
    }
    Ok(hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearcycle_core::MaterialType;

    fn request(email: &str, material: &str, range: Option<&str>) -> MatchRequest {
        MatchRequest {
            requester_email: email.to_string(),
            material: material.to_string(),
            range: range.map(str::to_string),
        }
    }

    #[test]
    fn valid_request_passes_through() {
        let config = MatchConfig::default();
        let valid = request(" asha@example.com ", "Plastic", Some("1-5 km"))
            .validate(&config)
            .unwrap();
        assert_eq!(valid.email, "asha@example.com");
        assert_eq!(valid.filter, MaterialFilter::Only(MaterialType::Plastic));
        assert_eq!(valid.radius_km, 5.0);
    }

    #[test]
    fn absent_range_uses_the_default_radius() {
        let config = MatchConfig::default();
        let valid = request("a@b.io", "any", None).validate(&config).unwrap();
        assert_eq!(valid.filter, MaterialFilter::Any);
        assert_eq!(valid.radius_km, config.default_radius_km);
    }

    #[test]
    fn implausible_emails_are_rejected() {
        let config = MatchConfig::default();
        for bad in ["", "no-at-sign", "@example.com", "a@b", "a@.com", "a@b.", "a b@c.io", "a@b@c.io"] {
            match request(bad, "paper", None).validate(&config) {
                Err(MatchError::InvalidEmail { .. }) => {}
                other => panic!("expected InvalidEmail for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_material_is_rejected() {
        match request("a@b.io", "mud", None).validate(&MatchConfig::default()) {
            Err(MatchError::InvalidMaterial { input }) => assert_eq!(input, "mud"),
            other => panic!("expected InvalidMaterial, got {other:?}"),
        }
    }

    #[test]
    fn malformed_bands_are_rejected() {
        let config = MatchConfig::default();
        for bad in ["5 km", "five-six km", "5-1 km", "-1-5 km", "1..5 km"] {
            match request("a@b.io", "glass", Some(bad)).validate(&config) {
                Err(MatchError::InvalidRange { input }) => assert_eq!(input, bad),
                other => panic!("expected InvalidRange for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn zero_width_band_at_zero_is_not_a_radius() {
        match request("a@b.io", "glass", Some("0-0 km")).validate(&MatchConfig::default()) {
            Err(MatchError::NonPositiveRadius { radius_km }) => assert_eq!(radius_km, 0.0),
            other => panic!("expected NonPositiveRadius, got {other:?}"),
        }
    }

    #[test]
    fn band_suffix_is_optional_and_case_insensitive() {
        let config = MatchConfig::default();
        for band in ["10-20", "10-20 KM", "10-20km"] {
            let valid = request("a@b.io", "metal", Some(band)).validate(&config).unwrap();
            assert_eq!(valid.radius_km, 20.0, "band {band:?}");
        }
    }
}
