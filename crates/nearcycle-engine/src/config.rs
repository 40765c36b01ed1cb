//! Engine configuration.

use std::fmt;

/// Tunables for the matching pipeline.
///
/// Validated once at [`crate::MatchService::start`]; a running service
/// never sees an invalid configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchConfig {
    /// Maximum matches returned per request.
    pub max_results: usize,
    /// Upper bound on the planned disk radius, in rings. Requests whose
    /// radius would scan more rings than this are rejected rather than
    /// allowed to enumerate an enormous disk.
    pub max_ring_count: u32,
    /// Registry lock shard count.
    pub shard_count: usize,
    /// Latitude (degrees, absolute) beyond which projection compensation
    /// stops growing. The secant of the latitude diverges toward the
    /// poles; clamping keeps ring counts bounded for polar addresses.
    pub max_compensated_latitude_deg: f64,
    /// Search radius, kilometres, applied when a request carries no
    /// range band.
    pub default_radius_km: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            max_ring_count: 48,
            shard_count: 64,
            max_compensated_latitude_deg: 80.0,
            default_radius_km: 2000.0,
        }
    }
}

impl MatchConfig {
    /// Check every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_results == 0 {
            return Err(ConfigError::MaxResultsZero);
        }
        if self.max_ring_count == 0 {
            return Err(ConfigError::MaxRingCountZero);
        }
        if self.shard_count == 0 {
            return Err(ConfigError::ShardCountZero);
        }
        if !self.max_compensated_latitude_deg.is_finite()
            || !(0.0..90.0).contains(&self.max_compensated_latitude_deg)
        {
            return Err(ConfigError::LatitudeCapOutOfRange {
                value: self.max_compensated_latitude_deg,
            });
        }
        if !self.default_radius_km.is_finite() || self.default_radius_km <= 0.0 {
            return Err(ConfigError::DefaultRadiusNotPositive {
                radius_km: self.default_radius_km,
            });
        }
        Ok(())
    }
}

/// Rejected [`MatchConfig`] values.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `max_results` was zero.
    MaxResultsZero,
    /// `max_ring_count` was zero.
    MaxRingCountZero,
    /// `shard_count` was zero.
    ShardCountZero,
    /// `max_compensated_latitude_deg` was outside `[0, 90)`.
    LatitudeCapOutOfRange {
        /// The rejected value.
        value: f64,
    },
    /// `default_radius_km` was not a positive finite number.
    DefaultRadiusNotPositive {
        /// The rejected value.
        radius_km: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxResultsZero => write!(f, "max_results must be at least 1"),
            Self::MaxRingCountZero => write!(f, "max_ring_count must be at least 1"),
            Self::ShardCountZero => write!(f, "shard_count must be at least 1"),
            Self::LatitudeCapOutOfRange { value } => write!(
                f,
                "max_compensated_latitude_deg must be in [0, 90), got {value}"
            ),
            Self::DefaultRadiusNotPositive { radius_km } => write!(
                f,
                "default_radius_km must be positive and finite, got {radius_km}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(MatchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_fields_are_rejected() {
        let mut config = MatchConfig::default();
        config.max_results = 0;
        assert_eq!(config.validate(), Err(ConfigError::MaxResultsZero));

        let mut config = MatchConfig::default();
        config.max_ring_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::MaxRingCountZero));

        let mut config = MatchConfig::default();
        config.shard_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::ShardCountZero));
    }

    #[test]
    fn latitude_cap_must_stay_below_the_pole() {
        let mut config = MatchConfig::default();
        config.max_compensated_latitude_deg = 90.0;
        match config.validate() {
            Err(ConfigError::LatitudeCapOutOfRange { value }) => assert_eq!(value, 90.0),
            other => panic!("expected LatitudeCapOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn default_radius_must_be_positive() {
        let mut config = MatchConfig::default();
        config.default_radius_km = 0.0;
        match config.validate() {
            Err(ConfigError::DefaultRadiusNotPositive { radius_km }) => {
                assert_eq!(radius_km, 0.0);
            }
            other => panic!("expected DefaultRadiusNotPositive, got {other:?}"),
        }
    }
}
