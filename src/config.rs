//! Planner configuration.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::DEFAULT_CENTER;
use crate::error::{PlannerError, Result};
use crate::models::{Constraints, Fleet, LatLng, OptimumPolicy};

/// Accepted passenger counts.
pub const PASSENGER_RANGE: (u32, u32) = (1, 200);

/// Planner configuration.
///
/// Every field has a default, so partial JSON documents deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerConfig {
    /// Vehicle catalog.
    pub fleet: Fleet,
    /// How the optimum scenario is computed.
    pub optimum_policy: OptimumPolicy,
    /// Constraints a new session starts with.
    pub constraints: Constraints,
    /// Passenger count a new session starts with.
    pub passenger_count: u32,
    /// Map center before an office is chosen.
    pub default_location: LatLng,
    /// Pause before presenting optimized results, in milliseconds.
    pub pacing_delay_ms: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fleet: Fleet::standard(),
            optimum_policy: OptimumPolicy::default(),
            constraints: Constraints::default(),
            passenger_count: 10,
            default_location: DEFAULT_CENTER,
            pacing_delay_ms: 1500,
        }
    }
}

impl PlannerConfig {
    /// Loads configuration from environment variables on top of defaults.
    ///
    /// Reads a `.env` file if present. Recognized keys:
    /// `COMMUTE_OPTIMUM_POLICY`, `COMMUTE_MAX_TIME`, `COMMUTE_MAX_DISTANCE`,
    /// `COMMUTE_PASSENGERS`, `COMMUTE_PACING_DELAY_MS` and `COMMUTE_FLEET_JSON`
    /// (a JSON vehicle list; needs the `cli` or `ffi` feature).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("COMMUTE_OPTIMUM_POLICY") {
            config.optimum_policy = v.trim().parse()?;
        }
        if let Some(v) = lookup("COMMUTE_MAX_TIME") {
            config.constraints.max_time = parse_key("COMMUTE_MAX_TIME", &v)?;
        }
        if let Some(v) = lookup("COMMUTE_MAX_DISTANCE") {
            config.constraints.max_distance = parse_key("COMMUTE_MAX_DISTANCE", &v)?;
        }
        if let Some(v) = lookup("COMMUTE_PASSENGERS") {
            config.passenger_count = parse_key("COMMUTE_PASSENGERS", &v)?;
        }
        if let Some(v) = lookup("COMMUTE_PACING_DELAY_MS") {
            config.pacing_delay_ms = parse_key("COMMUTE_PACING_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("COMMUTE_FLEET_JSON") {
            config.fleet = parse_fleet(&v)?;
        }

        config.validate()?;
        debug!(
            policy = ?config.optimum_policy,
            vehicles = config.fleet.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Checks constraint and passenger ranges.
    pub fn validate(&self) -> Result<()> {
        self.constraints.validate()?;
        validate_passenger_count(self.passenger_count)
    }

    /// Pacing delay as a duration.
    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }
}

/// Checks a passenger count against [`PASSENGER_RANGE`].
pub fn validate_passenger_count(count: u32) -> Result<()> {
    let (min, max) = PASSENGER_RANGE;
    if count < min || count > max {
        return Err(PlannerError::ConstraintOutOfRange {
            field: "passenger_count",
            value: count as f64,
            min: min as f64,
            max: max as f64,
        });
    }
    Ok(())
}

#[cfg(any(feature = "cli", feature = "ffi"))]
fn parse_fleet(json: &str) -> Result<Fleet> {
    serde_json::from_str(json).map_err(|e| PlannerError::InvalidConfig {
        key: "COMMUTE_FLEET_JSON".into(),
        reason: e.to_string(),
    })
}

#[cfg(not(any(feature = "cli", feature = "ffi")))]
fn parse_fleet(_json: &str) -> Result<Fleet> {
    Err(PlannerError::InvalidConfig {
        key: "COMMUTE_FLEET_JSON".into(),
        reason: "built without JSON support".into(),
    })
}

fn parse_key<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| PlannerError::InvalidConfig {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
