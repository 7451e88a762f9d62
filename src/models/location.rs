//! Coordinates, office location and trip constraints.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// A WGS84 point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Creates a point without validation.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` if both components are finite and in range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Fixed six-decimal rendering, used when no address is available.
    pub fn to_coordinate_string(&self) -> String {
        format!("{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// The office every route ends at.
///
/// # Examples
///
/// ```
/// use commute_planner::models::OfficeLocation;
///
/// let office = OfficeLocation::new(24.36525, 54.56290, "Abu Dhabi").unwrap();
/// assert_eq!(office.address, "Abu Dhabi");
/// assert!(OfficeLocation::new(95.0, 0.0, "nowhere").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOffice")]
pub struct OfficeLocation {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Free-text address.
    pub address: String,
}

impl OfficeLocation {
    /// Creates a validated office location.
    pub fn new(lat: f64, lng: f64, address: impl Into<String>) -> Result<Self> {
        let point = LatLng::new(lat, lng);
        if !point.is_valid() {
            return Err(PlannerError::InvalidCoordinates { lat, lng });
        }
        Ok(Self {
            lat,
            lng,
            address: address.into(),
        })
    }

    /// The office as a bare point.
    pub fn point(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Unvalidated wire form of [`OfficeLocation`].
#[derive(Deserialize)]
struct RawOffice {
    lat: f64,
    lng: f64,
    address: String,
}

impl TryFrom<RawOffice> for OfficeLocation {
    type Error = PlannerError;

    fn try_from(raw: RawOffice) -> Result<Self> {
        Self::new(raw.lat, raw.lng, raw.address)
    }
}

/// User-adjustable bounds that bias generated route metrics.
///
/// Bounds are soft: synthesized routes are scaled by them but not checked
/// against them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Maximum trip time in minutes.
    pub max_time: f64,
    /// Maximum pickup radius in kilometers.
    pub max_distance: f64,
}

impl Constraints {
    /// Accepted range for `max_time` (minutes).
    pub const MAX_TIME_RANGE: (f64, f64) = (5.0, 120.0);
    /// Accepted range for `max_distance` (km).
    pub const MAX_DISTANCE_RANGE: (f64, f64) = (1.0, 100.0);

    /// Creates constraints without validation.
    pub fn new(max_time: f64, max_distance: f64) -> Self {
        Self {
            max_time,
            max_distance,
        }
    }

    /// Checks both values against the accepted ranges.
    pub fn validate(&self) -> Result<()> {
        check_range("max_time", self.max_time, Self::MAX_TIME_RANGE)?;
        check_range("max_distance", self.max_distance, Self::MAX_DISTANCE_RANGE)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new(30.0, 20.0)
    }
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(PlannerError::ConstraintOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlng_validity() {
        assert!(LatLng::new(0.0, 0.0).is_valid());
        assert!(LatLng::new(-90.0, 180.0).is_valid());
        assert!(!LatLng::new(90.5, 0.0).is_valid());
        assert!(!LatLng::new(0.0, -181.0).is_valid());
        assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_coordinate_string() {
        let p = LatLng::new(24.36525, 54.5629);
        assert_eq!(p.to_coordinate_string(), "24.365250, 54.562900");
    }

    #[test]
    fn test_office_invalid() {
        let err = OfficeLocation::new(0.0, 200.0, "x").unwrap_err();
        assert_eq!(err, PlannerError::InvalidCoordinates { lat: 0.0, lng: 200.0 });
    }

    #[test]
    fn test_office_json_is_validated() {
        let ok: OfficeLocation =
            serde_json::from_str(r#"{"lat": 24.5, "lng": 54.5, "address": "HQ"}"#).expect("valid");
        assert_eq!(ok.point(), LatLng::new(24.5, 54.5));

        let err = serde_json::from_str::<OfficeLocation>(r#"{"lat": 95, "lng": 400, "address": "x"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid coordinates"));
    }

    #[test]
    fn test_constraints_default() {
        let c = Constraints::default();
        assert_eq!(c.max_time, 30.0);
        assert_eq!(c.max_distance, 20.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_constraints_bounds() {
        assert!(Constraints::new(5.0, 1.0).validate().is_ok());
        assert!(Constraints::new(120.0, 100.0).validate().is_ok());
        assert!(matches!(
            Constraints::new(4.0, 20.0).validate(),
            Err(PlannerError::ConstraintOutOfRange { field: "max_time", .. })
        ));
        assert!(matches!(
            Constraints::new(30.0, 100.5).validate(),
            Err(PlannerError::ConstraintOutOfRange { field: "max_distance", .. })
        ));
    }

    #[test]
    fn test_constraints_camel_case() {
        let c: Constraints =
            serde_json::from_str(r#"{"maxTime": 45, "maxDistance": 12.5}"#).expect("valid json");
        assert_eq!(c, Constraints::new(45.0, 12.5));
    }
}
