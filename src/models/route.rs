//! Pickup points and synthesized routes.

use serde::{Deserialize, Serialize};

use super::{LatLng, Scenario, Vehicle};

/// A synthetic stop where some employees board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickupPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Employees boarding here (always at least 1).
    pub passengers: u32,
}

impl PickupPoint {
    /// The stop as a bare point.
    pub fn point(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// One vehicle's trip: pickup stops in order, then the office.
///
/// # Examples
///
/// ```
/// use commute_planner::models::{Route, Scenario, Fleet};
///
/// let van = Fleet::standard().vehicles()[1].clone();
/// let route = Route::new(Route::make_id(0, Scenario::CostSaving), van);
/// assert_eq!(route.id, "route-0-cost-saving");
/// assert_eq!(route.passengers(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Identifier, unique within one synthesis call.
    pub id: String,
    /// Vehicle serving this route.
    pub vehicle: Vehicle,
    /// Stops in visiting order.
    pub pickup_points: Vec<PickupPoint>,
    /// Polyline from the first stop to the office.
    pub path: Vec<LatLng>,
    /// Path length in km, rounded to one decimal.
    pub total_distance: f64,
    /// Trip time in minutes; may be fractional when the scenario cap binds.
    pub total_time: f64,
}

impl Route {
    /// Creates an empty route.
    pub fn new(id: String, vehicle: Vehicle) -> Self {
        Self {
            id,
            vehicle,
            pickup_points: Vec::new(),
            path: Vec::new(),
            total_distance: 0.0,
            total_time: 0.0,
        }
    }

    /// Route identifier for the route at `index` of a scenario's output.
    pub fn make_id(index: usize, scenario: Scenario) -> String {
        format!("route-{}-{}", index, scenario.tag())
    }

    /// Employees carried on this route.
    pub fn passengers(&self) -> u32 {
        self.pickup_points.iter().map(|p| p.passengers).sum()
    }

    /// Number of pickup stops.
    pub fn stops(&self) -> usize {
        self.pickup_points.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.pickup_points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Fleet;

    #[test]
    fn test_route_passengers() {
        let sedan = Fleet::standard().vehicles()[0].clone();
        let mut r = Route::new("r".into(), sedan);
        assert!(r.is_empty());
        r.pickup_points.push(PickupPoint {
            lat: 0.0,
            lng: 0.0,
            passengers: 3,
        });
        r.pickup_points.push(PickupPoint {
            lat: 0.1,
            lng: 0.1,
            passengers: 1,
        });
        assert_eq!(r.passengers(), 4);
        assert_eq!(r.stops(), 2);
    }

    #[test]
    fn test_route_id_format() {
        assert_eq!(
            Route::make_id(3, Scenario::ExperienceOptimizing),
            "route-3-experience-optimizing"
        );
    }

    #[test]
    fn test_route_serializes_camel_case() {
        let bus = Fleet::standard().vehicles()[2].clone();
        let r = Route::new("route-0-optimum".into(), bus);
        let json = serde_json::to_value(&r).expect("serialize");
        assert!(json.get("pickupPoints").is_some());
        assert!(json.get("totalDistance").is_some());
        assert_eq!(json["vehicle"]["type"], "bus");
    }
}
