//! Aggregate metrics over a set of routes.

use serde::{Deserialize, Serialize};

use crate::models::Route;

/// Totals and averages shown on scenario cards and the results screen.
///
/// # Examples
///
/// ```
/// use commute_planner::metrics::TripMetrics;
///
/// let m = TripMetrics::from_routes(&[]);
/// assert_eq!(m.total_vehicles, 0);
/// assert_eq!(m.average_speed_kmh, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripMetrics {
    /// Routes (one vehicle each).
    pub total_vehicles: usize,
    /// Employees seated across all routes.
    pub total_passengers: u32,
    /// Nominal seats across all routes.
    pub total_capacity: u32,
    /// Sum of route distances, km.
    pub total_distance: f64,
    /// Sum of route times, minutes.
    pub total_time: f64,
    /// Mean route time, rounded to whole minutes; 0 without routes.
    pub average_time: f64,
    /// Pickup stops across all routes.
    pub total_stops: usize,
    /// Total distance over total time, km/h, rounded; `None` if no time elapsed.
    pub average_speed_kmh: Option<f64>,
    /// Seated employees over nominal seats, rounded percent; 0 without routes.
    pub utilization_pct: f64,
}

impl TripMetrics {
    /// Computes metrics for `routes`.
    pub fn from_routes(routes: &[Route]) -> Self {
        let total_vehicles = routes.len();
        let total_passengers: u32 = routes.iter().map(Route::passengers).sum();
        let total_capacity: u32 = routes.iter().map(|r| r.vehicle.capacity()).sum();
        let total_distance: f64 = routes.iter().map(|r| r.total_distance).sum();
        let total_time: f64 = routes.iter().map(|r| r.total_time).sum();
        let total_stops: usize = routes.iter().map(Route::stops).sum();

        let average_time = if total_vehicles > 0 {
            (total_time / total_vehicles as f64).round()
        } else {
            0.0
        };
        let average_speed_kmh =
            (total_time > 0.0).then(|| (total_distance / total_time * 60.0).round());
        let utilization_pct = if total_capacity > 0 {
            (total_passengers as f64 / total_capacity as f64 * 100.0).round()
        } else {
            0.0
        };

        Self {
            total_vehicles,
            total_passengers,
            total_capacity,
            total_distance,
            total_time,
            average_time,
            total_stops,
            average_speed_kmh,
            utilization_pct,
        }
    }
}
