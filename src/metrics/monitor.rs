//! Live-monitoring snapshot for the animated dashboard.

use serde::{Deserialize, Serialize};

use super::TripMetrics;
use crate::models::Route;

/// Ticks in one full simulated trip cycle.
pub const CYCLE_TICKS: u32 = 100;

/// Share of vehicles reported on time.
const ON_TIME_SHARE: f64 = 0.95;

/// Dashboard counters at a point in the simulated trip cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringSnapshot {
    /// Position in the cycle, `0..CYCLE_TICKS`.
    pub tick: u32,
    /// Employees picked up so far.
    pub completed_pickups: u32,
    /// Vehicles on the road.
    pub in_transit: usize,
    /// Vehicles reported on time.
    pub on_time: usize,
    /// Employees across all routes.
    pub total_employees: u32,
    /// Sum of route distances, km.
    pub total_distance: f64,
    /// Mean route time, rounded minutes.
    pub average_time: f64,
}

impl MonitoringSnapshot {
    /// Snapshot at `tick`, which wraps modulo [`CYCLE_TICKS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use commute_planner::metrics::MonitoringSnapshot;
    ///
    /// let snap = MonitoringSnapshot::at(&[], 150);
    /// assert_eq!(snap.tick, 50);
    /// assert_eq!(snap.completed_pickups, 0);
    /// ```
    pub fn at(routes: &[Route], tick: u32) -> Self {
        let tick = tick % CYCLE_TICKS;
        let metrics = TripMetrics::from_routes(routes);
        let progress = tick as f64 / CYCLE_TICKS as f64;

        Self {
            tick,
            completed_pickups: (progress * metrics.total_passengers as f64).floor() as u32,
            in_transit: metrics.total_vehicles,
            on_time: (metrics.total_vehicles as f64 * ON_TIME_SHARE).floor() as usize,
            total_employees: metrics.total_passengers,
            total_distance: metrics.total_distance,
            average_time: metrics.average_time,
        }
    }
}
