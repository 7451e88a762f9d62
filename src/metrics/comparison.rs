//! Side-by-side comparison of optimized scenarios against the baseline.

use serde::{Deserialize, Serialize};

use super::TripMetrics;
use crate::models::Route;

/// Change of a scenario relative to the baseline.
///
/// Positive values are improvements: vehicles, distance and time saved, and
/// utilization points gained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsDelta {
    /// Baseline vehicles minus scenario vehicles.
    pub vehicles: i64,
    /// Baseline distance minus scenario distance, km.
    pub distance: f64,
    /// Baseline time minus scenario time, minutes.
    pub time: f64,
    /// Scenario utilization minus baseline utilization, percentage points.
    pub utilization: f64,
}

impl MetricsDelta {
    /// Delta of `scenario` against `baseline`.
    pub fn between(baseline: &TripMetrics, scenario: &TripMetrics) -> Self {
        Self {
            vehicles: baseline.total_vehicles as i64 - scenario.total_vehicles as i64,
            distance: baseline.total_distance - scenario.total_distance,
            time: baseline.total_time - scenario.total_time,
            utilization: scenario.utilization_pct - baseline.utilization_pct,
        }
    }
}

/// One scenario's metrics and its delta to the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    /// Aggregate metrics.
    pub metrics: TripMetrics,
    /// Improvement over the baseline.
    pub delta: MetricsDelta,
}

impl ScenarioSummary {
    fn new(baseline: &TripMetrics, routes: &[Route]) -> Self {
        let metrics = TripMetrics::from_routes(routes);
        let delta = MetricsDelta::between(baseline, &metrics);
        Self { metrics, delta }
    }
}

/// Baseline plus the optimized scenarios.
///
/// # Examples
///
/// ```
/// use commute_planner::metrics::ScenarioComparison;
///
/// let cmp = ScenarioComparison::new(&[], &[], &[], None);
/// assert_eq!(cmp.cost_saving.delta.vehicles, 0);
/// assert!(cmp.optimum.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    /// Metrics of the pre-optimization routes.
    pub current: TripMetrics,
    /// Cost-saving scenario.
    pub cost_saving: ScenarioSummary,
    /// Experience-optimizing scenario.
    pub experience: ScenarioSummary,
    /// Optimum scenario, when it was generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimum: Option<ScenarioSummary>,
}

impl ScenarioComparison {
    /// Compares scenario route sets against the `current` baseline.
    pub fn new(
        current: &[Route],
        cost_saving: &[Route],
        experience: &[Route],
        optimum: Option<&[Route]>,
    ) -> Self {
        let baseline = TripMetrics::from_routes(current);
        Self {
            cost_saving: ScenarioSummary::new(&baseline, cost_saving),
            experience: ScenarioSummary::new(&baseline, experience),
            optimum: optimum.map(|routes| ScenarioSummary::new(&baseline, routes)),
            current: baseline,
        }
    }
}
