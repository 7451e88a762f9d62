//! One-shot planning: preview, every scenario, and their comparison.
//!
//! This is the entry point the CLI and the bindings share; the interactive
//! flow lives in [`session`](crate::session).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::allocation::allocate;
use crate::config::{PlannerConfig, PASSENGER_RANGE};
use crate::error::{PlannerError, Result};
use crate::metrics::{ScenarioComparison, TripMetrics};
use crate::models::{Constraints, OfficeLocation, Route, Scenario, Vehicle};
use crate::synthesis::{preview_current, RouteSynthesizer};

/// Allocation and routes for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioPlan {
    /// Scenario these results belong to.
    pub scenario: Scenario,
    /// Allocated vehicles, in allocation order.
    pub vehicles: Vec<Vehicle>,
    /// One route per vehicle until everyone is seated.
    pub routes: Vec<Route>,
    /// Aggregates over `routes`.
    pub metrics: TripMetrics,
}

/// Allocates and synthesizes one scenario.
pub fn plan_scenario<R: Rng>(
    config: &PlannerConfig,
    office: &OfficeLocation,
    passenger_count: u32,
    constraints: &Constraints,
    scenario: Scenario,
    rng: &mut R,
) -> Result<ScenarioPlan> {
    let vehicles = allocate(&config.fleet, passenger_count, scenario, config.optimum_policy)?;
    let synth = RouteSynthesizer::new(office, constraints, scenario, config.optimum_policy);
    let routes = synth.synthesize(passenger_count, &vehicles, rng);
    let metrics = TripMetrics::from_routes(&routes);
    Ok(ScenarioPlan {
        scenario,
        vehicles,
        routes,
        metrics,
    })
}

/// Input to [`plan`], shaped like the UI layer's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Office every route ends at.
    pub office: OfficeLocation,
    /// Employees to move. Zero or negative yields empty plans; more than
    /// [`PASSENGER_RANGE`] allows is rejected.
    pub passenger_count: i64,
    /// Soft trip bounds; configuration defaults when absent.
    #[serde(default)]
    pub constraints: Option<Constraints>,
    /// Scenario to mark active, if any.
    #[serde(default)]
    pub scenario: Option<Scenario>,
    /// Seed for reproducible output; fresh randomness when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Output of [`plan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// Baseline routes before optimization.
    pub preview: Vec<Route>,
    /// Every scenario, in [`Scenario::ALL`] order.
    pub scenarios: Vec<ScenarioPlan>,
    /// Scenarios against the baseline.
    pub comparison: ScenarioComparison,
    /// Scenario marked active by the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<Scenario>,
}

impl PlanResponse {
    /// Plan for `scenario`.
    pub fn scenario(&self, scenario: Scenario) -> Option<&ScenarioPlan> {
        self.scenarios.iter().find(|p| p.scenario == scenario)
    }
}

/// Clamps a signed passenger count; negatives count as nobody.
pub fn passengers_from_signed(count: i64) -> u32 {
    count.clamp(0, u32::MAX as i64) as u32
}

fn check_request(request: &PlanRequest) -> Result<()> {
    let office = request.office.point();
    if !office.is_valid() {
        return Err(PlannerError::InvalidCoordinates {
            lat: office.lat,
            lng: office.lng,
        });
    }
    let max = PASSENGER_RANGE.1;
    if request.passenger_count > max as i64 {
        return Err(PlannerError::ConstraintOutOfRange {
            field: "passenger_count",
            value: request.passenger_count as f64,
            min: 0.0,
            max: max as f64,
        });
    }
    Ok(())
}

/// Runs the whole flow for a request: preview, all scenarios, comparison.
///
/// # Examples
///
/// ```
/// use commute_planner::config::PlannerConfig;
/// use commute_planner::models::{OfficeLocation, Scenario};
/// use commute_planner::plan::{plan, PlanRequest};
///
/// let request = PlanRequest {
///     office: OfficeLocation::new(24.36525, 54.56290, "HQ").unwrap(),
///     passenger_count: 65,
///     constraints: None,
///     scenario: Some(Scenario::CostSaving),
///     seed: Some(42),
/// };
/// let response = plan(&PlannerConfig::default(), &request).unwrap();
/// assert_eq!(response.scenarios.len(), 3);
/// assert_eq!(response.scenario(Scenario::CostSaving).unwrap().vehicles.len(), 2);
/// ```
pub fn plan(config: &PlannerConfig, request: &PlanRequest) -> Result<PlanResponse> {
    check_request(request)?;
    let constraints = request.constraints.unwrap_or(config.constraints);
    constraints.validate()?;
    let passengers = passengers_from_signed(request.passenger_count);
    if passengers as i64 != request.passenger_count {
        debug!(requested = request.passenger_count, "clamped passenger count");
    }

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let preview = preview_current(&config.fleet, &request.office, passengers, &constraints, &mut rng);
    let scenarios = Scenario::ALL
        .into_iter()
        .map(|sc| plan_scenario(config, &request.office, passengers, &constraints, sc, &mut rng))
        .collect::<Result<Vec<_>>>()?;

    let comparison = ScenarioComparison::new(
        &preview,
        routes_of(&scenarios, Scenario::CostSaving),
        routes_of(&scenarios, Scenario::ExperienceOptimizing),
        Some(routes_of(&scenarios, Scenario::Optimum)),
    );

    info!(
        office = %request.office.address,
        passengers,
        routes = scenarios.iter().map(|p| p.routes.len()).sum::<usize>(),
        "planned all scenarios"
    );

    Ok(PlanResponse {
        preview,
        scenarios,
        comparison,
        active: request.scenario,
    })
}

fn routes_of(plans: &[ScenarioPlan], scenario: Scenario) -> &[Route] {
    plans
        .iter()
        .find(|p| p.scenario == scenario)
        .map(|p| p.routes.as_slice())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;

    fn request(passengers: i64) -> PlanRequest {
        PlanRequest {
            office: OfficeLocation::new(24.36525, 54.5629, "HQ").expect("valid"),
            passenger_count: passengers,
            constraints: Some(Constraints::new(30.0, 20.0)),
            scenario: None,
            seed: Some(7),
        }
    }

    #[test]
    fn test_plan_negative_passengers_is_empty() {
        let resp = plan(&PlannerConfig::default(), &request(-5)).expect("valid");
        assert!(resp.preview.is_empty());
        for p in &resp.scenarios {
            assert!(p.vehicles.is_empty());
            assert!(p.routes.is_empty());
        }
        assert_eq!(resp.comparison.current.total_vehicles, 0);
    }

    #[test]
    fn test_plan_seeded_is_reproducible() {
        let config = PlannerConfig::default();
        let a = plan(&config, &request(40)).expect("valid");
        let b = plan(&config, &request(40)).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_plan_rejects_bad_constraints() {
        let mut req = request(10);
        req.constraints = Some(Constraints::new(500.0, 20.0));
        assert!(matches!(
            plan(&PlannerConfig::default(), &req),
            Err(PlannerError::ConstraintOutOfRange { .. })
        ));
    }

    #[test]
    fn test_plan_request_json() {
        let json = r#"{
            "office": {"lat": 24.36525, "lng": 54.5629, "address": "HQ"},
            "passengerCount": 12,
            "scenario": "experience-optimizing",
            "seed": 1
        }"#;
        let req: PlanRequest = serde_json::from_str(json).expect("valid json");
        assert_eq!(req.scenario, Some(Scenario::ExperienceOptimizing));
        assert!(req.constraints.is_none());
        let resp = plan(&PlannerConfig::default(), &req).expect("valid");
        assert_eq!(resp.active, Some(Scenario::ExperienceOptimizing));
    }

    #[test]
    fn test_plan_rejects_out_of_range_office() {
        let mut req = request(10);
        req.office = OfficeLocation {
            lat: 95.0,
            lng: 400.0,
            address: "nowhere".into(),
        };
        assert_eq!(
            plan(&PlannerConfig::default(), &req),
            Err(PlannerError::InvalidCoordinates { lat: 95.0, lng: 400.0 })
        );

        let json = r#"{
            "office": {"lat": 95, "lng": 400, "address": "nowhere"},
            "passengerCount": 10
        }"#;
        let err = serde_json::from_str::<PlanRequest>(json).unwrap_err();
        assert!(err.to_string().contains("invalid coordinates (95, 400)"));
    }

    #[test]
    fn test_plan_rejects_too_many_passengers() {
        let config = PlannerConfig::default();
        assert!(plan(&config, &request(200)).is_ok());
        assert!(matches!(
            plan(&config, &request(300_000)),
            Err(PlannerError::ConstraintOutOfRange {
                field: "passenger_count",
                ..
            })
        ));
        assert!(matches!(
            plan(&config, &request(i64::MAX)),
            Err(PlannerError::ConstraintOutOfRange { .. })
        ));
    }

    #[test]
    fn test_passengers_from_signed() {
        assert_eq!(passengers_from_signed(-1), 0);
        assert_eq!(passengers_from_signed(0), 0);
        assert_eq!(passengers_from_signed(65), 65);
    }
}
