//! Interactive planning state.
//!
//! Holds what the guided flow accumulates: office, employee count,
//! constraints, the baseline preview, the candidate plan for each scenario
//! and the scenario the user picked. Owned by the caller and passed
//! explicitly; every optimization recomputes from scratch, synchronously.

use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, info};

use crate::allocation::allocate;
use crate::config::{validate_passenger_count, PlannerConfig};
use crate::distance::Bounds;
use crate::error::{PlannerError, Result};
use crate::metrics::{MonitoringSnapshot, ScenarioComparison, TripMetrics};
use crate::models::{Constraints, LatLng, OfficeLocation, Route, Scenario, Vehicle};
use crate::plan::{plan_scenario, ScenarioPlan};
use crate::synthesis::preview_current;

/// State of one planning session.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use commute_planner::config::PlannerConfig;
/// use commute_planner::models::{OfficeLocation, Scenario};
/// use commute_planner::session::PlannerSession;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut session = PlannerSession::new(PlannerConfig::default());
/// session.set_office_location(OfficeLocation::new(24.36525, 54.56290, "HQ").unwrap());
/// session.set_passenger_count(65).unwrap();
///
/// session.generate_preview(&mut rng);
/// session.transform(&mut rng).unwrap();
/// let routes = session.select_scenario(Scenario::CostSaving);
/// assert_eq!(routes.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PlannerSession {
    config: PlannerConfig,
    office: Option<OfficeLocation>,
    passenger_count: u32,
    constraints: Constraints,
    selected_vehicles: Vec<Vehicle>,
    routes: Vec<Route>,
    current_routes: Vec<Route>,
    candidates: HashMap<Scenario, ScenarioPlan>,
    scenario: Option<Scenario>,
}

impl PlannerSession {
    /// Creates a session with the configured starting values.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            office: None,
            passenger_count: config.passenger_count,
            constraints: config.constraints,
            selected_vehicles: Vec::new(),
            routes: Vec::new(),
            current_routes: Vec::new(),
            candidates: HashMap::new(),
            scenario: None,
            config,
        }
    }

    /// Sets the office all routes end at.
    pub fn set_office_location(&mut self, office: OfficeLocation) {
        debug!(address = %office.address, "office location set");
        self.office = Some(office);
    }

    /// Sets the employee count (1–200).
    pub fn set_passenger_count(&mut self, count: u32) -> Result<()> {
        validate_passenger_count(count)?;
        self.passenger_count = count;
        Ok(())
    }

    /// Sets the trip constraints after range checks.
    pub fn set_constraints(&mut self, constraints: Constraints) -> Result<()> {
        constraints.validate()?;
        self.constraints = constraints;
        Ok(())
    }

    /// Regenerates the baseline routes.
    ///
    /// Skipped while no office is set; the previous preview is kept.
    pub fn generate_preview<R: Rng>(&mut self, rng: &mut R) -> &[Route] {
        let Some(office) = &self.office else {
            debug!("preview skipped: no office location");
            return &self.current_routes;
        };
        self.current_routes = preview_current(
            &self.config.fleet,
            office,
            self.passenger_count,
            &self.constraints,
            rng,
        );
        &self.current_routes
    }

    /// Computes a candidate plan for every scenario.
    ///
    /// Returns `Ok(false)` without touching state while no office is set.
    /// On error the previous candidates are kept.
    pub fn transform<R: Rng>(&mut self, rng: &mut R) -> Result<bool> {
        let Some(office) = self.office.clone() else {
            debug!("optimization skipped: no office location");
            return Ok(false);
        };

        let mut candidates = HashMap::with_capacity(Scenario::ALL.len());
        for scenario in Scenario::ALL {
            let plan = plan_scenario(
                &self.config,
                &office,
                self.passenger_count,
                &self.constraints,
                scenario,
                rng,
            )?;
            candidates.insert(scenario, plan);
        }
        self.candidates = candidates;

        info!(
            passengers = self.passenger_count,
            scenarios = self.candidates.len(),
            "generated scenario candidates"
        );
        Ok(true)
    }

    /// Activates a scenario's candidate routes and allocation.
    ///
    /// Before [`transform`](Self::transform) has run there are no candidates,
    /// so the active routes become empty.
    pub fn select_scenario(&mut self, scenario: Scenario) -> &[Route] {
        self.scenario = Some(scenario);
        match self.candidates.get(&scenario) {
            Some(plan) => {
                self.routes = plan.routes.clone();
                self.selected_vehicles = plan.vehicles.clone();
            }
            None => {
                self.routes.clear();
                self.selected_vehicles.clear();
            }
        }
        debug!(%scenario, routes = self.routes.len(), "scenario selected");
        &self.routes
    }

    /// Adds the catalog vehicle `id` to the selection, or removes it if
    /// already selected. Returns whether it is selected afterwards.
    pub fn toggle_vehicle(&mut self, id: &str) -> Result<bool> {
        if let Some(pos) = self.selected_vehicles.iter().position(|v| v.id() == id) {
            self.selected_vehicles.remove(pos);
            return Ok(false);
        }
        let vehicle = self
            .config
            .fleet
            .get(id)
            .ok_or_else(|| PlannerError::UnknownVehicle(id.to_string()))?;
        self.selected_vehicles.push(vehicle.clone());
        Ok(true)
    }

    /// Map envelope of the office and every active pickup stop.
    ///
    /// Falls back to the default region when there is nothing to show.
    pub fn map_bounds(&self) -> Bounds {
        let points: Vec<LatLng> = self
            .routes
            .iter()
            .flat_map(|r| r.pickup_points.iter().map(|p| p.point()))
            .chain(self.office.as_ref().map(OfficeLocation::point))
            .collect();
        Bounds::from_points(&points)
    }

    /// Re-runs allocation for the active scenario without new routes.
    pub fn reallocate(&self) -> Result<Vec<Vehicle>> {
        match self.scenario {
            Some(scenario) => allocate(
                &self.config.fleet,
                self.passenger_count,
                scenario,
                self.config.optimum_policy,
            ),
            None => Ok(Vec::new()),
        }
    }

    /// Metrics for the active routes.
    pub fn trip_metrics(&self) -> TripMetrics {
        TripMetrics::from_routes(&self.routes)
    }

    /// Scenario comparison against the preview; `None` before
    /// [`transform`](Self::transform).
    pub fn comparison(&self) -> Option<ScenarioComparison> {
        let cost = self.candidates.get(&Scenario::CostSaving)?;
        let experience = self.candidates.get(&Scenario::ExperienceOptimizing)?;
        let optimum = self
            .candidates
            .get(&Scenario::Optimum)
            .map(|p| p.routes.as_slice());
        Some(ScenarioComparison::new(
            &self.current_routes,
            &cost.routes,
            &experience.routes,
            optimum,
        ))
    }

    /// Dashboard counters for the active routes at `tick`.
    pub fn monitoring(&self, tick: u32) -> MonitoringSnapshot {
        MonitoringSnapshot::at(&self.routes, tick)
    }

    /// Returns everything to the configured starting values.
    pub fn reset(&mut self) {
        let config = self.config.clone();
        *self = Self::new(config);
    }

    /// Office, if chosen.
    pub fn office(&self) -> Option<&OfficeLocation> {
        self.office.as_ref()
    }

    /// Employee count.
    pub fn passenger_count(&self) -> u32 {
        self.passenger_count
    }

    /// Trip constraints.
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Allocation of the active scenario.
    pub fn selected_vehicles(&self) -> &[Vehicle] {
        &self.selected_vehicles
    }

    /// Active routes.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Baseline preview routes.
    pub fn current_routes(&self) -> &[Route] {
        &self.current_routes
    }

    /// Candidate plan for a scenario, once generated.
    pub fn candidate(&self, scenario: Scenario) -> Option<&ScenarioPlan> {
        self.candidates.get(&scenario)
    }

    /// Selected scenario, if any.
    pub fn scenario(&self) -> Option<Scenario> {
        self.scenario
    }

    /// Configuration in use.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}

impl Default for PlannerSession {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::models::{Fleet, VehicleType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn office() -> OfficeLocation {
        OfficeLocation::new(24.36525, 54.5629, "HQ").expect("valid")
    }

    #[test]
    fn test_initial_state() {
        let s = PlannerSession::default();
        assert!(s.office().is_none());
        assert_eq!(s.passenger_count(), 10);
        assert_eq!(*s.constraints(), Constraints::new(30.0, 20.0));
        assert!(s.routes().is_empty());
        assert!(s.scenario().is_none());
        assert!(s.comparison().is_none());
    }

    #[test]
    fn test_without_office_everything_is_skipped() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut s = PlannerSession::default();
        assert!(s.generate_preview(&mut rng).is_empty());
        assert_eq!(s.transform(&mut rng), Ok(false));
        assert!(s.candidate(Scenario::CostSaving).is_none());
    }

    #[test]
    fn test_setters_validate() {
        let mut s = PlannerSession::default();
        assert!(s.set_passenger_count(0).is_err());
        assert!(s.set_passenger_count(201).is_err());
        assert!(s.set_passenger_count(200).is_ok());
        assert!(matches!(
            s.set_constraints(Constraints::new(30.0, 0.5)),
            Err(PlannerError::ConstraintOutOfRange { .. })
        ));
        assert_eq!(*s.constraints(), Constraints::default());
    }

    #[test]
    fn test_full_flow() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut s = PlannerSession::default();
        s.set_office_location(office());
        s.set_passenger_count(65).expect("valid");

        let preview = s.generate_preview(&mut rng).to_vec();
        assert_eq!(preview.len(), 2);

        assert_eq!(s.transform(&mut rng), Ok(true));
        for sc in Scenario::ALL {
            assert!(s.candidate(sc).is_some());
        }

        let routes = s.select_scenario(Scenario::ExperienceOptimizing).to_vec();
        assert_eq!(routes.len(), 22);
        assert_eq!(s.selected_vehicles().len(), 22);
        assert!(s
            .selected_vehicles()
            .iter()
            .all(|v| v.kind() == VehicleType::Sedan));
        assert_eq!(s.reallocate().expect("valid"), s.selected_vehicles());

        let m = s.trip_metrics();
        assert_eq!(m.total_passengers, 65);
        assert_eq!(m.total_vehicles, 22);

        let cmp = s.comparison().expect("generated");
        assert_eq!(cmp.current.total_vehicles, 2);
        assert_eq!(cmp.cost_saving.metrics.total_vehicles, 2);
        assert!(cmp.optimum.is_some());

        assert_eq!(s.monitoring(50).total_employees, 65);
    }

    #[test]
    fn test_select_before_transform_is_empty() {
        let mut s = PlannerSession::default();
        assert!(s.select_scenario(Scenario::Optimum).is_empty());
        assert_eq!(s.scenario(), Some(Scenario::Optimum));
    }

    #[test]
    fn test_reset() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut s = PlannerSession::default();
        s.set_office_location(office());
        s.set_passenger_count(30).expect("valid");
        s.transform(&mut rng).expect("valid");
        s.select_scenario(Scenario::CostSaving);
        s.reset();
        assert!(s.office().is_none());
        assert_eq!(s.passenger_count(), 10);
        assert!(s.routes().is_empty());
        assert!(s.candidate(Scenario::CostSaving).is_none());
        assert!(s.scenario().is_none());
    }

    #[test]
    fn test_transform_error_keeps_candidates() {
        let mut config = PlannerConfig::default();
        config.fleet = Fleet::new(vec![]).expect("valid");
        let mut s = PlannerSession::new(config);
        s.set_office_location(office());
        let err = s.transform(&mut StdRng::seed_from_u64(3)).unwrap_err();
        assert_eq!(err, PlannerError::NoEligibleVehicle { remaining: 10 });
        assert!(s.candidate(Scenario::CostSaving).is_none());
    }

    #[test]
    fn test_toggle_vehicle() {
        let mut s = PlannerSession::default();
        assert_eq!(s.toggle_vehicle("van"), Ok(true));
        assert_eq!(s.toggle_vehicle("bus"), Ok(true));
        let ids: Vec<&str> = s.selected_vehicles().iter().map(|v| v.id()).collect();
        assert_eq!(ids, vec!["van", "bus"]);

        assert_eq!(s.toggle_vehicle("van"), Ok(false));
        assert_eq!(s.selected_vehicles().len(), 1);
        assert_eq!(
            s.toggle_vehicle("truck"),
            Err(PlannerError::UnknownVehicle("truck".into()))
        );
    }

    #[test]
    fn test_map_bounds() {
        let mut s = PlannerSession::default();
        assert!(s.map_bounds().contains(&crate::distance::DEFAULT_CENTER));

        s.set_office_location(office());
        let only_office = s.map_bounds();
        assert_eq!(only_office.center(), office().point());

        s.transform(&mut StdRng::seed_from_u64(4)).expect("valid");
        s.select_scenario(Scenario::CostSaving);
        let b = s.map_bounds();
        assert!(b.contains(&office().point()));
        for r in s.routes() {
            assert!(r.pickup_points.iter().all(|p| b.contains(&p.point())));
        }
    }
}
