//! Route synthesizer: turns an allocation into routes with metrics.

use rand::Rng;
use tracing::{debug, trace};

use super::{build_path, generate_pickup_points};
use crate::distance::{path_length_km, round_to_tenth};
use crate::models::{
    Constraints, OfficeLocation, OptimumPolicy, PickupPoint, Route, Scenario, ScenarioProfile,
    Vehicle,
};

/// Generates one route per allocated vehicle for a scenario.
///
/// Each vehicle seats `floor(capacity × fill_ratio)` employees (capped by
/// the employees still waiting); stops are placed around the office within
/// the scenario-scaled pickup radius, and the route's distance and time are
/// computed from its polyline. Synthesis stops as soon as everyone is seated,
/// so trailing vehicles of an oversized allocation get no route.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use commute_planner::models::{Constraints, Fleet, OfficeLocation, OptimumPolicy, Scenario};
/// use commute_planner::allocation::allocate;
/// use commute_planner::synthesis::RouteSynthesizer;
///
/// let office = OfficeLocation::new(24.36525, 54.56290, "HQ").unwrap();
/// let constraints = Constraints::default();
/// let fleet = Fleet::standard();
/// let vehicles = allocate(&fleet, 65, Scenario::CostSaving, OptimumPolicy::Blended).unwrap();
///
/// let synth = RouteSynthesizer::new(&office, &constraints, Scenario::CostSaving, OptimumPolicy::Blended);
/// let routes = synth.synthesize(65, &vehicles, &mut StdRng::seed_from_u64(1));
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes[0].passengers() + routes[1].passengers(), 65);
/// ```
pub struct RouteSynthesizer<'a> {
    office: &'a OfficeLocation,
    constraints: &'a Constraints,
    scenario: Scenario,
    profile: ScenarioProfile,
}

impl<'a> RouteSynthesizer<'a> {
    /// Creates a synthesizer using the profile `policy` resolves for `scenario`.
    pub fn new(
        office: &'a OfficeLocation,
        constraints: &'a Constraints,
        scenario: Scenario,
        policy: OptimumPolicy,
    ) -> Self {
        Self::with_profile(office, constraints, scenario, policy.resolve(scenario).profile())
    }

    /// Creates a synthesizer with an explicit profile.
    ///
    /// `scenario` still determines the route identifiers.
    pub fn with_profile(
        office: &'a OfficeLocation,
        constraints: &'a Constraints,
        scenario: Scenario,
        profile: ScenarioProfile,
    ) -> Self {
        Self {
            office,
            constraints,
            scenario,
            profile,
        }
    }

    /// Profile in use.
    pub fn profile(&self) -> &ScenarioProfile {
        &self.profile
    }

    /// Radius stops are scattered within, in km.
    pub fn pickup_radius_km(&self) -> f64 {
        self.constraints.max_distance * self.profile.distance_factor
    }

    /// Upper bound applied to route time, in minutes.
    pub fn time_cap_minutes(&self) -> f64 {
        self.constraints.max_time * self.profile.time_cap_factor
    }

    /// Synthesizes routes for `passenger_count` employees over `vehicles`,
    /// in vehicle order.
    pub fn synthesize<R: Rng>(
        &self,
        passenger_count: u32,
        vehicles: &[Vehicle],
        rng: &mut R,
    ) -> Vec<Route> {
        let mut routes = Vec::new();
        let mut remaining = passenger_count;

        for vehicle in vehicles {
            if remaining == 0 {
                break;
            }
            let seated = self.profile.seats(vehicle.capacity()).min(remaining);
            let route = self.build_route(routes.len(), vehicle, seated, rng);
            remaining -= seated;
            routes.push(route);
        }

        debug!(
            scenario = %self.scenario,
            passengers = passenger_count,
            routes = routes.len(),
            unseated = remaining,
            "synthesized routes"
        );
        routes
    }

    /// Builds the route at position `index` carrying `passengers` employees.
    pub fn build_route<R: Rng>(
        &self,
        index: usize,
        vehicle: &Vehicle,
        passengers: u32,
        rng: &mut R,
    ) -> Route {
        let office = self.office.point();
        let pickup_points =
            generate_pickup_points(&office, passengers, self.pickup_radius_km(), rng);
        let stops: Vec<_> = pickup_points.iter().map(PickupPoint::point).collect();
        let path = build_path(&stops, &office);

        let distance = path_length_km(&path);
        let minutes = (distance / self.profile.speed_kmh * 60.0).round();

        let mut route = Route::new(Route::make_id(index, self.scenario), vehicle.clone());
        route.pickup_points = pickup_points;
        route.path = path;
        route.total_distance = round_to_tenth(distance);
        route.total_time = minutes.min(self.time_cap_minutes());

        trace!(
            id = %route.id,
            vehicle = vehicle.id(),
            passengers,
            distance_km = route.total_distance,
            minutes = route.total_time,
            "built route"
        );
        route
    }
}
