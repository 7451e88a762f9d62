//! "Before optimization" baseline routes.

use rand::Rng;

use super::RouteSynthesizer;
use crate::models::{Constraints, Fleet, OfficeLocation, Route, Scenario, Strategy};

/// Baseline routes used for comparison against the optimized scenarios.
///
/// Sends the first two catalog entries (a sedan and a van in the standard
/// fleet) with the cost-saving distance and speed profile. The vehicle mix is
/// fixed, so at most their combined capacity is seated.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use commute_planner::models::{Constraints, Fleet, OfficeLocation};
/// use commute_planner::synthesis::preview_current;
///
/// let office = OfficeLocation::new(24.36525, 54.56290, "HQ").unwrap();
/// let routes = preview_current(
///     &Fleet::standard(),
///     &office,
///     10,
///     &Constraints::default(),
///     &mut StdRng::seed_from_u64(3),
/// );
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes[0].vehicle.id(), "sedan");
/// ```
pub fn preview_current<R: Rng>(
    fleet: &Fleet,
    office: &OfficeLocation,
    passenger_count: u32,
    constraints: &Constraints,
    rng: &mut R,
) -> Vec<Route> {
    let vehicles: Vec<_> = fleet.vehicles().iter().take(2).cloned().collect();
    let synth = RouteSynthesizer::with_profile(
        office,
        constraints,
        Scenario::CostSaving,
        Strategy::CostSaving.profile(),
    );
    synth.synthesize(passenger_count, &vehicles, rng)
}
