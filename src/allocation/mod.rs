//! Vehicle allocation: choose how many of which catalog vehicles to send.
//!
//! - [`cost_saving`] — Largest vehicle first, whole-capacity fill
//! - [`experience`] — Smallest eligible vehicle first, 90% fill target
//! - [`blended`] — Largest eligible vehicle first at 90% fill, residual on the
//!   smallest vehicle that fits
//!
//! All three are greedy passes over the catalog; none of them looks at
//! geography.

mod blended;
mod cost_saving;
mod experience;

pub use blended::blended;
pub use cost_saving::cost_saving;
pub use experience::experience;

use tracing::debug;

use crate::error::Result;
use crate::models::{Fleet, OptimumPolicy, Scenario, Strategy, Vehicle};

/// Vehicles below this capacity never take part in fill-target allocation.
pub const MIN_FILL_CAPACITY: u32 = 4;

/// Fill target used by the experience and blended strategies.
pub const FILL_TARGET: f64 = 0.9;

/// Seats counted against demand for one vehicle under a 90% fill target.
pub(crate) fn fill_target(capacity: u32) -> u32 {
    (capacity as f64 * FILL_TARGET).floor() as u32
}

/// Catalog entries eligible for fill-target allocation, in catalog order.
pub(crate) fn fill_eligible(fleet: &Fleet) -> Vec<&Vehicle> {
    fleet
        .vehicles()
        .iter()
        .filter(|v| v.capacity() >= MIN_FILL_CAPACITY)
        .collect()
}

/// Allocates vehicles for `passenger_count` employees under `scenario`.
///
/// Zero passengers yields an empty allocation. The optimum scenario is
/// resolved through `policy`.
///
/// # Errors
///
/// [`PlannerError::NoEligibleVehicle`](crate::PlannerError::NoEligibleVehicle)
/// if demand remains and the catalog has nothing that can carry it.
///
/// # Examples
///
/// ```
/// use commute_planner::allocation::allocate;
/// use commute_planner::models::{Fleet, OptimumPolicy, Scenario};
///
/// let fleet = Fleet::standard();
/// let buses = allocate(&fleet, 65, Scenario::CostSaving, OptimumPolicy::Blended).unwrap();
/// assert_eq!(buses.len(), 2);
/// assert!(buses.iter().all(|v| v.id() == "bus"));
/// ```
pub fn allocate(
    fleet: &Fleet,
    passenger_count: u32,
    scenario: Scenario,
    policy: OptimumPolicy,
) -> Result<Vec<Vehicle>> {
    let strategy = policy.resolve(scenario);
    let selected = allocate_with(fleet, passenger_count, strategy)?;
    debug!(
        %scenario,
        ?strategy,
        passengers = passenger_count,
        vehicles = selected.len(),
        capacity = Fleet::total_capacity(&selected),
        "allocated vehicles"
    );
    Ok(selected)
}

/// Runs one concrete strategy.
pub fn allocate_with(fleet: &Fleet, passenger_count: u32, strategy: Strategy) -> Result<Vec<Vehicle>> {
    match strategy {
        Strategy::CostSaving => cost_saving(fleet, passenger_count),
        Strategy::Experience => experience(fleet, passenger_count),
        Strategy::Blended => blended(fleet, passenger_count),
    }
}
