//! Cost-saving allocation.
//!
//! Sorts the catalog by capacity descending (stable, so ties keep catalog
//! order) and sends `ceil(remaining / capacity)` copies of each vehicle in
//! turn until demand is covered. With a non-empty catalog the largest vehicle
//! always covers everything, so the result is a single vehicle type.

use crate::error::{PlannerError, Result};
use crate::models::{Fleet, Vehicle};

/// Allocates the largest vehicles first.
///
/// # Examples
///
/// ```
/// use commute_planner::allocation::cost_saving;
/// use commute_planner::models::Fleet;
///
/// let v = cost_saving(&Fleet::standard(), 101).unwrap();
/// assert_eq!(v.len(), 3); // ceil(101 / 50)
/// ```
pub fn cost_saving(fleet: &Fleet, passenger_count: u32) -> Result<Vec<Vehicle>> {
    let mut sorted: Vec<&Vehicle> = fleet.vehicles().iter().collect();
    sorted.sort_by(|a, b| b.capacity().cmp(&a.capacity()));

    let mut selected = Vec::new();
    let mut remaining = passenger_count;

    for vehicle in sorted {
        if remaining == 0 {
            break;
        }
        let copies = remaining.div_ceil(vehicle.capacity());
        for _ in 0..copies {
            if remaining == 0 {
                break;
            }
            selected.push(vehicle.clone());
            remaining = remaining.saturating_sub(vehicle.capacity());
        }
    }

    if remaining > 0 {
        return Err(PlannerError::NoEligibleVehicle { remaining });
    }
    Ok(selected)
}
