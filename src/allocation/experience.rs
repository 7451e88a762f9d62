//! Experience-optimizing allocation.
//!
//! Drops vehicles under [`MIN_FILL_CAPACITY`] seats, sorts the rest by
//! capacity ascending, and counts each vehicle as carrying only its 90% fill
//! target. Each vehicle type is sent `ceil(remaining / target)` times, and
//! every copy consumes `min(target, remaining)` of the demand.
//!
//! The smallest eligible vehicle therefore absorbs all demand. With the
//! standard catalog the 4-seat sedan qualifies, so experience allocations are
//! all sedans.

use super::{fill_eligible, fill_target, MIN_FILL_CAPACITY};
use crate::error::{PlannerError, Result};
use crate::models::{Fleet, Vehicle};

/// Allocates the smallest eligible vehicles at a 90% fill target.
///
/// # Examples
///
/// ```
/// use commute_planner::allocation::experience;
/// use commute_planner::models::Fleet;
///
/// let v = experience(&Fleet::standard(), 10).unwrap();
/// assert_eq!(v.len(), 4); // ceil(10 / 3) sedans
/// ```
pub fn experience(fleet: &Fleet, passenger_count: u32) -> Result<Vec<Vehicle>> {
    let mut sorted = fill_eligible(fleet);
    sorted.sort_by_key(|v| v.capacity());

    let mut selected = Vec::new();
    let mut remaining = passenger_count;

    for vehicle in sorted {
        if remaining == 0 {
            break;
        }
        let target = fill_target(vehicle.capacity());
        if target == 0 {
            continue;
        }
        let copies = remaining.div_ceil(target);
        for _ in 0..copies {
            if remaining == 0 {
                break;
            }
            let assigned = target.min(remaining);
            selected.push(vehicle.clone());
            remaining -= assigned;
        }
    }

    if remaining > 0 {
        return Err(PlannerError::NoEligibleVehicle { remaining });
    }
    Ok(selected)
}
