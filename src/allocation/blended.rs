//! Blended allocation for the optimum scenario.
//!
//! Walks the eligible catalog from largest to smallest and sends
//! `floor(remaining / target)` copies of each vehicle, where the target is
//! the 90% fill of that vehicle. Whatever is left is smaller than the
//! smallest target and goes on the smallest vehicle that can seat it.

use super::{fill_eligible, fill_target};
use crate::error::{PlannerError, Result};
use crate::models::{Fleet, Vehicle};

/// Allocates full-ish large vehicles, topping up with one small vehicle.
///
/// # Examples
///
/// ```
/// use commute_planner::allocation::blended;
/// use commute_planner::models::Fleet;
///
/// let v = blended(&Fleet::standard(), 65).unwrap();
/// let ids: Vec<&str> = v.iter().map(|v| v.id()).collect();
/// assert_eq!(ids, vec!["bus", "van", "sedan", "sedan", "sedan"]);
/// ```
pub fn blended(fleet: &Fleet, passenger_count: u32) -> Result<Vec<Vehicle>> {
    let mut sorted = fill_eligible(fleet);
    sorted.sort_by(|a, b| b.capacity().cmp(&a.capacity()));

    let mut selected = Vec::new();
    let mut remaining = passenger_count;

    for vehicle in &sorted {
        let target = fill_target(vehicle.capacity());
        if remaining == 0 || target == 0 {
            continue;
        }
        let copies = remaining / target;
        for _ in 0..copies {
            selected.push((*vehicle).clone());
        }
        remaining -= copies * target;
    }

    if remaining > 0 {
        let Some(fit) = sorted.iter().rev().find(|v| v.capacity() >= remaining) else {
            return Err(PlannerError::NoEligibleVehicle { remaining });
        };
        selected.push((*fit).clone());
    }

    Ok(selected)
}
