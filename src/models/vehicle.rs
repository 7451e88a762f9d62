//! Vehicle catalog entries and the fleet they are drawn from.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Body type of a catalog vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    /// Passenger car.
    Sedan,
    /// Minibus / van.
    Van,
    /// Full-size coach.
    Bus,
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VehicleType::Sedan => "sedan",
            VehicleType::Van => "van",
            VehicleType::Bus => "bus",
        };
        f.write_str(s)
    }
}

/// A vehicle type that can be assigned to a commute route.
///
/// Vehicles are immutable catalog entries; an allocation is a list of
/// clones, one per vehicle put on the road.
///
/// # Examples
///
/// ```
/// use commute_planner::models::{Vehicle, VehicleType};
///
/// let v = Vehicle::new("van", "14-Seater Van", 14, VehicleType::Van);
/// assert_eq!(v.id(), "van");
/// assert_eq!(v.capacity(), 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: String,
    name: String,
    capacity: u32,
    #[serde(rename = "type")]
    kind: VehicleType,
    #[serde(default)]
    color: String,
    #[serde(default)]
    icon: String,
}

impl Vehicle {
    /// Creates a vehicle with no display color or icon.
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32, kind: VehicleType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            kind,
            color: String::new(),
            icon: String::new(),
        }
    }

    /// Sets the display color (hex string).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the display icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Catalog identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seating capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Body type.
    pub fn kind(&self) -> VehicleType {
        self.kind
    }

    /// Display color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Display icon.
    pub fn icon(&self) -> &str {
        &self.icon
    }
}

/// An ordered vehicle catalog.
///
/// Catalog order matters: it breaks capacity ties during allocation and
/// the baseline preview uses the first two entries.
///
/// # Examples
///
/// ```
/// use commute_planner::models::Fleet;
///
/// let fleet = Fleet::standard();
/// let caps: Vec<u32> = fleet.vehicles().iter().map(|v| v.capacity()).collect();
/// assert_eq!(caps, vec![4, 14, 50]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vehicle>", into = "Vec<Vehicle>")]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Builds a fleet, rejecting zero-capacity and duplicate entries.
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self> {
        let mut seen = HashSet::new();
        for v in &vehicles {
            if v.capacity == 0 {
                return Err(PlannerError::ZeroCapacity(v.id.clone()));
            }
            if !seen.insert(v.id.as_str()) {
                return Err(PlannerError::DuplicateVehicle(v.id.clone()));
            }
        }
        Ok(Self { vehicles })
    }

    /// The three-entry sedan / van / bus catalog.
    pub fn standard() -> Self {
        Self {
            vehicles: vec![
                Vehicle::new("sedan", "Sedan Car", 4, VehicleType::Sedan)
                    .with_color("#FC153B")
                    .with_icon("🚗"),
                Vehicle::new("van", "14-Seater Van", 14, VehicleType::Van)
                    .with_color("#004E89")
                    .with_icon("🚐"),
                Vehicle::new("bus", "50-Seater Bus", 50, VehicleType::Bus)
                    .with_color("#FF6B35")
                    .with_icon("🚌"),
            ],
        }
    }

    /// Catalog entries in order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns `true` if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Sum of nominal capacity over an allocation.
    pub fn total_capacity(vehicles: &[Vehicle]) -> u32 {
        vehicles.iter().map(|v| v.capacity).sum()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Vehicle>> for Fleet {
    type Error = PlannerError;

    fn try_from(vehicles: Vec<Vehicle>) -> Result<Self> {
        Self::new(vehicles)
    }
}

impl From<Fleet> for Vec<Vehicle> {
    fn from(fleet: Fleet) -> Self {
        fleet.vehicles
    }
}
