//! Domain model types for commute planning.
//!
//! Vehicles drawn from a fixed catalog, the office every route ends at,
//! soft trip constraints, scenarios that bias allocation and synthesis, and
//! the synthesized routes themselves.

mod location;
mod route;
mod scenario;
mod vehicle;

pub use location::{Constraints, LatLng, OfficeLocation};
pub use route::{PickupPoint, Route};
pub use scenario::{OptimumPolicy, Scenario, ScenarioProfile, Strategy};
pub use vehicle::{Fleet, Vehicle, VehicleType};
