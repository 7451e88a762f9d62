//! # commute-planner
//!
//! Employee-commute planning for transport scenario demos: vehicle
//! allocation from a small catalog, synthetic pickup routes around an
//! office, a naive pre-optimization baseline, and scenario metrics.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Vehicle, Fleet, OfficeLocation, Constraints, Scenario, Route)
//! - [`distance`] — Haversine distance, offset placement, interpolation and map bounds
//! - [`allocation`] — Vehicle allocation per scenario (cost-saving, experience, blended)
//! - [`synthesis`] — Pickup points, route polylines and the baseline preview
//! - [`metrics`] — Trip metrics, scenario comparison and monitoring snapshots
//! - [`geocode`] — Location resolver trait with coordinate fallback
//! - [`session`] — Interactive planning state
//! - [`plan`] — One-shot planning shared by the CLI and the bindings
//! - [`config`] — Defaults and environment overrides
//!
//! Routes are demo data: stops are placed randomly around the office and
//! paths are straight-line interpolations, not road geometry.

pub mod allocation;
pub mod config;
pub mod distance;
pub mod error;
pub mod geocode;
pub mod metrics;
pub mod models;
pub mod plan;
pub mod session;
pub mod synthesis;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{PlannerError, Result};
