//! Route synthesis: fabricated stops, straight-segment paths and trip
//! metrics for an allocation.
//!
//! Nothing here solves a routing problem. Stops are scattered around the
//! office on evenly spaced bearings and joined in generation order, so
//! outputs are reproducible only when the injected random source is seeded.

mod path;
mod pickup;
mod preview;
mod synthesizer;

pub use path::{build_path, OFFICE_STEPS, STOP_STEPS};
pub use pickup::{generate_pickup_points, PASSENGERS_PER_STOP, RADIUS_SHARE};
pub use preview::preview_current;
pub use synthesizer::RouteSynthesizer;
