//! Geographic helpers: great-circle distance, small-offset placement,
//! interpolation and map bounds.

mod bounds;
mod haversine;

pub use bounds::{Bounds, DEFAULT_CENTER};
pub use haversine::{
    haversine_km, interpolate, offset_km, path_length_km, round_to_tenth, EARTH_RADIUS_KM,
    KM_PER_DEGREE,
};
