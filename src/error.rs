//! Error type shared by the planner modules.

use thiserror::Error;

/// Errors raised while allocating vehicles or synthesizing routes.
///
/// Degenerate inputs (zero passengers, an unset office) are not errors: they
/// produce empty results. These variants cover caller bugs and bad
/// configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlannerError {
    /// A scenario tag that is not one of the known strategies.
    #[error("unknown optimization scenario '{0}'")]
    UnknownScenario(String),

    /// An optimum policy tag that is not recognized.
    #[error("unknown optimum policy '{0}'")]
    UnknownOptimumPolicy(String),

    /// Demand remains but no catalog vehicle is eligible to carry it.
    #[error("no eligible vehicle for {remaining} remaining passengers")]
    NoEligibleVehicle {
        /// Passengers left unallocated.
        remaining: u32,
    },

    /// A vehicle definition with a capacity of zero.
    #[error("vehicle '{0}' has zero capacity")]
    ZeroCapacity(String),

    /// A vehicle id that is not in the catalog.
    #[error("unknown vehicle '{0}'")]
    UnknownVehicle(String),

    /// Two catalog entries share an identifier.
    #[error("duplicate vehicle id '{0}' in fleet")]
    DuplicateVehicle(String),

    /// Coordinates outside the valid latitude/longitude ranges.
    #[error("invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },

    /// Constraint values outside the accepted bounds.
    #[error("{field} must be within {min}..={max}, got {value}")]
    ConstraintOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Provided value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// A configuration value that could not be parsed.
    #[error("invalid configuration value for {key}: {reason}")]
    InvalidConfig {
        /// Environment key or field name.
        key: String,
        /// Parse failure description.
        reason: String,
    },

    /// The location resolver failed.
    #[error("geocoding failed: {0}")]
    Geocoding(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlannerError>;
