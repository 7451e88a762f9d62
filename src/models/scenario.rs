//! Optimization scenarios and their synthesis profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// A named optimization strategy.
///
/// "No scenario selected" is modelled as `Option<Scenario>::None` by callers,
/// so every dispatch over this enum is exhaustive.
///
/// # Examples
///
/// ```
/// use commute_planner::models::Scenario;
///
/// let s: Scenario = "cost-saving".parse().unwrap();
/// assert_eq!(s, Scenario::CostSaving);
/// assert!("fastest".parse::<Scenario>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Fewer, larger vehicles; longer routes tolerated.
    CostSaving,
    /// Smaller vehicles filled below capacity; shorter, faster routes.
    ExperienceOptimizing,
    /// Blend of the two, resolved through [`OptimumPolicy`].
    Optimum,
}

impl Scenario {
    /// All scenarios in display order.
    pub const ALL: [Scenario; 3] = [
        Scenario::CostSaving,
        Scenario::ExperienceOptimizing,
        Scenario::Optimum,
    ];

    /// Wire tag, also used in route identifiers.
    pub fn tag(&self) -> &'static str {
        match self {
            Scenario::CostSaving => "cost-saving",
            Scenario::ExperienceOptimizing => "experience-optimizing",
            Scenario::Optimum => "optimum",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Scenario {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|sc| sc.tag() == s)
            .ok_or_else(|| PlannerError::UnknownScenario(s.to_string()))
    }
}

/// How the optimum scenario is computed.
///
/// There is no independent optimum algorithm in the product; the choice is
/// surfaced as configuration instead of being guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptimumPolicy {
    /// Dedicated blended allocation and profile.
    #[default]
    Blended,
    /// Optimum behaves exactly like cost-saving.
    CostSaving,
    /// Optimum behaves exactly like experience-optimizing.
    ExperienceOptimizing,
}

impl OptimumPolicy {
    /// Maps a scenario to the strategy that actually runs.
    pub fn resolve(&self, scenario: Scenario) -> Strategy {
        match (scenario, self) {
            (Scenario::CostSaving, _) | (Scenario::Optimum, OptimumPolicy::CostSaving) => {
                Strategy::CostSaving
            }
            (Scenario::ExperienceOptimizing, _)
            | (Scenario::Optimum, OptimumPolicy::ExperienceOptimizing) => Strategy::Experience,
            (Scenario::Optimum, OptimumPolicy::Blended) => Strategy::Blended,
        }
    }
}

impl FromStr for OptimumPolicy {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blended" => Ok(OptimumPolicy::Blended),
            "cost-saving" => Ok(OptimumPolicy::CostSaving),
            "experience-optimizing" => Ok(OptimumPolicy::ExperienceOptimizing),
            other => Err(PlannerError::UnknownOptimumPolicy(other.to_string())),
        }
    }
}

/// The concrete algorithm family behind a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Largest vehicles first, full fill.
    CostSaving,
    /// Smallest eligible vehicles first, 90% fill target.
    Experience,
    /// Largest eligible vehicles at 90% fill, residual on the smallest fit.
    Blended,
}

impl Strategy {
    /// Synthesis parameters for this strategy.
    pub fn profile(&self) -> ScenarioProfile {
        match self {
            Strategy::CostSaving => ScenarioProfile {
                distance_factor: 1.2,
                speed_kmh: 35.0,
                fill_ratio: 1.0,
                time_cap_factor: 1.2,
            },
            Strategy::Experience => ScenarioProfile {
                distance_factor: 0.8,
                speed_kmh: 45.0,
                fill_ratio: 0.95,
                time_cap_factor: 0.9,
            },
            Strategy::Blended => ScenarioProfile {
                distance_factor: 1.0,
                speed_kmh: 40.0,
                fill_ratio: 0.9,
                time_cap_factor: 1.0,
            },
        }
    }
}

/// Scaling factors applied when synthesizing routes for a scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioProfile {
    /// Multiplier on `Constraints::max_distance` for the pickup radius.
    pub distance_factor: f64,
    /// Average speed used for time estimates.
    pub speed_kmh: f64,
    /// Share of nominal capacity seated per vehicle (floored).
    pub fill_ratio: f64,
    /// Multiplier on `Constraints::max_time` for the time cap.
    pub time_cap_factor: f64,
}

impl ScenarioProfile {
    /// Seats filled in a vehicle of the given capacity.
    ///
    /// A full-fill profile seats the whole capacity; partial fill floors.
    pub fn seats(&self, capacity: u32) -> u32 {
        (capacity as f64 * self.fill_ratio).floor() as u32
    }
}
