//! Aggregate trip metrics, scenario comparison and the monitoring snapshot.

mod comparison;
mod monitor;
mod trip;

pub use comparison::{MetricsDelta, ScenarioComparison, ScenarioSummary};
pub use monitor::{MonitoringSnapshot, CYCLE_TICKS};
pub use trip::TripMetrics;
