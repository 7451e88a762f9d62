//! CLI argument parsing for the commute-planner binary.

use clap::{Args, Parser, Subcommand};
use commute_planner::models::Scenario;

#[derive(Parser)]
#[command(
    name = "commute-planner",
    version,
    about = "Employee commute fleet allocation and route synthesis"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the baseline routes before optimization
    Preview(PlanArgs),
    /// Allocate vehicles and synthesize routes for one scenario
    Optimize {
        #[command(flatten)]
        args: PlanArgs,
        /// Scenario to run (cost-saving, experience-optimizing, optimum)
        #[arg(long, default_value = "optimum", value_parser = parse_scenario)]
        scenario: Scenario,
    },
    /// Run every scenario and compare them against the baseline
    Compare(PlanArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Office latitude
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,
    /// Office longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<f64>,
    /// Office address; resolved from the coordinates when omitted
    #[arg(long)]
    pub address: Option<String>,
    /// Number of employees (1-200)
    #[arg(long, short = 'n')]
    pub passengers: Option<u32>,
    /// Maximum trip time in minutes
    #[arg(long)]
    pub max_time: Option<f64>,
    /// Maximum pickup radius in km
    #[arg(long)]
    pub max_distance: Option<f64>,
    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
    /// Skip the pause before optimized results
    #[arg(long)]
    pub no_delay: bool,
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

fn parse_scenario(s: &str) -> Result<Scenario, String> {
    s.parse().map_err(|e: commute_planner::PlannerError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_preview_parses() {
        let cli = Cli::parse_from([
            "commute-planner",
            "preview",
            "--lat",
            "24.36525",
            "--lng",
            "54.5629",
            "-n",
            "65",
        ]);
        match cli.command {
            Command::Preview(args) => {
                assert_eq!(args.lat, Some(24.36525));
                assert_eq!(args.passengers, Some(65));
                assert!(!args.no_delay);
            }
            _ => panic!("expected preview"),
        }
    }

    #[test]
    fn test_cli_optimize_default_scenario() {
        let cli = Cli::parse_from(["commute-planner", "optimize", "--seed", "7"]);
        match cli.command {
            Command::Optimize { args, scenario } => {
                assert_eq!(scenario, Scenario::Optimum);
                assert_eq!(args.seed, Some(7));
            }
            _ => panic!("expected optimize"),
        }
    }

    #[test]
    fn test_cli_optimize_scenario_parses() {
        let cli = Cli::parse_from([
            "commute-planner",
            "optimize",
            "--scenario",
            "experience-optimizing",
            "--no-delay",
        ]);
        assert!(matches!(
            cli.command,
            Command::Optimize {
                scenario: Scenario::ExperienceOptimizing,
                ..
            }
        ));
    }

    #[test]
    fn test_cli_unknown_scenario_rejected() {
        let res = Cli::try_parse_from(["commute-planner", "optimize", "--scenario", "none"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_cli_negative_longitude() {
        let cli = Cli::parse_from(["commute-planner", "compare", "--lng", "-0.1276"]);
        match cli.command {
            Command::Compare(args) => assert_eq!(args.lng, Some(-0.1276)),
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["commute-planner"]).is_err());
    }
}
