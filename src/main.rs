//! commute-planner CLI
//!
//! Runs the planning flow from the command line and prints JSON.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commute_planner::config::{validate_passenger_count, PlannerConfig};
use commute_planner::geocode::{resolve_office, StaticResolver};
use commute_planner::models::{Constraints, LatLng, OfficeLocation};
use commute_planner::plan::{plan, plan_scenario, PlanRequest};
use commute_planner::synthesis::preview_current;

use crate::cli::{Cli, Command, PlanArgs};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,commute_planner=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = PlannerConfig::from_env().context("loading configuration")?;

    match cli.command {
        Command::Preview(args) => {
            let (office, passengers, constraints) = inputs(&config, &args)?;
            let mut rng = rng_for(args.seed);
            let routes = preview_current(&config.fleet, &office, passengers, &constraints, &mut rng);
            print_json(&routes, args.pretty)
        }
        Command::Optimize { args, scenario } => {
            let (office, passengers, constraints) = inputs(&config, &args)?;
            let mut rng = rng_for(args.seed);
            let result = plan_scenario(&config, &office, passengers, &constraints, scenario, &mut rng)?;
            pace(&config, &args);
            info!(%scenario, vehicles = result.vehicles.len(), "optimization finished");
            print_json(&result, args.pretty)
        }
        Command::Compare(args) => {
            let (office, passengers, constraints) = inputs(&config, &args)?;
            let request = PlanRequest {
                office,
                passenger_count: passengers.into(),
                constraints: Some(constraints),
                scenario: None,
                seed: args.seed,
            };
            let response = plan(&config, &request)?;
            pace(&config, &args);
            print_json(&response, args.pretty)
        }
    }
}

/// Resolves office, passenger count and constraints from flags and config.
fn inputs(config: &PlannerConfig, args: &PlanArgs) -> Result<(OfficeLocation, u32, Constraints)> {
    let point = LatLng::new(
        args.lat.unwrap_or(config.default_location.lat),
        args.lng.unwrap_or(config.default_location.lng),
    );
    let office = match &args.address {
        Some(address) => OfficeLocation::new(point.lat, point.lng, address.clone())?,
        None => resolve_office(&StaticResolver::uae(), point)?,
    };

    let passengers = args.passengers.unwrap_or(config.passenger_count);
    validate_passenger_count(passengers)?;

    let constraints = Constraints::new(
        args.max_time.unwrap_or(config.constraints.max_time),
        args.max_distance.unwrap_or(config.constraints.max_distance),
    );
    constraints.validate()?;

    Ok((office, passengers, constraints))
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn pace(config: &PlannerConfig, args: &PlanArgs) {
    if !args.no_delay && config.pacing_delay_ms > 0 {
        std::thread::sleep(config.pacing_delay());
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
