//! End-to-end planning scenarios.

use commute_planner::config::PlannerConfig;
use commute_planner::metrics::ScenarioComparison;
use commute_planner::models::{Constraints, OfficeLocation, Scenario, VehicleType};
use commute_planner::plan::{plan, plan_scenario, PlanRequest};
use commute_planner::session::PlannerSession;
use commute_planner::synthesis::preview_current;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn office() -> OfficeLocation {
    OfficeLocation::new(24.36525, 54.56290, "Mussafah, Abu Dhabi").unwrap()
}

fn constraints() -> Constraints {
    Constraints::new(30.0, 20.0)
}

#[test]
fn cost_saving_65_uses_two_buses() {
    let config = PlannerConfig::default();
    let mut rng = StdRng::seed_from_u64(65);
    let p = plan_scenario(&config, &office(), 65, &constraints(), Scenario::CostSaving, &mut rng)
        .unwrap();

    assert!(p.vehicles.iter().all(|v| v.kind() == VehicleType::Bus));
    assert_eq!(p.vehicles.len(), 2);
    assert_eq!(p.routes.len(), 2);
    assert_eq!(p.routes[0].passengers(), 50);
    assert_eq!(p.routes[1].passengers(), 15);
    assert_eq!(p.metrics.total_passengers, 65);
    assert_eq!(p.metrics.total_capacity, 100);
    // 65 / 100 seats
    assert_eq!(p.metrics.utilization_pct, 65.0);
    for r in &p.routes {
        // radius 20 × 1.2, time cap 30 × 1.2
        assert!(r.total_time <= 36.0 + 1e-9);
    }
}

#[test]
fn experience_65_uses_sedans_at_three_seats() {
    let config = PlannerConfig::default();
    let mut rng = StdRng::seed_from_u64(66);
    let p = plan_scenario(
        &config,
        &office(),
        65,
        &constraints(),
        Scenario::ExperienceOptimizing,
        &mut rng,
    )
    .unwrap();

    assert_eq!(p.vehicles.len(), 22);
    assert!(p.vehicles.iter().all(|v| v.kind() == VehicleType::Sedan));
    assert_eq!(p.routes.len(), 22);
    assert!(p.routes.iter().all(|r| r.passengers() <= 3));
    for r in &p.routes {
        assert!(r.total_time <= 27.0 + 1e-9);
    }
}

#[test]
fn optimum_65_blends_vehicle_sizes() {
    let config = PlannerConfig::default();
    let mut rng = StdRng::seed_from_u64(67);
    let p = plan_scenario(&config, &office(), 65, &constraints(), Scenario::Optimum, &mut rng)
        .unwrap();

    let kinds: Vec<VehicleType> = p.vehicles.iter().map(|v| v.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            VehicleType::Bus,
            VehicleType::Van,
            VehicleType::Sedan,
            VehicleType::Sedan,
            VehicleType::Sedan,
        ]
    );
    assert_eq!(p.metrics.total_passengers, 65);
    assert!(p.routes.iter().all(|r| r.id.ends_with("-optimum")));
}

#[test]
fn preview_shape_is_independent_of_randomness() {
    let config = PlannerConfig::default();
    let shapes: Vec<Vec<(String, u32)>> = (0..5)
        .map(|seed| {
            preview_current(
                &config.fleet,
                &office(),
                65,
                &constraints(),
                &mut StdRng::seed_from_u64(seed),
            )
            .iter()
            .map(|r| (r.vehicle.id().to_string(), r.passengers()))
            .collect()
        })
        .collect();

    assert!(shapes.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(
        shapes[0],
        vec![("sedan".to_string(), 4), ("van".to_string(), 14)]
    );
}

#[test]
fn repeated_runs_reuse_route_ids() {
    let config = PlannerConfig::default();
    let mut rng = StdRng::seed_from_u64(9);
    let a = plan_scenario(&config, &office(), 20, &constraints(), Scenario::Optimum, &mut rng)
        .unwrap();
    let b = plan_scenario(&config, &office(), 20, &constraints(), Scenario::Optimum, &mut rng)
        .unwrap();
    let ids_a: Vec<&str> = a.routes.iter().map(|r| r.id.as_str()).collect();
    let ids_b: Vec<&str> = b.routes.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids_a, ids_b);
    assert_ne!(a.routes[0].pickup_points, b.routes[0].pickup_points);
}

#[test]
fn zero_passengers_gives_empty_plans() {
    let config = PlannerConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    for sc in Scenario::ALL {
        let p = plan_scenario(&config, &office(), 0, &constraints(), sc, &mut rng).unwrap();
        assert!(p.vehicles.is_empty());
        assert!(p.routes.is_empty());
        assert_eq!(p.metrics.total_vehicles, 0);
    }
}

#[test]
fn one_shot_plan_matches_session_shape() {
    let config = PlannerConfig::default();
    let response = plan(
        &config,
        &PlanRequest {
            office: office(),
            passenger_count: 65,
            constraints: Some(constraints()),
            scenario: Some(Scenario::Optimum),
            seed: Some(2024),
        },
    )
    .unwrap();

    let mut session = PlannerSession::new(config);
    session.set_office_location(office());
    session.set_passenger_count(65).unwrap();
    session.set_constraints(constraints()).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    session.generate_preview(&mut rng);
    assert!(session.transform(&mut rng).unwrap());

    for sc in Scenario::ALL {
        let from_plan = response.scenario(sc).unwrap();
        let from_session = session.candidate(sc).unwrap();
        assert_eq!(from_plan.vehicles, from_session.vehicles);
        assert_eq!(from_plan.routes.len(), from_session.routes.len());
    }

    let cmp: ScenarioComparison = session.comparison().unwrap();
    assert_eq!(cmp.current.total_vehicles, response.comparison.current.total_vehicles);
    assert_eq!(cmp.cost_saving.delta.vehicles, 0);
    assert_eq!(cmp.experience.delta.vehicles, -20);
}

#[test]
fn response_serializes_for_the_ui() {
    let response = plan(
        &PlannerConfig::default(),
        &PlanRequest {
            office: office(),
            passenger_count: 12,
            constraints: None,
            scenario: None,
            seed: Some(5),
        },
    )
    .unwrap();
    let json = serde_json::to_value(&response).unwrap();
    let route = &json["scenarios"][0]["routes"][0];
    assert!(route["pickupPoints"].is_array());
    assert!(route["totalDistance"].is_number());
    assert_eq!(route["vehicle"]["type"], "bus");
    assert!(json.get("active").is_none());
}
