//! Synthetic pickup-point placement.

use std::f64::consts::TAU;

use rand::Rng;

use crate::distance::offset_km;
use crate::models::{LatLng, PickupPoint};

/// Average number of employees boarding at one stop.
pub const PASSENGERS_PER_STOP: u32 = 4;

/// Share of the pickup radius that stops are kept within.
pub const RADIUS_SHARE: f64 = 0.8;

/// Places `ceil(passengers / 4)` stops around `center`.
///
/// Stops sit at evenly spaced bearings `2π·i/n`, each at a uniformly random
/// distance up to 80% of `radius_km`. Intermediate stops get
/// `floor(passengers / n)` plus a random 0–2 extra, limited so that every
/// later stop can still seat at least one employee; the last stop takes the
/// exact remainder. Counts therefore always sum to `passengers` and every
/// stop has at least one employee.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use commute_planner::models::LatLng;
/// use commute_planner::synthesis::generate_pickup_points;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let stops = generate_pickup_points(&LatLng::new(24.0, 54.0), 10, 20.0, &mut rng);
/// assert_eq!(stops.len(), 3);
/// assert_eq!(stops.iter().map(|p| p.passengers).sum::<u32>(), 10);
/// ```
pub fn generate_pickup_points<R: Rng>(
    center: &LatLng,
    passengers: u32,
    radius_km: f64,
    rng: &mut R,
) -> Vec<PickupPoint> {
    let n = passengers.div_ceil(PASSENGERS_PER_STOP);
    let base = if n > 0 { passengers / n } else { 0 };
    let mut points = Vec::with_capacity(n as usize);
    let mut assigned = 0u32;

    for i in 0..n {
        let distance = rng.random::<f64>() * radius_km * RADIUS_SHARE;
        let bearing = TAU * i as f64 / n as f64;
        let at = offset_km(center, distance, bearing);

        let count = if i == n - 1 {
            passengers - assigned
        } else {
            let jitter = rng.random_range(0..=2u32);
            let reserve = n - i - 1;
            (base + jitter).min(passengers - assigned - reserve)
        };
        let count = count.max(1);
        assigned += count;

        points.push(PickupPoint {
            lat: at.lat,
            lng: at.lng,
            passengers: count,
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::haversine_km;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_no_passengers_no_points() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_pickup_points(&LatLng::new(0.0, 0.0), 0, 10.0, &mut rng).is_empty());
    }

    #[test]
    fn test_single_passenger_single_point() {
        let mut rng = StdRng::seed_from_u64(2);
        let pts = generate_pickup_points(&LatLng::new(24.0, 54.0), 1, 10.0, &mut rng);
        assert_eq!(pts.len(), 1);
        assert_eq!(pts[0].passengers, 1);
    }

    #[test]
    fn test_counts_sum_exactly() {
        let center = LatLng::new(24.36525, 54.5629);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for passengers in 1..=60 {
                let pts = generate_pickup_points(&center, passengers, 24.0, &mut rng);
                assert_eq!(pts.len() as u32, passengers.div_ceil(4));
                assert_eq!(pts.iter().map(|p| p.passengers).sum::<u32>(), passengers);
                assert!(pts.iter().all(|p| p.passengers >= 1));
            }
        }
    }

    #[test]
    fn test_points_within_radius() {
        let center = LatLng::new(24.36525, 54.5629);
        let mut rng = StdRng::seed_from_u64(3);
        let pts = generate_pickup_points(&center, 50, 20.0, &mut rng);
        for p in &pts {
            // 111 km/deg undershoots the haversine degree slightly
            assert!(haversine_km(&center, &p.point()) <= 20.0 * RADIUS_SHARE * 1.01);
        }
    }

    #[test]
    fn test_first_point_due_north() {
        let center = LatLng::new(10.0, 10.0);
        let mut rng = StdRng::seed_from_u64(4);
        let pts = generate_pickup_points(&center, 8, 10.0, &mut rng);
        assert!(pts[0].lat >= center.lat);
        assert!((pts[0].lng - center.lng).abs() < 1e-12);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let center = LatLng::new(24.0, 54.0);
        let a = generate_pickup_points(&center, 17, 16.0, &mut StdRng::seed_from_u64(9));
        let b = generate_pickup_points(&center, 17, 16.0, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
