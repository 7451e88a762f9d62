//! Polyline construction through pickup stops to the office.

use crate::distance::interpolate;
use crate::models::LatLng;

/// Interpolation steps between consecutive stops.
pub const STOP_STEPS: usize = 5;

/// Interpolation steps from the last stop to the office.
pub const OFFICE_STEPS: usize = 10;

/// Builds a straight-segment polyline: the first stop, then each following
/// stop reached in [`STOP_STEPS`] even steps, then the office reached in
/// [`OFFICE_STEPS`] even steps.
///
/// Each segment ends on its target (up to float rounding), so every stop and
/// the office appear in the path. Empty when there are no stops.
///
/// # Examples
///
/// ```
/// use commute_planner::models::LatLng;
/// use commute_planner::synthesis::build_path;
///
/// let stops = [LatLng::new(0.0, 0.0), LatLng::new(1.0, 0.0)];
/// let path = build_path(&stops, &LatLng::new(2.0, 0.0));
/// assert_eq!(path.len(), 1 + 5 + 10);
/// assert_eq!(path.last(), Some(&LatLng::new(2.0, 0.0)));
/// ```
pub fn build_path(stops: &[LatLng], office: &LatLng) -> Vec<LatLng> {
    let Some(first) = stops.first() else {
        return Vec::new();
    };

    let mut path = Vec::with_capacity(1 + (stops.len() - 1) * STOP_STEPS + OFFICE_STEPS);
    path.push(*first);

    for pair in stops.windows(2) {
        push_segment(&mut path, &pair[0], &pair[1], STOP_STEPS);
    }

    let last = stops[stops.len() - 1];
    push_segment(&mut path, &last, office, OFFICE_STEPS);
    path
}

fn push_segment(path: &mut Vec<LatLng>, from: &LatLng, to: &LatLng, steps: usize) {
    for j in 1..=steps {
        let t = j as f64 / steps as f64;
        path.push(interpolate(from, to, t));
    }
}
