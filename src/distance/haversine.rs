//! Great-circle distances and small-offset placement.

use crate::models::LatLng;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per degree of latitude (small-angle approximation).
pub const KM_PER_DEGREE: f64 = 111.0;

/// Great-circle distance between two points in kilometers.
///
/// # Examples
///
/// ```
/// use commute_planner::models::LatLng;
/// use commute_planner::distance::haversine_km;
///
/// let dubai = LatLng::new(25.2048, 55.2708);
/// let abu_dhabi = LatLng::new(24.4539, 54.3773);
/// let d = haversine_km(&dubai, &abu_dhabi);
/// assert!((d - 124.0).abs() < 5.0);
/// ```
pub fn haversine_km(from: &LatLng, to: &LatLng) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Sum of great-circle distances between consecutive waypoints.
///
/// Zero for paths with fewer than two points.
pub fn path_length_km(path: &[LatLng]) -> f64 {
    path.windows(2).map(|w| haversine_km(&w[0], &w[1])).sum()
}

/// Places a point `distance_km` away from `origin` along `bearing` radians
/// (0 = north, π/2 = east).
///
/// Uses 1° latitude ≈ 111 km and scales longitude by the cosine of the
/// origin latitude, which is adequate for offsets of a few tens of km.
pub fn offset_km(origin: &LatLng, distance_km: f64, bearing: f64) -> LatLng {
    let lat_offset = distance_km * bearing.cos() / KM_PER_DEGREE;
    let lng_offset =
        distance_km * bearing.sin() / (KM_PER_DEGREE * origin.lat.to_radians().cos());
    LatLng::new(origin.lat + lat_offset, origin.lng + lng_offset)
}

/// Linear interpolation between two points, `t` in `[0, 1]`.
pub fn interpolate(from: &LatLng, to: &LatLng, t: f64) -> LatLng {
    LatLng::new(
        from.lat + (to.lat - from.lat) * t,
        from.lng + (to.lng - from.lng) * t,
    )
}

/// Rounds to one decimal place, half away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
