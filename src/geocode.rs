//! Location resolution abstraction.
//!
//! The map widget owns geocoding; the planner only needs an office
//! `{lat, lng, address}`. Resolver failures never block planning: the address
//! falls back to the raw coordinates.

use tracing::warn;

use crate::error::{PlannerError, Result};
use crate::models::{LatLng, OfficeLocation};

/// Address search and reverse geocoding.
pub trait LocationResolver {
    /// Looks up an address or place name.
    ///
    /// Returns `Ok(None)` if nothing matches.
    fn search(&self, query: &str) -> Result<Option<OfficeLocation>>;

    /// Finds a display address for a point.
    ///
    /// Returns `Ok(None)` if the point has no known address.
    fn reverse(&self, point: &LatLng) -> Result<Option<String>>;

    /// Name of this resolver implementation.
    fn name(&self) -> &'static str;
}

/// In-memory resolver over a fixed list of known places.
///
/// Search matches case-insensitively on a substring of the address; reverse
/// lookup returns the closest known place within `reverse_radius_deg`.
///
/// # Examples
///
/// ```
/// use commute_planner::geocode::{LocationResolver, StaticResolver};
///
/// let resolver = StaticResolver::uae();
/// let hq = resolver.search("abu dhabi").unwrap().unwrap();
/// assert!(hq.address.contains("Abu Dhabi"));
/// ```
#[derive(Debug, Clone)]
pub struct StaticResolver {
    places: Vec<OfficeLocation>,
    reverse_radius_deg: f64,
}

impl StaticResolver {
    /// Creates a resolver over `places`.
    pub fn new(places: Vec<OfficeLocation>) -> Self {
        Self {
            places,
            reverse_radius_deg: 0.05,
        }
    }

    /// Sets the match radius for reverse lookups, in degrees.
    pub fn with_reverse_radius(mut self, degrees: f64) -> Self {
        self.reverse_radius_deg = degrees;
        self
    }

    /// A handful of UAE business districts.
    pub fn uae() -> Self {
        let places = [
            (25.2048, 55.2708, "Downtown Dubai, Dubai, United Arab Emirates"),
            (25.0772, 55.1393, "Dubai Marina, Dubai, United Arab Emirates"),
            (24.36525, 54.5629, "Mussafah Industrial Area, Abu Dhabi, United Arab Emirates"),
            (24.4539, 54.3773, "Al Markaziyah, Abu Dhabi, United Arab Emirates"),
            (25.3463, 55.4209, "Al Majaz, Sharjah, United Arab Emirates"),
        ];
        Self::new(
            places
                .into_iter()
                .map(|(lat, lng, address)| OfficeLocation {
                    lat,
                    lng,
                    address: address.to_string(),
                })
                .collect(),
        )
    }
}

impl LocationResolver for StaticResolver {
    fn search(&self, query: &str) -> Result<Option<OfficeLocation>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(None);
        }
        Ok(self
            .places
            .iter()
            .find(|p| p.address.to_lowercase().contains(&needle))
            .cloned())
    }

    fn reverse(&self, point: &LatLng) -> Result<Option<String>> {
        if !point.is_valid() {
            return Err(PlannerError::InvalidCoordinates {
                lat: point.lat,
                lng: point.lng,
            });
        }
        let nearest = self
            .places
            .iter()
            .map(|p| {
                let d = ((p.lat - point.lat).powi(2) + (p.lng - point.lng).powi(2)).sqrt();
                (p, d)
            })
            .filter(|(_, d)| *d <= self.reverse_radius_deg)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        Ok(nearest.map(|(p, _)| p.address.clone()))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Builds an office from a picked point, resolving its address.
///
/// If the resolver fails or knows no address, the address is the point's
/// six-decimal coordinate string.
///
/// # Errors
///
/// Only for coordinates outside the valid ranges.
pub fn resolve_office<L: LocationResolver + ?Sized>(
    resolver: &L,
    point: LatLng,
) -> Result<OfficeLocation> {
    let address = match resolver.reverse(&point) {
        Ok(Some(address)) if !address.is_empty() => address,
        Ok(_) => point.to_coordinate_string(),
        Err(e) => {
            warn!(resolver = resolver.name(), error = %e, "reverse geocoding failed, using coordinates");
            point.to_coordinate_string()
        }
    };
    OfficeLocation::new(point.lat, point.lng, address)
}
