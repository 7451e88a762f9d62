//! Bounding boxes for framing a set of points on a map.

use serde::{Deserialize, Serialize};

use crate::models::LatLng;

/// Map center used when there is nothing to frame (Dubai).
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 25.2048,
    lng: 55.2708,
};

/// Half-size in degrees of the fallback box around [`DEFAULT_CENTER`].
const DEFAULT_SPAN: f64 = 0.1;

/// Axis-aligned latitude/longitude envelope.
///
/// # Examples
///
/// ```
/// use commute_planner::models::LatLng;
/// use commute_planner::distance::Bounds;
///
/// let b = Bounds::from_points(&[LatLng::new(1.0, 2.0), LatLng::new(-1.0, 3.0)]);
/// assert_eq!((b.north, b.south, b.east, b.west), (1.0, -1.0, 3.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Largest latitude.
    pub north: f64,
    /// Smallest latitude.
    pub south: f64,
    /// Largest longitude.
    pub east: f64,
    /// Smallest longitude.
    pub west: f64,
}

impl Bounds {
    /// Envelope of `points`; a small box around the default center if empty.
    pub fn from_points(points: &[LatLng]) -> Self {
        let Some(first) = points.first() else {
            return Self {
                north: DEFAULT_CENTER.lat + DEFAULT_SPAN,
                south: DEFAULT_CENTER.lat - DEFAULT_SPAN,
                east: DEFAULT_CENTER.lng + DEFAULT_SPAN,
                west: DEFAULT_CENTER.lng - DEFAULT_SPAN,
            };
        };

        points.iter().fold(
            Self {
                north: first.lat,
                south: first.lat,
                east: first.lng,
                west: first.lng,
            },
            |b, p| Self {
                north: b.north.max(p.lat),
                south: b.south.min(p.lat),
                east: b.east.max(p.lng),
                west: b.west.min(p.lng),
            },
        )
    }

    /// Center of the envelope.
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// Returns `true` if the point lies inside or on the edge.
    pub fn contains(&self, p: &LatLng) -> bool {
        p.lat >= self.south && p.lat <= self.north && p.lng >= self.west && p.lng <= self.east
    }
}
