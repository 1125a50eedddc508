//! Geographic point type and point-cloud statistics.
//!
//! Coordinates are (longitude, latitude) pairs treated as a flat Euclidean
//! plane. At building scale the curvature error is far below the noise of
//! the signal model, and both the solver and the nearest-node search must
//! measure distance in the same flattened space.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D geographic coordinate in (lon, lat) order.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude (east-west)
    pub lon: f64,
    /// Latitude (north-south)
    pub lat: f64,
}

impl GeoPoint {
    /// Create a new point
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Sentinel coordinate meaning "no position fix"
    pub const NO_FIX: GeoPoint = GeoPoint {
        lon: -1.0,
        lat: -1.0,
    };

    /// Euclidean distance to another point in the flattened plane
    #[inline]
    pub fn distance(&self, other: &GeoPoint) -> f64 {
        let dlon = self.lon - other.lon;
        let dlat = self.lat - other.lat;
        (dlon * dlon + dlat * dlat).sqrt()
    }

    /// Squared distance (avoids the sqrt when only comparing)
    #[inline]
    pub fn distance_squared(&self, other: &GeoPoint) -> f64 {
        let dlon = self.lon - other.lon;
        let dlat = self.lat - other.lat;
        dlon * dlon + dlat * dlat
    }

    /// Length of this point as a vector from the origin
    #[inline]
    pub fn length(&self) -> f64 {
        (self.lon * self.lon + self.lat * self.lat).sqrt()
    }

    /// Dot product with another point (as vectors)
    #[inline]
    pub fn dot(&self, other: &GeoPoint) -> f64 {
        self.lon * other.lon + self.lat * other.lat
    }

    /// Whether both components are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl Add for GeoPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GeoPoint::new(self.lon + other.lon, self.lat + other.lat)
    }
}

impl Sub for GeoPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GeoPoint::new(self.lon - other.lon, self.lat - other.lat)
    }
}

impl Mul<f64> for GeoPoint {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        GeoPoint::new(self.lon * scalar, self.lat * scalar)
    }
}

/// Centroid and standard deviation of distance-from-centroid for a point
/// cloud.
///
/// The standard deviation drives the solver's outlier rejection and is
/// surfaced as the spread of the final position estimate.
///
/// # Panics
///
/// Does not panic, but an empty cloud yields a NaN centroid; callers must
/// guard against empty input (the solver does).
pub fn cloud_stats(points: &[GeoPoint]) -> (GeoPoint, f64) {
    let n = points.len() as f64;
    let mut sum = GeoPoint::default();
    for p in points {
        sum = sum + *p;
    }
    let centroid = GeoPoint::new(sum.lon / n, sum.lat / n);

    let sum_sq: f64 = points
        .iter()
        .map(|p| p.distance_squared(&centroid))
        .sum();
    let std_dev = (sum_sq / n).sqrt();

    (centroid, std_dev)
}
