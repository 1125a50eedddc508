//! Fundamental geometric types shared by the localisation pipeline and the
//! spatial graph.

mod point;

pub use point::{cloud_stats, GeoPoint};
