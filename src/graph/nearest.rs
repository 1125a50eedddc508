//! Nearest navigable node lookup.
//!
//! The start point for a path query is the graph node closest to the
//! current position estimate, restricted to corridor nodes
//! (`indoor = "way"`) on the estimate's floor. Distance is Euclidean in
//! the same flattened (lon, lat) space the solver uses.

use crate::graph::feature::{Feature, FeatureCollection, Geometry};
use crate::locate::PositionEstimate;

/// The closest navigable point feature on the estimate's level.
///
/// Ties break to the first feature in collection order. Returns `None`
/// when no candidate exists — no fix, unknown level, or no navigable
/// node on that floor. Callers treat that as "no start point available",
/// not a failure.
pub fn nearest_node<'a>(
    estimate: &PositionEstimate,
    graph: &'a FeatureCollection,
) -> Option<&'a Feature> {
    let mut best: Option<(&Feature, f64)> = None;

    for feature in graph.iter() {
        let point = match feature.geometry {
            Geometry::Point(p) => p,
            _ => continue,
        };
        if !feature.is_way() || !feature.on_level(estimate.level) {
            continue;
        }

        let distance = estimate.point.distance(&point);
        let closer = match best {
            Some((_, best_distance)) => distance < best_distance,
            None => true,
        };
        if closer {
            best = Some((feature, distance));
        }
    }

    best.map(|(feature, _)| feature)
}
