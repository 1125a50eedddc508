//! Spatial graph construction from raw survey records.
//!
//! Pure function: records in, [`FeatureCollection`] out. Two behaviors
//! here are exact requirements, not incidental:
//!
//! - **Axis swap**: survey geometry arrives in (lat, lon) order; every
//!   output coordinate is (lon, lat).
//! - **Output order**: areas, then wall connectors, then node
//!   connectors, then node points, then POI points. Nothing downstream
//!   depends on it semantically, but it keeps builds reproducible.

use crate::core::GeoPoint;
use crate::graph::feature::{Feature, FeatureCollection, Geometry};
use crate::graph::level_range::parse_levels;
use crate::graph::records::{EdgeRecord, NodeRecord, PolygonRecord};
use std::collections::HashMap;

/// Build the spatial graph from one survey payload.
pub fn build_graph(
    polygons: &[PolygonRecord],
    nodes: &[NodeRecord],
    walls: &[NodeRecord],
    pois: &[NodeRecord],
    edges: &[EdgeRecord],
) -> FeatureCollection {
    let mut features = Vec::with_capacity(
        polygons.len() + nodes.len() * 2 + walls.len() + pois.len(),
    );

    features.extend(polygons.iter().map(area_feature));
    features.extend(connector_features(walls, edges));
    features.extend(connector_features(nodes, edges));
    features.extend(nodes.iter().map(point_feature));
    features.extend(pois.iter().map(point_feature));

    FeatureCollection {
        name: "Map".to_string(),
        features,
    }
}

fn area_feature(polygon: &PolygonRecord) -> Feature {
    let ring = polygon
        .vertices
        .iter()
        .map(|&[lat, lon]| GeoPoint::new(lon, lat))
        .collect();

    Feature {
        geometry: Geometry::Polygon(ring),
        tags: polygon.tags.clone(),
        levels: parse_levels(&polygon.level),
        source_id: polygon.id.clone(),
        edge: None,
    }
}

fn point_feature(node: &NodeRecord) -> Feature {
    Feature {
        geometry: Geometry::Point(GeoPoint::new(node.lon, node.lat)),
        tags: node.tags.clone(),
        levels: parse_levels(&node.level),
        source_id: node.id.clone(),
        edge: None,
    }
}

/// Connector features for every edge whose endpoints both resolve within
/// `records`. Identifiers are unique within one graph, so a plain map
/// lookup suffices. Unresolved edges are skipped silently — the surveyed
/// graph may reference nodes outside the queried subset. A connector
/// inherits tags and level from its first endpoint.
fn connector_features(records: &[NodeRecord], edges: &[EdgeRecord]) -> Vec<Feature> {
    let lookup: HashMap<&str, &NodeRecord> =
        records.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut connectors = Vec::new();
    let mut skipped = 0usize;

    for edge in edges {
        let endpoints = (
            lookup.get(edge.edge[0].as_str()),
            lookup.get(edge.edge[1].as_str()),
        );
        match endpoints {
            (Some(first), Some(second)) => connectors.push(Feature {
                geometry: Geometry::Line([
                    GeoPoint::new(first.lon, first.lat),
                    GeoPoint::new(second.lon, second.lat),
                ]),
                tags: first.tags.clone(),
                levels: parse_levels(&first.level),
                source_id: first.id.clone(),
                edge: Some(edge.edge.clone()),
            }),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        log::debug!(
            "skipped {skipped} of {} edges with unresolved endpoints",
            edges.len()
        );
    }

    connectors
}
