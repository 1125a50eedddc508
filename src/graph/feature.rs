//! Feature types for the spatial graph.
//!
//! A generic geometric-object-plus-tags model: areas (room polygons),
//! points (corridor nodes, POIs) and connectors (edges between points).
//! All geometry is stored in (lon, lat) order, already axis-swapped from
//! the survey source by the builder.

use crate::core::GeoPoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Arbitrary key→value tags from the survey source (`indoor`, `name`,
/// room classification, ...). BTreeMap keeps iteration deterministic.
pub type Tags = BTreeMap<String, String>;

/// Geometry of one feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Single coordinate (corridor node or POI)
    Point(GeoPoint),
    /// Two-endpoint connector between linked points
    Line([GeoPoint; 2]),
    /// Closed ring of vertices (room outline)
    Polygon(Vec<GeoPoint>),
}

/// One element of the spatial graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    pub tags: Tags,
    /// The set of floor indices this feature exists on. Empty for
    /// malformed survey level strings, which excludes the feature from
    /// every per-level query.
    pub levels: Vec<i32>,
    /// Identifier of the originating survey record, for identity/lookup
    pub source_id: String,
    /// For connectors: the pair of endpoint identifiers from the survey
    /// edge
    #[serde(default)]
    pub edge: Option<[String; 2]>,
}

impl Feature {
    /// Whether this feature exists on `level`.
    pub fn on_level(&self, level: i32) -> bool {
        self.levels.contains(&level)
    }

    /// Whether this feature is a navigable corridor node
    /// (`indoor = "way"`).
    pub fn is_way(&self) -> bool {
        self.tags.get("indoor").map(String::as_str) == Some("way")
    }

    /// The coordinate, for point features.
    pub fn as_point(&self) -> Option<GeoPoint> {
        match self.geometry {
            Geometry::Point(p) => Some(p),
            _ => None,
        }
    }
}

/// Ordered collection of features forming the spatial graph.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub name: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// Features present on a given floor level.
    pub fn on_level(&self, level: i32) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(move |f| f.on_level(level))
    }

    /// Look up a feature by its originating record id.
    pub fn by_source_id(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.source_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_feature(levels: Vec<i32>, indoor: Option<&str>) -> Feature {
        let mut tags = Tags::new();
        if let Some(value) = indoor {
            tags.insert("indoor".to_string(), value.to_string());
        }
        Feature {
            geometry: Geometry::Point(GeoPoint::new(0.0, 0.0)),
            tags,
            levels,
            source_id: "n1".to_string(),
            edge: None,
        }
    }

    #[test]
    fn test_on_level() {
        let feature = point_feature(vec![1, 2, 3], None);
        assert!(feature.on_level(2));
        assert!(!feature.on_level(4));
    }

    #[test]
    fn test_empty_level_set_matches_nothing() {
        let feature = point_feature(Vec::new(), Some("way"));
        for level in -2..10 {
            assert!(!feature.on_level(level));
        }
    }

    #[test]
    fn test_is_way() {
        assert!(point_feature(vec![1], Some("way")).is_way());
        assert!(!point_feature(vec![1], Some("poi")).is_way());
        assert!(!point_feature(vec![1], None).is_way());
    }

    #[test]
    fn test_collection_level_filter() {
        let collection = FeatureCollection {
            name: "Map".to_string(),
            features: vec![
                point_feature(vec![1], Some("way")),
                point_feature(vec![2], Some("way")),
                point_feature(vec![1, 2], None),
            ],
        };
        assert_eq!(collection.on_level(1).count(), 2);
        assert_eq!(collection.on_level(2).count(), 2);
        assert_eq!(collection.on_level(3).count(), 0);
    }
}
