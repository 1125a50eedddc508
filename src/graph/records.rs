//! Raw survey records, in the exact shape the building-data collaborator
//! returns them.
//!
//! These shapes are the one bit-exact contract the core depends on:
//! polygon vertices arrive in (lat, lon) order, node/wall/POI records as
//! flat `lat`/`lon` fields with a level *string* and a free-form tag map,
//! and edges as bare identifier pairs. The builder
//! ([`build_graph`](crate::graph::build_graph)) normalizes all of it.

use crate::error::Result;
use crate::graph::builder::build_graph;
use crate::graph::feature::{FeatureCollection, Tags};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A surveyed room polygon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonRecord {
    pub id: String,
    /// Closed ring of vertices in (lat, lon) order, as surveyed
    pub vertices: Vec<[f64; 2]>,
    /// Level string (`"2"` or `"1;3"`)
    pub level: String,
    #[serde(default)]
    pub tags: Tags,
}

/// A surveyed point element: corridor node, wall vertex, or POI — they
/// share one shape and differ only in tags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    /// Level string (`"2"` or `"1;3"`)
    pub level: String,
    #[serde(default)]
    pub tags: Tags,
}

/// A surveyed connectivity edge between two point identifiers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub edge: [String; 2],
}

/// One complete building-data payload, fetched once per session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyData {
    #[serde(default)]
    pub polygons: Vec<PolygonRecord>,
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub walls: Vec<NodeRecord>,
    #[serde(default)]
    pub pois: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl SurveyData {
    /// Decode a payload from its JSON representation.
    pub fn from_json(text: &str) -> Result<Self> {
        let data = serde_json::from_str(text)?;
        Ok(data)
    }

    /// Decode a payload from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build the spatial graph from this payload.
    pub fn build(&self) -> FeatureCollection {
        build_graph(
            &self.polygons,
            &self.nodes,
            &self.walls,
            &self.pois,
            &self.edges,
        )
    }
}
