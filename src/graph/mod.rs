//! The level-aware spatial graph: raw survey records, the feature
//! collection built from them, and the nearest-navigable-node query.

mod builder;
mod feature;
mod level_range;
mod nearest;
mod records;

pub use builder::build_graph;
pub use feature::{Feature, FeatureCollection, Geometry, Tags};
pub use level_range::parse_levels;
pub use nearest::nearest_node;
pub use records::{EdgeRecord, NodeRecord, PolygonRecord, SurveyData};
