//! # Antar-Nav: WiFi Indoor Positioning Core
//!
//! The engineering core of an indoor-navigation client: turns a noisy
//! set of scanned WiFi signal strengths into an estimated
//! (position, floor level), and turns raw surveyed building data into a
//! queryable, level-aware spatial graph.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use antar_nav::{LocalisationSession, NavConfig, SurveyData, nearest_node};
//!
//! # fn scan() -> Vec<antar_nav::ObservedNetwork> { Vec::new() }
//! # fn known_aps() -> Vec<antar_nav::KnownAccessPoint> { Vec::new() }
//! // Building data is fetched once per session by an external collaborator.
//! let survey = SurveyData::from_json_file("survey.json").unwrap();
//! let graph = survey.build();
//!
//! let mut session = LocalisationSession::new(NavConfig::default());
//! let estimate = session.localise(&scan(), &known_aps());
//! if let Some(start) = nearest_node(&estimate, &graph) {
//!     println!("path query starts at {}", start.source_id);
//! }
//! ```
//!
//! ## Data Flow
//!
//! ```text
//!  raw scan ──► Access-Point Matcher ──► Multilateration Solver ──┐
//!                       │                                         │
//!                       └────────► Level Selector ────────────────┤
//!                                                                 ▼
//!  survey records ──► Spatial Graph Builder ──► Nearest-Node ◄── Position
//!                                               Search            Estimate
//!                                                 │
//!                                                 ▼
//!                                       (external path query)
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: geographic point type and point-cloud statistics
//! - [`config`]: TOML-backed tunables for the signal model and solver
//! - [`signal`]: path-loss model and access-point matching
//! - [`locate`]: trilateration, solver strategies, level vote, session
//! - [`graph`]: survey records, feature collection, nearest-node search
//!
//! The core is single-threaded and synchronous; the only state carried
//! between localisation cycles is the previous estimate owned by
//! [`LocalisationSession`]. All I/O (radio scans, permission handling,
//! remote graph retrieval, path routing) belongs to external
//! collaborators.

pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod locate;
pub mod signal;

// Re-export main types at crate root
pub use config::{NavConfig, SignalConfig, SolverConfig};
pub use core::GeoPoint;
pub use error::{NavError, Result};
pub use graph::{
    build_graph, nearest_node, Feature, FeatureCollection, Geometry, SurveyData, Tags,
};
pub use locate::{
    CycleResult, FirstThree, IterateAll, LastThree, LevelTally, LocalisationSession,
    PositionEstimate, Solution, SolveStrategy,
};
pub use signal::{
    distance_from_rssi, match_networks, KnownAccessPoint, MatchedNetwork, ObservedNetwork,
};
