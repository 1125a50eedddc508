//! Signal-strength processing: the path-loss model and the access-point
//! matcher that correlates a live scan against surveyed access points.

mod matcher;
mod path_loss;

pub use matcher::{
    match_key, match_networks, KnownAccessPoint, MatchedNetwork, ObservedNetwork,
};
pub use path_loss::{distance_from_rssi, rssi_from_quality};
