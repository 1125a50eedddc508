//! Access-point matcher.
//!
//! Correlates the networks visible in one scan against the catalog of
//! surveyed access points. An AP broadcasting on several radios/bands
//! offsets the last hex digit of its BSSID per radio, so correlation uses
//! a *match key*: the BSSID with its final character dropped. The same
//! key also de-duplicates the scan — a single AP seen on 2.4 and 5 GHz
//! must only be counted once, or trilateration would weight it double.

use crate::config::SignalConfig;
use crate::core::GeoPoint;
use crate::signal::path_loss::distance_from_rssi;
use serde::{Deserialize, Serialize};

/// One network seen by the radio-scan collaborator. Ephemeral; produced
/// fresh each scan cycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObservedNetwork {
    /// Hardware address as reported by the scan
    pub bssid: String,
    /// Received signal strength in dBm
    pub rssi: i32,
    /// Human-readable network name, when broadcast
    #[serde(default)]
    pub ssid: Option<String>,
}

/// A surveyed access point with a known position. Loaded once per session
/// from building data; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnownAccessPoint {
    /// Hardware address from the survey; may differ from an observed
    /// BSSID in its final character
    pub bssid: String,
    /// Surveyed position in (lon, lat) order
    pub position: GeoPoint,
    /// Floor level the AP is mounted on
    pub level: i32,
    /// Survey name for the AP
    pub name: String,
}

/// The union of an observed network and its surveyed access point,
/// annotated with the estimated distance. Lives only for one
/// localisation cycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchedNetwork {
    /// Match key (BSSID minus its final character)
    pub key: String,
    /// Surveyed AP position
    pub position: GeoPoint,
    /// Surveyed AP floor level
    pub level: i32,
    /// Observed signal strength in dBm
    pub rssi: i32,
    /// Distance estimated by the path-loss model, in meters
    pub distance: f64,
}

/// Derive the match key for a hardware address: the address with its
/// final character dropped.
pub fn match_key(bssid: &str) -> &str {
    match bssid.char_indices().last() {
        Some((idx, _)) => &bssid[..idx],
        None => bssid,
    }
}

/// Correlate observed networks against the surveyed access-point catalog.
///
/// For each observed network, in scan order:
/// - derive its match key;
/// - skip it if an earlier observation already claimed that key
///   (first-observation-wins de-duplication);
/// - take the first known AP whose address starts with the key.
///
/// Observations with no surveyed counterpart are dropped silently — an
/// unknown network is expected, not an error.
pub fn match_networks(
    observed: &[ObservedNetwork],
    known: &[KnownAccessPoint],
    signal: &SignalConfig,
) -> Vec<MatchedNetwork> {
    let mut matched: Vec<MatchedNetwork> = Vec::new();

    for network in observed {
        let key = match_key(&network.bssid);

        if matched.iter().any(|m| m.key == key) {
            continue;
        }

        if let Some(ap) = known.iter().find(|ap| ap.bssid.starts_with(key)) {
            matched.push(MatchedNetwork {
                key: key.to_string(),
                position: ap.position,
                level: ap.level,
                rssi: network.rssi,
                distance: distance_from_rssi(
                    network.rssi,
                    signal.path_loss_at_one_meter,
                    signal.path_loss_exponent,
                ),
            });
        }
    }

    log::debug!(
        "matched {} of {} observed networks against {} known APs",
        matched.len(),
        observed.len(),
        known.len()
    );

    matched
}
