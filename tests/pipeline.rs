//! End-to-end pipeline tests: survey payload → spatial graph, scan →
//! matcher → solver → level vote → estimate → nearest navigable node.

use antar_nav::{
    nearest_node, GeoPoint, KnownAccessPoint, LocalisationSession, NavConfig, ObservedNetwork,
    SurveyData,
};

fn init_logs() {
    env_logger::try_init().ok();
}

/// RSSI the default signal model (A = -50, N = 2) maps to `distance`,
/// rounded to whole dBm the way a real scan reports it.
fn rssi_for_distance(distance: f64) -> i32 {
    (-20.0 * distance.log10() - 50.0).round() as i32
}

fn known_ap(bssid: &str, lon: f64, lat: f64, level: i32) -> KnownAccessPoint {
    KnownAccessPoint {
        bssid: bssid.to_string(),
        position: GeoPoint::new(lon, lat),
        level,
        name: format!("AP {bssid}"),
    }
}

/// Scan observations consistent with standing at `source`, one per AP,
/// with the multi-radio final-digit offset applied to the BSSIDs.
fn scan_at(source: GeoPoint, aps: &[KnownAccessPoint]) -> Vec<ObservedNetwork> {
    aps.iter()
        .map(|ap| {
            let mut bssid = ap.bssid.clone();
            bssid.pop();
            bssid.push('7'); // other radio of the same AP
            ObservedNetwork {
                bssid,
                rssi: rssi_for_distance(source.distance(&ap.position)),
                ssid: Some("eduroam".to_string()),
            }
        })
        .collect()
}

fn survey_fixture() -> SurveyData {
    let text = r#"{
        "polygons": [
            {
                "id": "room-214",
                "vertices": [[4.0, 0.0], [4.0, 8.0], [10.0, 8.0], [10.0, 0.0], [4.0, 0.0]],
                "level": "2",
                "tags": {"indoor": "room", "name": "Lab 2.14"}
            }
        ],
        "nodes": [
            {"id": "n-corridor-a", "lat": 4.0, "lon": 3.0, "level": "2", "tags": {"indoor": "way"}},
            {"id": "n-corridor-b", "lat": 9.0, "lon": 9.0, "level": "2", "tags": {"indoor": "way"}},
            {"id": "n-stairwell", "lat": 0.0, "lon": 0.0, "level": "1;3", "tags": {"indoor": "way"}}
        ],
        "walls": [
            {"id": "w1", "lat": 0.0, "lon": 4.0, "level": "2", "tags": {"indoor": "wall"}},
            {"id": "w2", "lat": 8.0, "lon": 4.0, "level": "2", "tags": {"indoor": "wall"}}
        ],
        "pois": [
            {"id": "poi-printer", "lat": 4.1, "lon": 3.1, "level": "2", "tags": {"indoor": "poi", "name": "Printer"}}
        ],
        "edges": [
            {"edge": ["n-corridor-a", "n-corridor-b"]},
            {"edge": ["w1", "w2"]},
            {"edge": ["n-corridor-b", "n-outside-subset"]}
        ]
    }"#;
    SurveyData::from_json(text).expect("fixture payload decodes")
}

fn ap_fixture() -> Vec<KnownAccessPoint> {
    vec![
        known_ap("aa:aa:aa:aa:aa:a0", 0.0, 0.0, 2),
        known_ap("bb:bb:bb:bb:bb:b0", 10.0, 0.0, 2),
        known_ap("cc:cc:cc:cc:cc:c0", 0.0, 10.0, 2),
        known_ap("dd:dd:dd:dd:dd:d0", 10.0, 10.0, 3),
    ]
}

#[test]
fn full_cycle_produces_fix_and_start_node() {
    init_logs();
    let graph = survey_fixture().build();
    let aps = ap_fixture();
    let source = GeoPoint::new(3.0, 4.0);

    let mut session = LocalisationSession::new(NavConfig::default());
    let result = session.localise_detailed(&scan_at(source, &aps), &aps);
    let estimate = result.estimate;

    assert!(!estimate.stale);
    assert_eq!(estimate.level, 2, "three of four APs vote level 2");
    assert!(
        estimate.point.distance(&source) < 1.5,
        "estimate {:?} too far from source",
        estimate.point
    );
    assert!(estimate.error >= 0.0, "spread must be surfaced on a fix");
    assert_eq!(result.used.len(), 4);
    assert_eq!(result.candidates.len(), 4, "C(4,3) candidate points");

    // The estimate lands near (3,4); corridor node A at (lon 3, lat 4)
    // is the nearest navigable node on level 2. The printer POI sits even
    // closer but is not a way node.
    let start = nearest_node(&estimate, &graph).expect("start node on level 2");
    assert_eq!(start.source_id, "n-corridor-a");
}

#[test]
fn failed_scan_falls_back_to_stale_estimate() {
    init_logs();
    let aps = ap_fixture();
    let source = GeoPoint::new(3.0, 4.0);

    let mut session = LocalisationSession::new(NavConfig::default());
    let first = session.localise(&scan_at(source, &aps), &aps);
    assert!(!first.stale);

    // Radio scan failed (permission denied, empty list): the previous
    // coordinate comes back marked stale, and the pipeline still finds
    // the same start node.
    let second = session.localise(&[], &aps);
    assert!(second.stale);
    assert_eq!(second.point, first.point);
    assert_eq!(second.level, first.level);
    assert_eq!(second.error, -1.0);

    let graph = survey_fixture().build();
    let start = nearest_node(&second, &graph).expect("stale estimate still yields a start");
    assert_eq!(start.source_id, "n-corridor-a");
}

#[test]
fn first_cycle_without_signal_has_no_start_node() {
    let graph = survey_fixture().build();
    let mut session = LocalisationSession::new(NavConfig::default());

    let estimate = session.localise(&[], &ap_fixture());
    assert!(estimate.stale);
    assert!(!estimate.has_fix());
    assert_eq!(estimate.level, -1);
    assert!(nearest_node(&estimate, &graph).is_none());
}

#[test]
fn graph_built_from_payload_has_swapped_axes_and_stable_order() {
    let graph = survey_fixture().build();

    // areas(1) + wall connectors(1) + node connectors(1; the edge into
    // the unqueried subset is skipped) + nodes(3) + pois(1)
    assert_eq!(graph.len(), 7);

    // Survey vertex [lat 4.0, lon 0.0] surfaces as (lon 0.0, lat 4.0).
    match &graph.features[0].geometry {
        antar_nav::Geometry::Polygon(ring) => {
            assert_eq!(ring[0], GeoPoint::new(0.0, 4.0));
        }
        other => panic!("expected area first, got {other:?}"),
    }

    // The stairwell spans levels 1-3 and is navigable from each.
    let stairs = graph.by_source_id("n-stairwell").expect("stairwell node");
    assert_eq!(stairs.levels, vec![1, 2, 3]);
}

#[test]
fn multi_floor_session_tracks_level_changes() {
    let aps = ap_fixture();
    let mut session = LocalisationSession::new(NavConfig::default());

    // Standing among the level-2 APs.
    let estimate = session.localise(&scan_at(GeoPoint::new(3.0, 4.0), &aps), &aps);
    assert_eq!(estimate.level, 2);

    // A second cycle near the same spot keeps fixing fresh estimates.
    let estimate = session.localise(&scan_at(GeoPoint::new(4.0, 4.0), &aps), &aps);
    assert!(!estimate.stale);
    assert_eq!(estimate.level, 2);
}
