//! Multilateration strategies.
//!
//! The reference strategy, [`IterateAll`], trilaterates *every* unordered
//! triplet of matched networks and averages the resulting point cloud
//! after iterative outlier rejection. The combinatorial sweep is
//! intentional: single-triplet fixes are hostage to one bad distance
//! estimate, while the cloud centroid averages the noise out. The older
//! single-triplet heuristics ([`FirstThree`], [`LastThree`]) are kept
//! behind the same trait for comparison runs.

use crate::config::SolverConfig;
use crate::core::{cloud_stats, GeoPoint};
use crate::locate::trilateration::trilaterate_triplet;
use crate::signal::MatchedNetwork;
use std::cmp::Ordering;

/// A successful position fix from one strategy invocation.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Final position estimate
    pub point: GeoPoint,
    /// Standard deviation of the surviving candidate cloud around the
    /// estimate; 0.0 for single-triplet strategies
    pub spread: f64,
    /// Every candidate point the strategy produced, before outlier
    /// rejection (useful for visualisation)
    pub candidates: Vec<GeoPoint>,
    /// The matched networks that contributed, sorted by ascending
    /// estimated distance
    pub used: Vec<MatchedNetwork>,
}

/// A position-resolution heuristic over matched networks.
///
/// Implementations return `None` when no fix is possible: fewer networks
/// than the configured minimum, or every triplet degenerate. Neither is
/// an error; the session falls back to the previous estimate.
pub trait SolveStrategy {
    fn resolve(&self, networks: &[MatchedNetwork], config: &SolverConfig) -> Option<Solution>;
}

/// Sort matched networks by ascending estimated distance. The sort is
/// stable, so networks at equal distance keep their scan order.
fn sort_by_distance(networks: &[MatchedNetwork]) -> Vec<MatchedNetwork> {
    let mut sorted = networks.to_vec();
    sorted.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

fn solve_single_triplet(triplet: &[MatchedNetwork]) -> Option<Solution> {
    let anchors = [
        triplet[0].position,
        triplet[1].position,
        triplet[2].position,
    ];
    let distances = [triplet[0].distance, triplet[1].distance, triplet[2].distance];

    let point = trilaterate_triplet(anchors, distances)?;
    Some(Solution {
        point,
        spread: 0.0,
        candidates: vec![point],
        used: triplet.to_vec(),
    })
}

/// Reference strategy: all C(n,3) triplets, iterative outlier rejection,
/// centroid of the survivors.
#[derive(Clone, Copy, Debug, Default)]
pub struct IterateAll;

impl SolveStrategy for IterateAll {
    fn resolve(&self, networks: &[MatchedNetwork], config: &SolverConfig) -> Option<Solution> {
        // Three anchors is the geometric floor even if the configured
        // minimum is lower.
        if networks.len() < config.min_networks.max(3) {
            return None;
        }

        let sorted = sort_by_distance(networks);
        let n = sorted.len();

        let mut candidates = Vec::new();
        let mut discarded = 0usize;
        for i in 0..n - 2 {
            for j in (i + 1)..n - 1 {
                for k in (j + 1)..n {
                    let anchors = [sorted[i].position, sorted[j].position, sorted[k].position];
                    let distances = [sorted[i].distance, sorted[j].distance, sorted[k].distance];
                    match trilaterate_triplet(anchors, distances) {
                        Some(point) => candidates.push(point),
                        None => discarded += 1,
                    }
                }
            }
        }

        if discarded > 0 {
            log::debug!("discarded {discarded} degenerate triplets");
        }
        if candidates.is_empty() {
            log::warn!("every triplet was degenerate; no candidate cloud");
            return None;
        }

        let (point, spread) = reject_outliers(candidates.clone(), config.rejection_sigma);

        Some(Solution {
            point,
            spread,
            candidates,
            used: sorted,
        })
    }
}

/// Iteratively discard points farther than `sigma` standard deviations
/// from the cloud centroid, until a pass removes nothing. A pass that
/// would empty the cloud entirely aborts rejection instead, keeping the
/// current cloud.
///
/// Returns the centroid and standard deviation of the surviving cloud.
/// `points` must be non-empty.
fn reject_outliers(mut points: Vec<GeoPoint>, sigma: f64) -> (GeoPoint, f64) {
    let mut passes = 0usize;
    loop {
        let (centroid, std_dev) = cloud_stats(&points);

        let kept: Vec<GeoPoint> = points
            .iter()
            .copied()
            .filter(|p| p.distance(&centroid) < sigma * std_dev)
            .collect();

        if kept.len() == points.len() || kept.is_empty() {
            log::debug!(
                "outlier rejection settled after {passes} passes: {} points, spread {std_dev:.6}",
                points.len()
            );
            return (centroid, std_dev);
        }

        points = kept;
        passes += 1;
    }
}

/// Historic heuristic: trilaterate only the three closest networks.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstThree;

impl SolveStrategy for FirstThree {
    fn resolve(&self, networks: &[MatchedNetwork], config: &SolverConfig) -> Option<Solution> {
        if networks.len() < config.min_networks.max(3) {
            return None;
        }
        let sorted = sort_by_distance(networks);
        solve_single_triplet(&sorted[..3])
    }
}

/// Historic heuristic: trilaterate only the three farthest networks.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastThree;

impl SolveStrategy for LastThree {
    fn resolve(&self, networks: &[MatchedNetwork], config: &SolverConfig) -> Option<Solution> {
        if networks.len() < config.min_networks.max(3) {
            return None;
        }
        let sorted = sort_by_distance(networks);
        solve_single_triplet(&sorted[sorted.len() - 3..])
    }
}
