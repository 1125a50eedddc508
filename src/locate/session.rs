//! Localisation session: the one piece of state carried between cycles.
//!
//! A cycle runs matcher → solver → level vote synchronously and to
//! completion. When a cycle cannot produce a fix (too few matched
//! networks, or every triplet degenerate) the session returns a *stale*
//! copy of the previous accepted estimate instead of a discontinuous
//! jump, and keeps the previous estimate unchanged for the next cycle.
//! The host must not start a new cycle while one is in flight.

use crate::config::NavConfig;
use crate::core::GeoPoint;
use crate::locate::level::LevelTally;
use crate::locate::solver::{IterateAll, SolveStrategy};
use crate::signal::{match_networks, KnownAccessPoint, MatchedNetwork, ObservedNetwork};
use serde::{Deserialize, Serialize};

/// A position estimate for one localisation cycle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionEstimate {
    /// Estimated position, or `GeoPoint::NO_FIX` when no fix was ever
    /// produced
    pub point: GeoPoint,
    /// Selected floor level, or -1 when unknown
    pub level: i32,
    /// True when this is a carried-over previous estimate rather than a
    /// fresh fix; the point then equals the prior accepted estimate's
    pub stale: bool,
    /// Standard deviation of the solver's surviving candidate cloud, as a
    /// spread/confidence measure; -1.0 when there was no cloud (no fix)
    pub error: f64,
}

impl PositionEstimate {
    /// The estimate returned when no fix exists and no previous estimate
    /// is available to fall back on.
    pub fn no_fix() -> Self {
        Self {
            point: GeoPoint::NO_FIX,
            level: -1,
            stale: true,
            error: -1.0,
        }
    }

    /// Whether this estimate carries a real coordinate.
    pub fn has_fix(&self) -> bool {
        self.point != GeoPoint::NO_FIX
    }
}

/// Full output of one localisation cycle, for callers that want to
/// visualise the candidate cloud or the contributing networks.
#[derive(Clone, Debug)]
pub struct CycleResult {
    /// The position estimate (also stored as the session's previous
    /// estimate when fresh)
    pub estimate: PositionEstimate,
    /// Candidate points from every solved triplet; empty on a no-fix
    /// cycle
    pub candidates: Vec<GeoPoint>,
    /// Matched networks that contributed to the fix, sorted by ascending
    /// distance; empty on a no-fix cycle
    pub used: Vec<MatchedNetwork>,
}

/// Owns the localisation pipeline and the previous-estimate carry-over.
pub struct LocalisationSession {
    config: NavConfig,
    strategy: Box<dyn SolveStrategy>,
    previous: Option<PositionEstimate>,
}

impl LocalisationSession {
    /// Session with the reference strategy (all triplets + outlier
    /// rejection).
    pub fn new(config: NavConfig) -> Self {
        Self::with_strategy(config, Box::new(IterateAll))
    }

    /// Session with an explicit resolution strategy.
    pub fn with_strategy(config: NavConfig, strategy: Box<dyn SolveStrategy>) -> Self {
        Self {
            config,
            strategy,
            previous: None,
        }
    }

    /// The last accepted (non-stale) estimate, if any cycle has fixed.
    pub fn last_fix(&self) -> Option<&PositionEstimate> {
        self.previous.as_ref()
    }

    /// Run one localisation cycle and return just the estimate.
    pub fn localise(
        &mut self,
        observed: &[ObservedNetwork],
        known: &[KnownAccessPoint],
    ) -> PositionEstimate {
        self.localise_detailed(observed, known).estimate
    }

    /// Run one localisation cycle, returning the estimate together with
    /// the candidate cloud and contributing networks.
    pub fn localise_detailed(
        &mut self,
        observed: &[ObservedNetwork],
        known: &[KnownAccessPoint],
    ) -> CycleResult {
        let matched = match_networks(observed, known, &self.config.signal);

        if matched.len() < self.config.solver.min_networks {
            log::info!(
                "insufficient matched networks ({} < {}); returning stale estimate",
                matched.len(),
                self.config.solver.min_networks
            );
            return self.stale_fallback();
        }

        let tally = LevelTally::from_networks(&matched, self.config.solver.max_levels);

        match self.strategy.resolve(&matched, &self.config.solver) {
            Some(solution) => {
                let estimate = PositionEstimate {
                    point: solution.point,
                    level: tally.selected().unwrap_or(-1),
                    stale: false,
                    error: solution.spread,
                };
                self.previous = Some(estimate);
                CycleResult {
                    estimate,
                    candidates: solution.candidates,
                    used: solution.used,
                }
            }
            None => {
                log::warn!("solver produced no fix; returning stale estimate");
                self.stale_fallback()
            }
        }
    }

    /// Carry the previous accepted estimate forward, marked stale. The
    /// stored previous estimate itself stays untouched so a later failed
    /// cycle falls back to the same accepted fix.
    fn stale_fallback(&self) -> CycleResult {
        let estimate = match &self.previous {
            Some(prev) => PositionEstimate {
                point: prev.point,
                level: prev.level,
                stale: true,
                error: -1.0,
            },
            None => PositionEstimate::no_fix(),
        };
        CycleResult {
            estimate,
            candidates: Vec::new(),
            used: Vec::new(),
        }
    }
}
