//! Floor-level selection by majority vote.

use crate::signal::MatchedNetwork;

/// Fixed-size vote tally over floor levels.
///
/// Each matched network votes once for its surveyed AP's level. The
/// selected level is the first index reaching the maximum count — a
/// stable ordinal scan, so ties resolve deterministically to the lower
/// level on every run. Levels outside `0..len` do not vote.
#[derive(Clone, Debug)]
pub struct LevelTally {
    counts: Vec<u32>,
}

impl LevelTally {
    /// Create an empty tally covering `max_levels` floor indices.
    pub fn new(max_levels: usize) -> Self {
        Self {
            counts: vec![0; max_levels],
        }
    }

    /// Tally built from one cycle's matched networks.
    pub fn from_networks(networks: &[MatchedNetwork], max_levels: usize) -> Self {
        let mut tally = Self::new(max_levels);
        for network in networks {
            tally.record(network.level);
        }
        tally
    }

    /// Record one vote for `level`. Out-of-range levels are ignored.
    pub fn record(&mut self, level: i32) {
        if level >= 0 && (level as usize) < self.counts.len() {
            self.counts[level as usize] += 1;
        }
    }

    /// Vote count for one level.
    pub fn count(&self, level: i32) -> u32 {
        if level >= 0 && (level as usize) < self.counts.len() {
            self.counts[level as usize]
        } else {
            0
        }
    }

    /// The level with the most votes, or `None` if nothing voted.
    /// First-max-wins: a strict `>` scan from level 0 upward.
    pub fn selected(&self) -> Option<i32> {
        let mut best: Option<(usize, u32)> = None;
        for (level, &count) in self.counts.iter().enumerate() {
            if count > 0 {
                match best {
                    Some((_, best_count)) if count <= best_count => {}
                    _ => best = Some((level, count)),
                }
            }
        }
        best.map(|(level, _)| level as i32)
    }
}
