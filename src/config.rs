//! Configuration loading for the localisation pipeline.
//!
//! All tunables live in a single TOML file with `[signal]` and `[solver]`
//! sections. Every field has a default, so an empty file (or no file at
//! all, via `NavConfig::default()`) yields the reference behavior.

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub signal: SignalConfig,
    #[serde(default)]
    pub solver: SolverConfig,
}

/// Path-loss model parameters.
///
/// These are applied, not fitted: tuning them for a given building is an
/// offline concern.
#[derive(Clone, Debug, Deserialize)]
pub struct SignalConfig {
    /// Signal strength measured at one meter from the transmitter, in dBm
    /// (the `A` of the log-distance model, default: -50.0)
    #[serde(default = "default_path_loss_a")]
    pub path_loss_at_one_meter: f64,

    /// Path-loss exponent (the `N` of the log-distance model; typically
    /// 2-3 for indoor environments, default: 2.0)
    #[serde(default = "default_path_loss_n")]
    pub path_loss_exponent: f64,
}

/// Multilateration solver parameters.
#[derive(Clone, Debug, Deserialize)]
pub struct SolverConfig {
    /// Minimum matched networks required for a position fix (default: 3)
    #[serde(default = "default_min_networks")]
    pub min_networks: usize,

    /// Outlier rejection threshold, in standard deviations of distance
    /// from the candidate-cloud centroid (default: 2.0)
    #[serde(default = "default_rejection_sigma")]
    pub rejection_sigma: f64,

    /// Number of floor levels covered by the level-vote tally; matched
    /// networks on levels outside `0..max_levels` do not vote
    /// (default: 8)
    #[serde(default = "default_max_levels")]
    pub max_levels: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            path_loss_at_one_meter: default_path_loss_a(),
            path_loss_exponent: default_path_loss_n(),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_networks: default_min_networks(),
            rejection_sigma: default_rejection_sigma(),
            max_levels: default_max_levels(),
        }
    }
}

impl NavConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}

fn default_path_loss_a() -> f64 {
    -50.0
}

fn default_path_loss_n() -> f64 {
    2.0
}

fn default_min_networks() -> usize {
    3
}

fn default_rejection_sigma() -> f64 {
    2.0
}

fn default_max_levels() -> usize {
    8
}
