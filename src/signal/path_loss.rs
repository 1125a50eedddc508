//! Log-distance path-loss model.
//!
//! The model is `rssi = -10 * N * log10(d) + A`, where `A` is the signal
//! strength one meter from the transmitter and `N` is the path-loss
//! exponent. Inverting for distance:
//!
//! ```text
//! d = 10 ^ ((rssi - A) / (-10 * N))
//! ```
//!
//! Both parameters come from [`SignalConfig`](crate::config::SignalConfig)
//! and need per-building tuning for good absolute accuracy; the solver
//! only needs them to be consistent across access points.

/// Estimated distance in meters for a received signal strength.
///
/// Any finite input produces a finite non-negative distance; parameter
/// sanity (`n > 0`) is the caller's responsibility.
#[inline]
pub fn distance_from_rssi(rssi: i32, path_loss_at_one_meter: f64, path_loss_exponent: f64) -> f64 {
    10f64.powf((rssi as f64 - path_loss_at_one_meter) / (-10.0 * path_loss_exponent))
}

/// Convert a link-quality percentage to an RSSI value in dBm.
///
/// Some scan backends report quality (0-100) instead of dBm; the
/// conversion `rssi = quality / 2 - 100` is bounded to [-100, -50].
#[inline]
pub fn rssi_from_quality(quality: f64) -> f64 {
    if quality <= 0.0 {
        -100.0
    } else if quality >= 100.0 {
        -50.0
    } else {
        quality / 2.0 - 100.0
    }
}
