//! Exact trilateration of a single anchor triplet.
//!
//! Standard three-circle intersection (en.wikipedia.org/wiki/Trilateration)
//! in a local frame: `ex` points from the first anchor to the second,
//! `ey` completes the right-handed basis through the third. Building-scale
//! coordinates are close enough to planar that the spherical correction is
//! dropped entirely.

use crate::core::GeoPoint;

/// Denominators below this are treated as degenerate geometry.
const DEGENERACY_EPSILON: f64 = 1e-12;

/// Best-fit intersection of three circles centered on `anchors` with radii
/// `distances`.
///
/// Returns `None` for degenerate triplets: coincident anchors,
/// near-collinear anchors, or distances that push the arithmetic out of
/// the finite range. A discarded triplet is not an error — the solver
/// simply gets no candidate point from it.
pub fn trilaterate_triplet(anchors: [GeoPoint; 3], distances: [f64; 3]) -> Option<GeoPoint> {
    let [p1, p2, p3] = anchors;
    let [r1, r2, r3] = distances;

    // Local frame: ex along p1->p2.
    let p21 = p2 - p1;
    let d = p21.length();
    if d < DEGENERACY_EPSILON {
        return None;
    }
    let ex = p21 * (1.0 / d);

    // ey spans the component of p1->p3 perpendicular to ex; collinear
    // anchors leave nothing to span.
    let p31 = p3 - p1;
    let i = ex.dot(&p31);
    let ey_raw = p31 - ex * i;
    let j = ey_raw.length();
    if j < DEGENERACY_EPSILON {
        return None;
    }
    let ey = ey_raw * (1.0 / j);

    let x = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let y = (r1 * r1 - r3 * r3 + i * i + j * j) / (2.0 * j) - (i / j) * x;

    let point = p1 + ex * x + ey * y;
    if point.is_finite() {
        Some(point)
    } else {
        None
    }
}
