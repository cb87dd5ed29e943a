//! Lower-bound estimation for cloud matching.
//!
//! Each point of the source cloud is paired with the approximate nearest point
//! of the target cloud through the target's lookup table. A weighted sum of
//! those distances gives the bound for start offset 0; prefix sums derive the
//! bound for every other sampled offset in constant time.

use crate::cloud::PointCloud;
use crate::geometry::squared_distance;

/// Step between sampled start offsets, `floor(sqrt(n))`, never below 1.
pub fn offset_step(n: usize) -> usize {
    ((n as f64).sqrt().floor() as usize).max(1)
}

/// Computes one lower bound per start offset `0, step, 2 * step, ...`.
///
/// `from` is walked point by point; `to` is queried through its lookup table.
/// Both clouds must hold the same number of points and `step` must be at
/// least 1.
pub fn lower_bounds(from: &PointCloud, to: &PointCloud, step: usize) -> Vec<f64> {
    let n = from.len();
    if n == 0 {
        return Vec::new();
    }
    let step = step.max(1);
    let targets = to.points();
    let lut = to.lut();

    let mut prefix = Vec::with_capacity(n);
    let mut running = 0.0;
    let mut at_zero = 0.0;
    for (i, (p, coord)) in from.points().iter().zip(from.grid()).enumerate() {
        let d = squared_distance(p, &targets[lut.nearest(*coord)]);
        running += d;
        prefix.push(running);
        at_zero += (n - i) as f64 * d;
    }

    let mut bounds = Vec::with_capacity(n.div_ceil(step));
    bounds.push(at_zero);
    for start in (step..n).step_by(step) {
        bounds.push(at_zero + start as f64 * running - n as f64 * prefix[start - 1]);
    }
    bounds
}
