//! Exact greedy cloud distance with early abandoning.

use crate::geometry::{squared_distance, Point};

/// Greedy weighted matching cost between two equally sized point sequences.
///
/// Walks `pts1` from `start`, wrapping around, and pairs each point with the
/// nearest still-unmatched point of `pts2` (lowest index on ties). Weights
/// fall from `n` to 1. As soon as the running sum reaches `min_so_far` the
/// partial sum is returned; such a value only proves the pairing is not better
/// than `min_so_far` and is not the true distance.
pub fn cloud_distance(pts1: &[Point], pts2: &[Point], start: usize, min_so_far: f64) -> f64 {
    let n = pts1.len().min(pts2.len());
    if n == 0 {
        return 0.0;
    }
    let mut unmatched: Vec<usize> = (0..n).collect();
    let mut sum = 0.0;
    for k in 0..n {
        let p = &pts1[(start + k) % n];
        let mut best = f64::INFINITY;
        let mut best_pos = 0usize;
        for (pos, &j) in unmatched.iter().enumerate() {
            let d = squared_distance(p, &pts2[j]);
            if d < best {
                best = d;
                best_pos = pos;
            }
        }
        unmatched.remove(best_pos);
        sum += (n - k) as f64 * best;
        if sum >= min_so_far {
            return sum;
        }
    }
    sum
}
