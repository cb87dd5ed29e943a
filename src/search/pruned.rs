//! Pruned matching of a candidate against a single template.

use super::bound::{lower_bounds, offset_step};
use super::greedy::cloud_distance;
use crate::cloud::PointCloud;

/// Work counters gathered while matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Templates visited.
    pub templates: usize,
    /// Exact greedy evaluations performed.
    pub exact_evaluations: usize,
    /// Start offsets skipped because their lower bound was not below the best.
    pub pruned_offsets: usize,
}

impl SearchStats {
    /// Adds the counters of `other` to `self`.
    pub fn merge(&mut self, other: SearchStats) {
        self.templates += other.templates;
        self.exact_evaluations += other.exact_evaluations;
        self.pruned_offsets += other.pruned_offsets;
    }
}

/// Best distance between `candidate` and `template`, or `min_so_far` if no
/// sampled start offset can beat it.
///
/// Bounds are computed in both directions; an offset is matched exactly only
/// while its bound is below the running best, which tightens after every
/// exact evaluation.
pub fn cloud_match(
    candidate: &PointCloud,
    template: &PointCloud,
    min_so_far: f64,
    stats: &mut SearchStats,
) -> f64 {
    let n = candidate.len();
    let step = offset_step(n);
    let forward = lower_bounds(candidate, template, step);
    let backward = lower_bounds(template, candidate, step);

    let mut best = min_so_far;
    for (j, start) in (0..n).step_by(step).enumerate() {
        if forward[j] < best {
            stats.exact_evaluations += 1;
            best = best.min(cloud_distance(
                candidate.points(),
                template.points(),
                start,
                best,
            ));
        } else {
            stats.pruned_offsets += 1;
        }
        if backward[j] < best {
            stats.exact_evaluations += 1;
            best = best.min(cloud_distance(
                template.points(),
                candidate.points(),
                start,
                best,
            ));
        } else {
            stats.pruned_offsets += 1;
        }
    }
    best
}
