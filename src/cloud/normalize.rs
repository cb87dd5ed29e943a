//! Stroke normalization: resample, scale, translate, discretize.
//!
//! Each step returns a fresh sequence; input slices are read-only.

use super::{CloudParams, GridCoord};
use crate::geometry::{distance, path_length, Point};
use crate::util::math::discretize;
use crate::util::{GestureError, GestureResult};

/// Minimum number of points a stroke needs before it can be normalized.
pub const MIN_POINTS: usize = 2;

/// Runs the full normalization pipeline on a raw stroke.
///
/// Returns exactly `params.num_points` normalized points together with their
/// grid coordinates.
pub fn normalize(
    points: &[Point],
    params: &CloudParams,
) -> GestureResult<(Vec<Point>, Vec<GridCoord>)> {
    params.validate()?;
    if points.len() < MIN_POINTS {
        return Err(GestureError::InsufficientPoints {
            got: points.len(),
            needed: MIN_POINTS,
        });
    }
    let length = path_length(points);
    if !length.is_finite() {
        return Err(GestureError::DegenerateStroke {
            reason: "non-finite path length",
        });
    }
    if length <= 0.0 {
        return Err(GestureError::DegenerateStroke {
            reason: "zero path length",
        });
    }

    let resampled = resample(points, params.num_points);
    let scaled = scale(&resampled);
    let centered = translate_to(&scaled, 0.0, 0.0);
    let grid = make_grid_coords(&centered, params.max_int_coord);
    Ok((centered, grid))
}

/// Resamples a path into `n` points evenly spaced by arc length.
///
/// Interpolated points are spliced into a private working copy so the walk
/// continues from them; no point is interpolated across a stroke boundary.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    debug_assert!(n >= 2);
    let mut out = Vec::with_capacity(n);
    let Some(&first) = points.first() else {
        return out;
    };
    out.push(first);

    let interval = path_length(points) / (n - 1) as f64;
    if interval > 0.0 && interval.is_finite() {
        let mut work = points.to_vec();
        let mut acc = 0.0;
        let mut i = 1;
        while i < work.len() {
            let prev = work[i - 1];
            let cur = work[i];
            if prev.stroke_id == cur.stroke_id {
                let d = distance(&prev, &cur);
                if acc + d >= interval {
                    let t = (interval - acc) / d;
                    let q = Point::new(
                        prev.x + t * (cur.x - prev.x),
                        prev.y + t * (cur.y - prev.y),
                        cur.stroke_id,
                    );
                    out.push(q);
                    work.insert(i, q);
                    acc = 0.0;
                } else {
                    acc += d;
                }
            }
            i += 1;
        }
    }

    // Rounding can leave the walk one point short of the end.
    let last = points[points.len() - 1];
    if out.len() == n - 1 {
        out.push(last);
    }
    out.truncate(n);
    while out.len() < n {
        out.push(last);
    }
    out
}

/// Uniformly scales points so the longer bounding-box side spans one unit.
///
/// Aspect ratio is preserved. A box with zero extent is only shifted.
pub fn scale(points: &[Point]) -> Vec<Point> {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    let size = (max_x - min_x).max(max_y - min_y);
    let size = if size > 0.0 { size } else { 1.0 };
    points
        .iter()
        .map(|p| Point::new((p.x - min_x) / size, (p.y - min_y) / size, p.stroke_id))
        .collect()
}

/// Arithmetic mean of the point coordinates.
pub fn centroid(points: &[Point]) -> (f64, f64) {
    if points.is_empty() {
        return (0.0, 0.0);
    }
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let count = points.len() as f64;
    (sx / count, sy / count)
}

/// Shifts points so their centroid lands on `(ox, oy)`.
pub fn translate_to(points: &[Point], ox: f64, oy: f64) -> Vec<Point> {
    let (cx, cy) = centroid(points);
    points
        .iter()
        .map(|p| Point::new(p.x + ox - cx, p.y + oy - cy, p.stroke_id))
        .collect()
}

/// Discretizes normalized coordinates onto the `[0, max_int - 1]` grid.
pub fn make_grid_coords(points: &[Point], max_int: u32) -> Vec<GridCoord> {
    points
        .iter()
        .map(|p| GridCoord {
            x: discretize(p.x, max_int),
            y: discretize(p.y, max_int),
        })
        .collect()
}
