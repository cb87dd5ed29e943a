//! Point representation and elementary distance functions.

pub mod input;

/// A raw stroke sample in device coordinates.
///
/// `stroke_id` groups samples that belong to one continuous stroke. Path
/// length and resampling never bridge two different stroke ids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Stroke the sample belongs to.
    pub stroke_id: u32,
}

impl Point {
    /// Creates a point on the given stroke.
    pub fn new(x: f64, y: f64, stroke_id: u32) -> Self {
        Self { x, y, stroke_id }
    }

    /// Creates a point on the single stroke used for one-stroke gestures.
    pub fn single(x: f64, y: f64) -> Self {
        Self::new(x, y, SINGLE_STROKE_ID)
    }
}

/// Stroke id assigned to every point of a single-stroke gesture.
pub const SINGLE_STROKE_ID: u32 = 1;

/// Squared Euclidean distance between two points.
#[inline]
pub fn squared_distance(p: &Point, q: &Point) -> f64 {
    let dx = q.x - p.x;
    let dy = q.y - p.y;
    dx * dx + dy * dy
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: &Point, q: &Point) -> f64 {
    squared_distance(p, q).sqrt()
}

/// Length traversed by a path, skipping the jumps between strokes.
pub fn path_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .filter(|pair| pair[0].stroke_id == pair[1].stroke_id)
        .map(|pair| distance(&pair[0], &pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{distance, path_length, squared_distance, Point};

    #[test]
    fn distances_follow_pythagoras() {
        let p = Point::single(1.0, 2.0);
        let q = Point::single(4.0, 6.0);
        assert_eq!(squared_distance(&p, &q), 25.0);
        assert_eq!(distance(&p, &q), 5.0);
        assert_eq!(distance(&q, &p), 5.0);
    }

    #[test]
    fn path_length_sums_consecutive_segments() {
        let pts = [
            Point::single(0.0, 0.0),
            Point::single(3.0, 4.0),
            Point::single(3.0, 10.0),
        ];
        assert!((path_length(&pts) - 11.0).abs() < 1e-12);
    }

    #[test]
    fn path_length_breaks_at_stroke_boundaries() {
        let pts = [
            Point::new(0.0, 0.0, 1),
            Point::new(0.0, 5.0, 1),
            Point::new(100.0, 100.0, 2),
            Point::new(100.0, 102.0, 2),
        ];
        assert!((path_length(&pts) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn path_length_of_single_point_is_zero() {
        assert_eq!(path_length(&[Point::single(1.0, 1.0)]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }
}
