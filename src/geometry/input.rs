//! Conversion from loosely-typed host input into [`Point`]s.
//!
//! Hosts hand over strokes either as `{x, y}` objects or `[x, y]` pairs.
//! Entries that lack a finite coordinate are dropped and counted, never
//! coerced.

use super::{Point, SINGLE_STROKE_ID};

/// One entry of a stroke as supplied by the host application.
#[derive(Clone, Debug, PartialEq)]
pub enum InputPoint {
    /// An object with optional `x` and `y` members.
    Object { x: Option<f64>, y: Option<f64> },
    /// A coordinate array; the first two values are `x` and `y`.
    Pair(Vec<f64>),
    /// Anything else the host could not interpret.
    Malformed,
}

impl InputPoint {
    /// Shorthand for a well-formed object entry.
    pub fn xy(x: f64, y: f64) -> Self {
        Self::Object {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Returns the coordinates if both are present and finite.
    pub fn coords(&self) -> Option<(f64, f64)> {
        let (x, y) = match self {
            Self::Object {
                x: Some(x),
                y: Some(y),
            } => (*x, *y),
            Self::Pair(values) if values.len() >= 2 => (values[0], values[1]),
            _ => return None,
        };
        (x.is_finite() && y.is_finite()).then_some((x, y))
    }
}

impl From<(f64, f64)> for InputPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::xy(x, y)
    }
}

/// Points that survived conversion plus the number of discarded entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conversion {
    /// Valid points, all on the single-stroke id.
    pub points: Vec<Point>,
    /// Entries that were dropped as malformed.
    pub discarded: usize,
}

/// Converts host input into single-stroke points, dropping malformed entries.
pub fn convert_points(input: &[InputPoint]) -> Conversion {
    let mut points = Vec::with_capacity(input.len());
    let mut discarded = 0usize;
    for entry in input {
        match entry.coords() {
            Some((x, y)) => points.push(Point::new(x, y, SINGLE_STROKE_ID)),
            None => discarded += 1,
        }
    }
    Conversion { points, discarded }
}
