//! Normalized point clouds and their precomputed lookup tables.
//!
//! A [`PointCloud`] is the unit of comparison: a stroke resampled to a fixed
//! number of points, scaled to unit size, centered on the origin, and paired
//! with a [`ProximityLut`] that answers approximate nearest-point queries in
//! constant time.

pub mod lut;
pub mod normalize;

pub use lut::ProximityLut;

use crate::geometry::Point;
use crate::trace::trace_event;
use crate::util::{GestureError, GestureResult};

/// Sizing parameters shared by every cloud compared within one recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloudParams {
    /// Number of points each stroke is resampled to.
    pub num_points: usize,
    /// Side length of the square proximity lookup table.
    pub lut_size: usize,
    /// Exclusive upper bound of the integer grid coordinates.
    pub max_int_coord: u32,
}

impl Default for CloudParams {
    fn default() -> Self {
        Self {
            num_points: 32,
            lut_size: 64,
            max_int_coord: 1024,
        }
    }
}

impl CloudParams {
    /// Factor that maps grid coordinates onto lookup-table cells.
    pub fn lut_scale(&self) -> u32 {
        self.max_int_coord / self.lut_size as u32
    }

    /// Checks that the parameters describe a usable cloud layout.
    pub fn validate(&self) -> GestureResult<()> {
        if self.num_points < 2 {
            return Err(GestureError::InvalidConfig("num_points must be at least 2"));
        }
        if self.num_points > u16::MAX as usize {
            return Err(GestureError::InvalidConfig("num_points exceeds lookup index range"));
        }
        if self.lut_size == 0 {
            return Err(GestureError::InvalidConfig("lut_size must be positive"));
        }
        if self.max_int_coord < 2 || (self.max_int_coord as usize) < self.lut_size {
            return Err(GestureError::InvalidConfig(
                "max_int_coord must be at least lut_size and 2",
            ));
        }
        if self.max_int_coord as usize % self.lut_size != 0 {
            return Err(GestureError::InvalidConfig(
                "max_int_coord must be a multiple of lut_size",
            ));
        }
        Ok(())
    }
}

/// Integer coordinates of a normalized point, used only for LUT indexing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridCoord {
    /// Discretized horizontal coordinate in `[0, max_int_coord - 1]`.
    pub x: u32,
    /// Discretized vertical coordinate in `[0, max_int_coord - 1]`.
    pub y: u32,
}

/// A named, normalized stroke with its proximity lookup table.
///
/// Clouds are immutable once built.
#[derive(Clone, Debug)]
pub struct PointCloud {
    name: String,
    points: Vec<Point>,
    grid: Vec<GridCoord>,
    lut: ProximityLut,
}

impl PointCloud {
    /// Normalizes `points` and builds the lookup table.
    ///
    /// The caller's slice is never modified.
    pub fn new(
        name: impl Into<String>,
        points: &[Point],
        params: &CloudParams,
    ) -> GestureResult<Self> {
        let (points, grid) = normalize::normalize(points, params)?;
        let lut = ProximityLut::build(&grid, params.lut_size, params.lut_scale());
        let name = name.into();
        trace_event!("cloud_built", points = points.len(), lut_size = lut.size());
        Ok(Self {
            name,
            points,
            grid,
            lut,
        })
    }

    /// Returns the cloud name; candidates built during recognition are unnamed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalized points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the discretized coordinates, parallel to [`Self::points`].
    pub fn grid(&self) -> &[GridCoord] {
        &self.grid
    }

    /// Returns the proximity lookup table.
    pub fn lut(&self) -> &ProximityLut {
        &self.lut
    }

    /// Returns the number of normalized points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the cloud holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
