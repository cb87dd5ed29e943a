//! Coarse nearest-point lookup table over the discretized coordinate space.

use super::GridCoord;
use crate::util::math::lut_cell;

/// Square table mapping each coarse cell to the nearest cloud point index.
///
/// Built once per cloud at a cost of `size² × points` and reused by every
/// comparison against that cloud.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProximityLut {
    size: usize,
    scale: u32,
    cells: Vec<u16>,
}

impl ProximityLut {
    /// Builds the table for the given grid coordinates.
    ///
    /// Each cell stores the index of the point whose scaled grid coordinate is
    /// nearest under squared distance; ties keep the lowest index.
    pub fn build(grid: &[GridCoord], size: usize, scale: u32) -> Self {
        let scaled: Vec<(i64, i64)> = grid
            .iter()
            .map(|g| {
                (
                    lut_cell(g.x, scale, size) as i64,
                    lut_cell(g.y, scale, size) as i64,
                )
            })
            .collect();

        let mut cells = vec![0u16; size * size];
        for x in 0..size {
            for y in 0..size {
                let mut best = i64::MAX;
                let mut best_idx = 0usize;
                for (idx, &(row, col)) in scaled.iter().enumerate() {
                    let d = (row - x as i64).pow(2) + (col - y as i64).pow(2);
                    if d < best {
                        best = d;
                        best_idx = idx;
                    }
                }
                cells[x * size + y] = best_idx as u16;
            }
        }

        Self { size, scale, cells }
    }

    /// Returns the side length of the table.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the grid-to-cell scale factor.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns the point index stored at cell `(x, y)`.
    pub fn at(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.cells[x * self.size + y] as usize)
    }

    /// Returns the approximate nearest point index for a grid coordinate.
    #[inline]
    pub fn nearest(&self, coord: GridCoord) -> usize {
        let x = lut_cell(coord.x, self.scale, self.size);
        let y = lut_cell(coord.y, self.scale, self.size);
        self.cells[x * self.size + y] as usize
    }
}
