//! Numeric helpers for discretizing normalized coordinates.

/// Maps a coordinate assumed to lie in `[-1, 1]` onto `[0, max_int - 1]`.
pub(crate) fn discretize(coord: f64, max_int: u32) -> u32 {
    let scaled = ((coord + 1.0) / 2.0 * f64::from(max_int - 1)).round();
    scaled.clamp(0.0, f64::from(max_int - 1)) as u32
}

/// Scales a grid coordinate down to a lookup-table cell, clamped to the table.
pub(crate) fn lut_cell(grid: u32, scale: u32, lut_size: usize) -> usize {
    let cell = (f64::from(grid) / f64::from(scale)).round() as usize;
    cell.min(lut_size - 1)
}

#[cfg(test)]
mod tests {
    use super::{discretize, lut_cell};

    #[test]
    fn discretize_maps_unit_range_to_grid_bounds() {
        assert_eq!(discretize(-1.0, 1024), 0);
        assert_eq!(discretize(1.0, 1024), 1023);
        assert_eq!(discretize(0.0, 1024), 512);
    }

    #[test]
    fn discretize_clamps_out_of_range_values() {
        assert_eq!(discretize(-1.5, 1024), 0);
        assert_eq!(discretize(1.5, 1024), 1023);
    }

    #[test]
    fn lut_cell_rounds_and_clamps() {
        assert_eq!(lut_cell(0, 16, 64), 0);
        assert_eq!(lut_cell(7, 16, 64), 0);
        assert_eq!(lut_cell(8, 16, 64), 1);
        assert_eq!(lut_cell(1023, 16, 64), 63);
    }
}
