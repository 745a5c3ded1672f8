use crate::{CellParams, PhysicalConstants};

mod correlations;

/// The literature cell at the given grid size and applied current.
pub fn standard_cell(grid: usize, current: f64) -> CellParams {
    CellParams::standard(grid, PhysicalConstants::default().with_applied_current(current)).unwrap()
}
