use thiserror::Error;

use crate::{cell::MIN_GRID, region::Region};

/// Configuration errors, detected while assembling a [`crate::CellParams`].
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("A grid of {grid} nodes is too small, at least {} are needed", MIN_GRID)]
    GridTooSmall { grid: usize },

    #[error("The {region} must have a positive length, got {length}")]
    NonPositiveLength { region: Region, length: f64 },

    /// Porosity must lie in `(0, 1]`, and in `(0, 1)` for an electrode.
    #[error("The {region} porosity {eps} is out of range")]
    InvalidPorosity { region: Region, eps: f64 },

    #[error("The {region} has no solid capacity (c_s_max must be positive)")]
    ZeroSolidCapacity { region: Region },

    #[error("The {region} must have a positive electronic conductivity")]
    NonPositiveConductivity { region: Region },

    #[error("The {region} must have a positive solid-phase diffusivity")]
    NonPositiveSolidDiffusivity { region: Region },

    #[error("The {region} particles must have a positive radius")]
    NonPositiveRadius { region: Region },

    #[error("The {region} material has no open-circuit potential fit")]
    MissingOpenCircuit { region: Region },

    /// `0 < sep_index < cath_index < grid - 1` does not hold.
    #[error("Degenerate region boundaries: sep_index={sep_index}, cath_index={cath_index} on a grid of {grid}")]
    DegenerateBoundaries {
        sep_index: usize,
        cath_index: usize,
        grid: usize,
    },

    #[error("The {region} parameters were derived for a grid of {found} nodes, expected {expected}")]
    RegionMismatch {
        region: Region,
        expected: usize,
        found: usize,
    },
}
