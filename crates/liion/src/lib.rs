//! A lithium-ion cell as a one-dimensional DAE.
//!
//! The cell is split into anode, separator and cathode along a uniform grid of `GRID` nodes. The
//! state carries five fields per node (see [`Field`]): electrolyte concentration, solid and
//! electrolyte potentials, interfacial current density and particle-surface concentration.
//! [`CellParams`] implements [`dae::Residual`], and [`initial_profile`] prepares the starting
//! point for an implicit integrator.
//!
//! ```no_run
//! use liion::{initial_profile, CellParams, PhysicalConstants};
//!
//! let cell = CellParams::standard(100, PhysicalConstants::default()).unwrap();
//! let ic = initial_profile(&cell);
//! let rr = liion::residual(ic.t0, &ic.yy, &ic.yp, &cell);
//! assert_eq!(rr.len(), 500);
//! ```

pub mod cell;
pub mod constants;
pub mod correlations;
mod error;
pub mod initial;
pub mod layout;
pub mod region;
pub mod residual;

pub use cell::{boundary_indices, CellParams};
pub use constants::PhysicalConstants;
pub use error::Error;
pub use initial::initial_profile;
pub use layout::{Field, Node, StateLayout, StateView};
pub use region::{Material, OpenCircuit, Region, RegionParams};
pub use residual::{first_non_finite, residual};

#[cfg(test)]
mod tests;
