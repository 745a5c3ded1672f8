//! Problem-side contract for implicit DAE integrators.
//!
//! A model implements [`Residual`] and hands an [`InitialCondition`] to whichever IDA-style
//! engine drives the integration. The engine is not part of this crate.

mod error;
pub use error::Error;
mod initial;
pub use initial::InitialCondition;
pub mod norm_wrms;
pub mod tol_control;
pub use tol_control::TolControl;
pub mod traits;
pub use traits::{DaeReal, Residual};

#[cfg(test)]
mod tests;
