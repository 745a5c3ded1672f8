//! Traits a DAE problem implements for the integrator

use nalgebra::{Dim, Matrix, RealField, Scalar, Storage, StorageMut, U1};
use num_traits::NumCast;

/// An implicit DAE system `F(t, y, y') = 0` as seen by the integrator.
///
/// Implementations must be pure: the integrator calls `res` many times per step (once per
/// nonlinear iteration and once per difference-quotient Jacobian column), possibly from several
/// threads against the same problem, so no state may be cached between calls.
pub trait Residual<T, D: Dim> {
    /// This function computes the problem residual for given values of the independent variable `tt`, state vector `yy`, and derivative `yp`.
    ///
    /// # Arguments
    ///
    /// * `tt` is the current value of the independent variable `t`.
    /// * `yy` is the current value of the dependent variable vector, `y(t)`.
    /// * `yp` is the current value of `y'(t)`.
    /// * `rr` is the output residual vector `F(t, y, y')`.
    ///
    /// There is no error return. A trial iterate the model cannot evaluate (a negative
    /// concentration under a square root, say) shows up as a non-finite entry in `rr`, which the
    /// integrator treats as a recoverable failure and retries with a smaller step.
    fn res<SA, SB, SC>(
        &self,
        tt: T,
        yy: &Matrix<T, D, U1, SA>,
        yp: &Matrix<T, D, U1, SB>,
        rr: &mut Matrix<T, D, U1, SC>,
    ) where
        SA: Storage<T, D>,
        SB: Storage<T, D>,
        SC: StorageMut<T, D>;
}

/// Trait for real numbers used by DAE problems
pub trait DaeReal: Scalar + RealField + Copy + NumCast {}

impl<T> DaeReal for T where T: Scalar + RealField + Copy + NumCast {}
