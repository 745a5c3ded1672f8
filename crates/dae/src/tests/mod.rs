use nalgebra::*;

use crate::traits::Residual;

mod initial;

/// Two differential equations with distinct mass coefficients and one algebraic constraint.
///
/// ```math
/// 2 y0' + y0 - 1 = 0
/// y1' - y0 y2 = 0
/// y0 + y1 + y2 - 1 = 0
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Mixed {}

impl Residual<f64, U3> for Mixed {
    fn res<SA, SB, SC>(
        &self,
        _tt: f64,
        yy: &Matrix<f64, U3, U1, SA>,
        yp: &Matrix<f64, U3, U1, SB>,
        rr: &mut Matrix<f64, U3, U1, SC>,
    ) where
        SA: Storage<f64, U3>,
        SB: Storage<f64, U3>,
        SC: StorageMut<f64, U3>,
    {
        rr[0] = 2.0 * yp[0] + yy[0] - 1.0;
        rr[1] = yp[1] - yy[0] * yy[2];
        rr[2] = yy[0] + yy[1] + yy[2] - 1.0;
    }
}

/// A component flagged differential whose equation never mentions its derivative.
#[derive(Clone, Copy, Debug)]
pub struct Pinned {}

impl Residual<f64, Dyn> for Pinned {
    fn res<SA, SB, SC>(
        &self,
        _tt: f64,
        yy: &Matrix<f64, Dyn, U1, SA>,
        yp: &Matrix<f64, Dyn, U1, SB>,
        rr: &mut Matrix<f64, Dyn, U1, SC>,
    ) where
        SA: Storage<f64, Dyn>,
        SB: Storage<f64, Dyn>,
        SC: StorageMut<f64, Dyn>,
    {
        rr[0] = yy[0] - 3.0;
        rr[1] = 0.5 * yp[1] + yy[1];
    }
}
