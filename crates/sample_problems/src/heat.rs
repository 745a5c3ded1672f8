use dae::{InitialCondition, Residual};
use nalgebra::{DVector, Dyn, Matrix, Storage, StorageMut, U1};

/// The heat equation on `[0, 1]` with Dirichlet boundaries, discretised on a uniform grid:
///
/// ```math
/// u_t = alpha * u_xx
/// u(0) = left, u(1) = right
/// ```
///
/// Interior nodes use the second-order central difference; the two boundary nodes carry the
/// algebraic equations `u_0 - left = 0` and `u_{M-1} - right = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heat1D {
    pub grid: usize,
    pub alpha: f64,
    pub left: f64,
    pub right: f64,
}

impl Heat1D {
    /// Problem on `grid` nodes with diffusivity `alpha` and zero boundary values.
    ///
    /// # Panics
    ///
    /// If `grid < 3`, which leaves no interior node to carry the PDE.
    pub fn new(grid: usize, alpha: f64) -> Self {
        assert!(grid >= 3, "Heat1D needs at least one interior node");
        Self {
            grid,
            alpha,
            left: 0.0,
            right: 0.0,
        }
    }

    pub fn with_boundary(mut self, left: f64, right: f64) -> Self {
        self.left = left;
        self.right = right;
        self
    }

    pub fn dx(&self) -> f64 {
        1.0 / (self.grid as f64 - 1.0)
    }

    /// `u = 16 x (1 - x)` with the boundary values imposed at both ends.
    pub fn parabolic_initial_condition(&self) -> InitialCondition<f64, Dyn> {
        let dx = self.dx();
        let mut u0 = DVector::from_fn(self.grid, |i, _| {
            let x = dx * i as f64;
            16.0 * x * (1.0 - x)
        });
        u0[0] = self.left;
        u0[self.grid - 1] = self.right;
        self.build(u0)
    }

    /// Start from an arbitrary profile `u0`, which must have one value per grid node.
    pub fn initial_condition_from(
        &self,
        u0: DVector<f64>,
    ) -> Result<InitialCondition<f64, Dyn>, dae::Error> {
        if u0.len() != self.grid {
            return Err(dae::Error::DimensionMismatch {
                expected: self.grid,
                found: u0.len(),
            });
        }
        Ok(self.build(u0))
    }

    fn build(&self, u0: DVector<f64>) -> InitialCondition<f64, Dyn> {
        let n = self.grid;
        let mut id = DVector::from_element(n, 1.0);
        id[0] = 0.0;
        id[n - 1] = 0.0;

        let mut ic = InitialCondition {
            t0: 0.0,
            yy: u0,
            yp: DVector::zeros(n),
            id,
            constraints: Some(DVector::from_element(n, 1.0)),
        };
        ic.correct_derivatives(self);
        ic
    }
}

impl Residual<f64, Dyn> for Heat1D {
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
        let n = self.grid;
        let coeff = self.alpha / self.dx().powi(2);

        rr[0] = yy[0] - self.left;
        rr[n - 1] = yy[n - 1] - self.right;
        for i in 1..n - 1 {
            rr[i] = yp[i] - coeff * (yy[i + 1] + yy[i - 1] - 2.0 * yy[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test_log::test]
    fn parabolic_profile_is_consistent() {
        let heat = Heat1D::new(100, 1.0);
        let ic = heat.parabolic_initial_condition();

        assert_eq!(ic.id[0], 0.0);
        assert_eq!(ic.id[99], 0.0);
        assert!(ic.id.rows(1, 98).iter().all(|id| *id == 1.0));

        // the central difference is exact for a quadratic: u_xx = -32
        for i in 2..98 {
            assert_relative_eq!(ic.yp[i], -32.0, max_relative = 1e-9);
        }
        assert_eq!(ic.yp[0], 0.0);

        let rr = ic.residual(&heat);
        assert_abs_diff_eq!(rr, DVector::zeros(100), epsilon = 1e-9);
    }

    #[test]
    fn derivative_is_minus_residual() {
        let heat = Heat1D::new(11, 0.5);
        let u0 = DVector::from_fn(11, |i, _| (i as f64 * 0.3).sin());
        let mut r0 = DVector::zeros(11);
        heat.res(0.0, &u0, &DVector::zeros(11), &mut r0);

        let ic = heat.initial_condition_from(u0).unwrap();
        for i in 1..10 {
            assert_relative_eq!(ic.yp[i], -r0[i], max_relative = 1e-12);
        }
    }

    #[test_log::test]
    fn step_boundary_is_left_to_the_engine() {
        // zero profile with a unit value imposed on the right: only that boundary is off
        let heat = Heat1D::new(50, 0.5).with_boundary(0.0, 1.0);
        let ic = heat.initial_condition_from(DVector::zeros(50)).unwrap();
        let rr = ic.residual(&heat);
        assert_eq!(rr[49], -1.0);
        assert!(rr.rows(0, 49).iter().all(|r| *r == 0.0));

        let tol = dae::TolControl::new_ss(1e-5, 1e-5);
        assert!(ic.algebraic_residual_norm(&heat, &tol) > 1.0);
    }

    #[test]
    #[should_panic(expected = "at least one interior node")]
    fn grid_without_interior_panics() {
        let _ = Heat1D::new(2, 1.0);
    }

    #[test]
    fn profile_length_is_checked() {
        let heat = Heat1D::new(10, 1.0);
        assert_eq!(
            heat.initial_condition_from(DVector::zeros(9)).unwrap_err(),
            dae::Error::DimensionMismatch {
                expected: 10,
                found: 9
            }
        );
    }
}
