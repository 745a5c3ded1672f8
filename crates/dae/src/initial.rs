use nalgebra::{allocator::Allocator, DefaultAllocator, Dim, OVector, U1};

use crate::{norm_wrms::NormWRMS, tol_control::TolControl, traits::DaeReal, Error, Residual};

/// Everything an implicit integrator needs to start a run: the start time, a state guess with
/// its derivatives, the differential/algebraic split and optional sign constraints.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialCondition<T, D>
where
    D: Dim,
    DefaultAllocator: Allocator<T, D>,
{
    pub t0: T,
    pub yy: OVector<T, D>,
    pub yp: OVector<T, D>,
    /// `1` for differential components, `0` for algebraic ones.
    pub id: OVector<T, D>,
    /// `0` for unconstrained components, `1` for components that must stay `>= 0`.
    pub constraints: Option<OVector<T, D>>,
}

impl<T, D> InitialCondition<T, D>
where
    T: DaeReal,
    D: Dim,
    DefaultAllocator: Allocator<T, D>,
{
    pub fn new(
        t0: T,
        yy: OVector<T, D>,
        yp: OVector<T, D>,
        id: OVector<T, D>,
    ) -> Result<Self, Error> {
        let expected = yy.len();
        for found in [yp.len(), id.len()] {
            if found != expected {
                return Err(Error::DimensionMismatch { expected, found });
            }
        }
        Ok(Self {
            t0,
            yy,
            yp,
            id,
            constraints: None,
        })
    }

    pub fn with_constraints(mut self, constraints: OVector<T, D>) -> Result<Self, Error> {
        if constraints.len() != self.yy.len() {
            return Err(Error::DimensionMismatch {
                expected: self.yy.len(),
                found: constraints.len(),
            });
        }
        self.constraints = Some(constraints);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.yy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.yy.is_empty()
    }

    pub fn is_differential(&self, i: usize) -> bool {
        self.id[i] != T::zero()
    }

    /// Mask selecting the algebraic components (the complement of `id`).
    pub fn algebraic_mask(&self) -> OVector<T, D> {
        self.id.map(|id| if id == T::zero() { T::one() } else { T::zero() })
    }

    /// Evaluate the problem residual at the stored `(t0, yy, yp)`.
    pub fn residual<P>(&self, problem: &P) -> OVector<T, D>
    where
        P: Residual<T, D>,
    {
        let (nrows, _) = self.yy.shape_generic();
        let mut rr = OVector::zeros_generic(nrows, U1);
        problem.res(self.t0, &self.yy, &self.yp, &mut rr);
        rr
    }

    /// Fill `yp` so the differential equations are satisfied at `yy`.
    ///
    /// The residual is assumed affine in each differential derivative with no coupling between
    /// components, which holds for mass matrices that are diagonal in `y'`. The derivative
    /// coefficient `m` of every differential component is found by evaluating with `y' = 1`, then
    /// `yp = -F(t0, yy, 0) / m`. Algebraic components keep `yp = 0`, as does any differential
    /// component whose coefficient comes out zero.
    pub fn correct_derivatives<P>(&mut self, problem: &P)
    where
        P: Residual<T, D>,
    {
        self.yp.fill(T::zero());
        let r0 = self.residual(problem);

        let mut unit = self.yp.clone();
        unit
            .iter_mut()
            .zip(self.id.iter())
            .filter(|(_, id)| **id != T::zero())
            .for_each(|(p, _)| *p = T::one());

        let mut r1 = r0.clone();
        problem.res(self.t0, &self.yy, &unit, &mut r1);

        for i in 0..self.len() {
            if !self.is_differential(i) {
                continue;
            }
            let m = r1[i] - r0[i];
            if m != T::zero() {
                self.yp[i] = -r0[i] / m;
            } else {
                log::trace!("component {i} has no derivative coefficient, keeping yp = 0");
            }
        }
    }

    /// Weighted RMS norm of the residual over the algebraic components, with weights built from
    /// `tolerances` at `yy`. A value below `1` means the guess is already consistent to within
    /// the requested tolerances.
    pub fn algebraic_residual_norm<P>(&self, problem: &P, tolerances: &TolControl<T, D>) -> T
    where
        P: Residual<T, D>,
    {
        let rr = self.residual(problem);
        rr.norm_wrms_masked(&tolerances.ewt(&self.yy), &self.algebraic_mask())
    }
}
