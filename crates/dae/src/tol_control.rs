use nalgebra::{
    allocator::Allocator, DefaultAllocator, Dim, Matrix, OVector, Storage, StorageMut, U1,
};

use crate::traits::DaeReal;

/// Relative and absolute tolerances of a run, used to build error weights.
#[derive(Clone, Debug, PartialEq)]
pub enum TolControl<T, D>
where
    D: Dim,
    DefaultAllocator: Allocator<T, D>,
    OVector<T, D>: PartialEq,
{
    /// Specifies scalar relative and absolute tolerances.
    ///
    /// The error weight vector `ewt` is set according to:
    ///
    /// ```math
    /// ewt[i] = 1 / (rtol * abs(ycur[i]) + atol), i=0,...,Neq-1
    /// ```
    SS {
        /// relative tolerance
        rtol: T,
        /// scalar absolute tolerance
        atol: T,
    },
    /// Specifies a scalar relative tolerance and per-component absolute tolerances.
    ///
    /// The error weight vector `ewt` is set according to:
    ///
    /// ```math
    /// ewt[i] = 1 / (rtol * abs(ycur[i]) + atol[i]), i=0,...,Neq-1
    /// ```
    SV {
        /// relative tolerance
        rtol: T,
        /// vector absolute tolerance
        atol: OVector<T, D>,
    },
}

impl<T, D> TolControl<T, D>
where
    T: DaeReal,
    D: Dim,
    DefaultAllocator: Allocator<T, D>,
{
    pub fn new_ss(rtol: T, atol: T) -> Self {
        Self::SS { rtol, atol }
    }

    pub fn new_sv(rtol: T, atol: OVector<T, D>) -> Self {
        Self::SV { rtol, atol }
    }

    /// Error weights for `ycur` in a freshly allocated vector.
    pub fn ewt<S>(&self, ycur: &Matrix<T, D, U1, S>) -> OVector<T, D>
    where
        S: Storage<T, D>,
    {
        let (nrows, _) = ycur.shape_generic();
        let mut ewt = OVector::zeros_generic(nrows, U1);
        self.ewt_set(ycur, &mut ewt);
        ewt
    }

    /// Loads the error weight vector `ewt` for the current values `ycur`.
    pub fn ewt_set<SA, SB>(&self, ycur: &Matrix<T, D, U1, SA>, ewt: &mut Matrix<T, D, U1, SB>)
    where
        SA: Storage<T, D>,
        SB: StorageMut<T, D>,
    {
        match self {
            Self::SS { rtol, atol } => {
                ycur.iter().zip(ewt.iter_mut()).for_each(|(ycur, ewt)| {
                    *ewt = (*rtol * ycur.abs() + *atol).recip();
                });
            }
            Self::SV { rtol, atol } => {
                ycur.iter()
                    .zip(ewt.iter_mut())
                    .zip(atol.iter())
                    .for_each(|((ycur, ewt), atol)| {
                        *ewt = (*rtol * ycur.abs() + *atol).recip();
                    });
            }
        }
    }
}
