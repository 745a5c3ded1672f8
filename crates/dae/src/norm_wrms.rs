use nalgebra::{
    allocator::SameShapeAllocator,
    constraint::{SameNumberOfColumns, SameNumberOfRows, ShapeConstraint},
    DefaultAllocator, Dim, Matrix, RealField, Scalar, Storage, U1,
};
use num_traits::NumCast;

pub trait NormWRMS<T, R1: Dim, C1: Dim, SA> {
    /// Weighted root-mean-square norm
    fn norm_wrms<R2, SB>(&self, rhs: &Matrix<T, R2, U1, SB>) -> T
    where
        T: RealField,
        R2: Dim,
        SB: Storage<T, R2, U1>,
        DefaultAllocator: SameShapeAllocator<T, R1, C1, R2, U1>,
        ShapeConstraint: SameNumberOfRows<R1, R2> + SameNumberOfColumns<C1, U1>;

    /// Weighted root-mean-square norm over the components where `mask > 0`.
    ///
    /// The sum is still divided by the full length, so a mask that selects everything gives
    /// the same value as [`NormWRMS::norm_wrms`].
    fn norm_wrms_masked<R2, SB, SC>(
        &self,
        w: &Matrix<T, R2, U1, SB>,
        mask: &Matrix<T, R2, U1, SC>,
    ) -> T
    where
        T: RealField,
        R2: Dim,
        SB: Storage<T, R2, U1>,
        SC: Storage<T, R2, U1>,
        DefaultAllocator: SameShapeAllocator<T, R1, C1, R2, U1>,
        ShapeConstraint: SameNumberOfRows<R1, R2> + SameNumberOfColumns<C1, U1>;
}

impl<T, R1: Dim, C1: Dim, SA> NormWRMS<T, R1, C1, SA> for Matrix<T, R1, C1, SA>
where
    T: Scalar + RealField + NumCast + Copy,
    SA: Storage<T, R1, C1>,
{
    fn norm_wrms<R2, SB>(&self, w: &Matrix<T, R2, U1, SB>) -> T
    where
        R2: Dim,
        SB: Storage<T, R2, U1>,
        DefaultAllocator: SameShapeAllocator<T, R1, C1, R2, U1>,
        ShapeConstraint: SameNumberOfRows<R1, R2> + SameNumberOfColumns<C1, U1>,
    {
        let len: T = nalgebra::convert(self.nrows() as f64);
        (self
            .component_mul(&w)
            .iter()
            .map(|x| x.powi(2))
            .fold(T::zero(), |acc, x| acc + x)
            / len)
            .sqrt()
    }

    fn norm_wrms_masked<R2, SB, SC>(
        &self,
        w: &Matrix<T, R2, U1, SB>,
        mask: &Matrix<T, R2, U1, SC>,
    ) -> T
    where
        R2: Dim,
        SB: Storage<T, R2, U1>,
        SC: Storage<T, R2, U1>,
        DefaultAllocator: SameShapeAllocator<T, R1, C1, R2, U1>,
        ShapeConstraint: SameNumberOfRows<R1, R2> + SameNumberOfColumns<C1, U1>,
    {
        let len: T = nalgebra::convert(self.nrows() as f64);
        (self
            .component_mul(&w)
            .iter()
            .zip(mask.iter())
            .filter(|(_, m)| **m > T::zero())
            .map(|(x, _)| x.powi(2))
            .fold(T::zero(), |acc, x| acc + x)
            / len)
            .sqrt()
    }
}
