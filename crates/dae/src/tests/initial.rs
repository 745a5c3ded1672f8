use approx::assert_relative_eq;
use nalgebra::*;

use super::{Mixed, Pinned};
use crate::{Error, InitialCondition, TolControl};

#[test_log::test]
fn rejects_mismatched_lengths() {
    let err = InitialCondition::new(
        0.0,
        DVector::from_element(4, 1.0),
        DVector::zeros(4),
        DVector::from_element(3, 1.0),
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::DimensionMismatch {
            expected: 4,
            found: 3
        }
    );

    let ic = InitialCondition::new(0.0, DVector::zeros(2), DVector::zeros(2), DVector::zeros(2))
        .unwrap();
    assert!(ic.with_constraints(DVector::zeros(5)).is_err());
}

#[test_log::test]
fn corrected_derivatives_zero_the_differential_residual() {
    let mut ic = InitialCondition::new(
        0.0,
        vector![0.2, 0.3, 0.5],
        vector![9.0, 9.0, 9.0],
        vector![1.0, 1.0, 0.0],
    )
    .unwrap();

    ic.correct_derivatives(&Mixed {});

    assert_relative_eq!(ic.yp, vector![0.4, 0.1, 0.0], epsilon = 1e-15);
    let rr = ic.residual(&Mixed {});
    assert_relative_eq!(rr, Vector3::zeros(), epsilon = 1e-15);
}

#[test_log::test]
fn inconsistent_algebraic_part_is_left_alone() {
    let mut ic = InitialCondition::new(
        0.0,
        vector![0.2, 0.3, 0.7],
        Vector3::zeros(),
        vector![1.0, 1.0, 0.0],
    )
    .unwrap();
    ic.correct_derivatives(&Mixed {});

    let rr = ic.residual(&Mixed {});
    assert_relative_eq!(rr[0], 0.0, epsilon = 1e-15);
    assert_relative_eq!(rr[1], 0.0, epsilon = 1e-15);
    assert_relative_eq!(rr[2], 0.2, epsilon = 1e-15);
    assert_eq!(ic.yp[2], 0.0);

    // rr[2] * ewt[2] / sqrt(3), ewt[2] = 1 / (0.1 * 0.7 + 0.01)
    let tol = TolControl::new_ss(0.1, 0.01);
    let norm = ic.algebraic_residual_norm(&Mixed {}, &tol);
    assert_relative_eq!(norm, 0.2 / 0.08 / 3f64.sqrt(), epsilon = 1e-12);
}

#[test_log::test]
fn zero_coefficient_keeps_zero_derivative() {
    let mut ic = InitialCondition::new(
        0.0,
        DVector::from_vec(vec![1.0, 2.0]),
        DVector::from_vec(vec![5.0, 5.0]),
        DVector::from_vec(vec![1.0, 1.0]),
    )
    .unwrap();
    ic.correct_derivatives(&Pinned {});
    assert_eq!(ic.yp, DVector::from_vec(vec![0.0, -4.0]));
}

#[test]
fn algebraic_mask_inverts_id() {
    let ic = InitialCondition::new(
        1.0,
        DVector::from_vec(vec![0.0, 0.0, 0.0, 0.0]),
        DVector::from_vec(vec![0.0, 0.0, 0.0, 0.0]),
        DVector::from_vec(vec![1.0, 0.0, 1.0, 0.0]),
    )
    .unwrap();
    assert_eq!(ic.algebraic_mask(), DVector::from_vec(vec![0.0, 1.0, 0.0, 1.0]));
    assert!(ic.is_differential(0));
    assert!(!ic.is_differential(3));
    assert_eq!(ic.len(), 4);
}
