//! A cell with the anode material on both sides of the separator, at rest.
//!
//! With uniform electrolyte, zero current density, no applied current and each electrode at its
//! own open-circuit potential, nothing drives the system: the residual must vanish identically
//! at `t = 0` with `y' = 0`.

use liion::{initial_profile, residual, CellParams, Field, Material, PhysicalConstants};
use nalgebra::DVector;

fn symmetric_cell(grid: usize) -> CellParams {
    let anode = Material::anode();
    CellParams::from_materials(
        &anode,
        &Material::separator(),
        &anode,
        grid,
        PhysicalConstants::default().with_applied_current(0.0),
    )
    .unwrap()
}

#[test_log::test]
fn unperturbed_state_is_a_fixed_point() {
    for grid in [20, 50, 101] {
        let cell = symmetric_cell(grid);
        let layout = cell.layout;
        let anode = Material::anode();
        let phi1 = anode.ocp.unwrap().potential(anode.c_s_0(), anode.c_s_max);

        let mut y = DVector::zeros(layout.len());
        for p in 0..grid {
            y[layout.index(Field::Electrolyte, p)] = anode.c_0;
            if cell.electrode_at(p).is_some() {
                y[layout.index(Field::SolidPotential, p)] = phi1;
                y[layout.index(Field::SurfaceConcentration, p)] = anode.c_s_0();
            }
        }

        let rr = residual(0.0, &y, &DVector::zeros(layout.len()), &cell);
        assert!(rr.iter().all(|r| *r == 0.0), "grid {grid}: {rr}");

        // the profile builder lands on the same state
        let ic = initial_profile(&cell);
        assert_eq!(ic.yy, y);
        assert!(ic.yp.iter().all(|v| *v == 0.0));
    }
}

#[test_log::test]
fn discharge_current_moves_the_surface_concentration() {
    let cell = symmetric_cell(50);
    let layout = cell.layout;
    let mut ic = initial_profile(&cell);

    // impose a uniform reaction in both electrodes and refit the derivatives
    let j = 1.0e-6;
    for p in 0..layout.grid {
        if cell.electrode_at(p).is_some() {
            ic.yy[layout.index(Field::CurrentDensity, p)] = j;
        }
    }
    ic.correct_derivatives(&cell);

    let radius = Material::anode().radius;
    for p in 0..layout.grid {
        let c_s_rate = ic.yp[layout.index(Field::SurfaceConcentration, p)];
        if cell.electrode_at(p).is_some() {
            approx::assert_relative_eq!(c_s_rate, -3.0 * j / radius, max_relative = 1e-12);
        } else {
            assert_eq!(c_s_rate, 0.0);
        }
    }

    // every equation with a time derivative is satisfied after the refit
    let rr = ic.residual(&cell);
    for i in (0..rr.len()).filter(|&i| ic.is_differential(i)) {
        approx::assert_abs_diff_eq!(rr[i], 0.0, epsilon = 1e-12);
    }
}
