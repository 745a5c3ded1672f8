use dae::{InitialCondition, TolControl};
use nalgebra::{DVector, Dyn};

use crate::{
    cell::CellParams,
    layout::{Field, StateLayout},
};

/// Tolerances used to judge how far the initial profile is from algebraic consistency.
const RTOL: f64 = 1.0e-6;
const ATOL: f64 = 1.0e-8;

/// Build the initial state of `cell` at `t = 0`.
///
/// 1. Electrolyte concentration is uniform at the anode's `c_0`.
/// 2. Solid potential is each electrode's open-circuit potential at its initial surface
///    concentration, zero in the separator.
/// 3. Electrolyte potential and current density are zero.
/// 4. Surface concentration is each electrode's `c_s_0`, zero in the separator.
/// 5. Derivatives are fitted with [`InitialCondition::correct_derivatives`], so every equation
///    that carries a time derivative is satisfied exactly.
///
/// At zero applied current the result is an exact rest state. With current applied, the
/// collector equations of the solid potential are left unsatisfied by `I / sigma_eff`; the
/// integrator's consistent-initialisation step is expected to remove that.
///
/// The three region parameter sets and the interface indices `sep_index` and `cath_index` are
/// all read from `cell`. The indices are fixed by [`CellParams::new`] and shared with the
/// residual, so the profile and the equations always agree on which node is which.
pub fn initial_profile(cell: &CellParams) -> InitialCondition<f64, Dyn> {
    let layout = cell.layout;
    let mut yy = DVector::zeros(layout.len());

    for p in 0..layout.grid {
        yy[layout.index(Field::Electrolyte, p)] = cell.anode.c_0;
        if let Some(r) = cell.electrode_at(p) {
            yy[layout.index(Field::SolidPotential, p)] = r.open_circuit(r.c_s_0);
            yy[layout.index(Field::SurfaceConcentration, p)] = r.c_s_0;
        }
    }

    let mut ic = InitialCondition {
        t0: 0.0,
        yy,
        yp: DVector::zeros(layout.len()),
        id: indicator(layout, Field::is_differential),
        constraints: Some(indicator(layout, Field::is_non_negative)),
    };
    ic.correct_derivatives(cell);

    let tolerances = TolControl::new_ss(RTOL, ATOL);
    let norm = ic.algebraic_residual_norm(cell, &tolerances);
    if norm > 1.0 {
        let rr = ic.residual(cell);
        let worst = (0..rr.len())
            .filter(|&i| !ic.is_differential(i))
            .max_by(|&a, &b| rr[a].abs().total_cmp(&rr[b].abs()))
            .and_then(|i| layout.locate(i).map(|at| (at, rr[i])));
        log::warn!(
            "initial profile is not algebraically consistent (weighted norm {norm:.3e}), largest entry {worst:?}"
        );
    } else {
        log::debug!(
            "initial profile on {} nodes is consistent (weighted norm {norm:.3e})",
            layout.grid
        );
    }

    ic
}

/// `1` on every component of the fields selected by `pred`, `0` elsewhere.
fn indicator(layout: StateLayout, pred: impl Fn(Field) -> bool) -> DVector<f64> {
    let mut v = DVector::zeros(layout.len());
    for field in Field::ALL.into_iter().filter(|&f| pred(f)) {
        v.rows_mut(layout.field_range(field).start, layout.grid)
            .fill(1.0);
    }
    v
}
