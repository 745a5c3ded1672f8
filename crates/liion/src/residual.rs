//! Residual of the cell DAE.
//!
//! Every node contributes one equation per field. Interior nodes carry the discretised PDEs,
//! collector nodes the boundary conditions, and the two interface nodes flux continuity between
//! neighbouring regions. Which of these applies is read from the node table built with the cell.

use dae::Residual;
use nalgebra::{DVector, Dyn, Matrix, Storage, StorageMut, U1};

use crate::{
    cell::CellParams,
    correlations::{kappa, rlog, rsinh},
    layout::{Field, Node, StateLayout, StateView},
    region::RegionParams,
};

impl Residual<f64, Dyn> for CellParams {
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
        let layout = self.layout;
        let y = StateView::new(yy, layout);
        let yp = StateView::new(yp, layout);

        for (p, &node) in self.nodes().iter().enumerate() {
            rr[layout.index(Field::Electrolyte, p)] = self.electrolyte(node, p, &y, &yp);
            rr[layout.index(Field::SolidPotential, p)] = self.solid_potential(node, p, &y);
            rr[layout.index(Field::ElectrolytePotential, p)] =
                self.electrolyte_potential(node, p, &y);
            rr[layout.index(Field::CurrentDensity, p)] = self.current_density(p, &y);
            rr[layout.index(Field::SurfaceConcentration, p)] =
                self.surface_concentration(p, &y, &yp);
        }
    }
}

/// Evaluate the residual into a freshly allocated vector.
pub fn residual<SA, SB>(
    t: f64,
    y: &Matrix<f64, Dyn, U1, SA>,
    yp: &Matrix<f64, Dyn, U1, SB>,
    params: &CellParams,
) -> DVector<f64>
where
    SA: Storage<f64, Dyn>,
    SB: Storage<f64, Dyn>,
{
    let mut rr = DVector::zeros(params.layout.len());
    params.res(t, y, yp, &mut rr);
    rr
}

/// First residual entry that is NaN or infinite, as `(field, position)`.
///
/// A non-finite residual means the integrator handed in a non-physical trial state; this helps
/// report where it went wrong before the step is rejected.
pub fn first_non_finite<S>(rr: &Matrix<f64, Dyn, U1, S>, layout: StateLayout) -> Option<(Field, usize)>
where
    S: Storage<f64, Dyn>,
{
    rr.iter()
        .position(|r| !r.is_finite())
        .and_then(|i| layout.locate(i))
}

#[inline]
fn laplacian(left: f64, centre: f64, right: f64) -> f64 {
    right + left - 2.0 * centre
}

impl CellParams {
    /// Region whose bulk properties apply at an interior or collector node.
    fn bulk(&self, node: Node) -> &RegionParams {
        match node {
            Node::AnodeCollector | Node::Anode | Node::AnodeSeparator => &self.anode,
            Node::Separator => &self.separator,
            Node::SeparatorCathode | Node::Cathode | Node::CathodeCollector => &self.cathode,
        }
    }

    fn electrolyte<SA, SB>(
        &self,
        node: Node,
        p: usize,
        y: &StateView<SA>,
        yp: &StateView<SB>,
    ) -> f64
    where
        SA: Storage<f64, Dyn>,
        SB: Storage<f64, Dyn>,
    {
        match node {
            Node::AnodeCollector => y.c(p + 1) - y.c(p),
            Node::CathodeCollector => y.c(p) - y.c(p - 1),
            Node::AnodeSeparator => {
                self.separator.diff_coeff_eff * (y.c(p + 1) - y.c(p))
                    - self.anode.diff_coeff_eff * (y.c(p) - y.c(p - 1))
            }
            Node::SeparatorCathode => {
                self.cathode.diff_coeff_eff * (y.c(p + 1) - y.c(p))
                    - self.separator.diff_coeff_eff * (y.c(p) - y.c(p - 1))
            }
            Node::Anode | Node::Separator | Node::Cathode => {
                let r = self.bulk(node);
                // interfac_area is zero in the separator, so no source there
                r.eps * yp.c(p)
                    - r.diff_coeff_eff * r.coeff.powi(2) * laplacian(y.c(p - 1), y.c(p), y.c(p + 1))
                    - r.interfac_area * (1.0 - self.consts.transference) * y.j(p)
            }
        }
    }

    fn solid_potential<S>(&self, node: Node, p: usize, y: &StateView<S>) -> f64
    where
        S: Storage<f64, Dyn>,
    {
        let current = self.consts.applied_current;
        match node {
            Node::AnodeCollector => {
                self.anode.coeff * (y.phi1(p + 1) - y.phi1(p)) + current / self.anode.sigma_eff
            }
            Node::CathodeCollector => {
                self.cathode.coeff * (y.phi1(p) - y.phi1(p - 1)) + current / self.cathode.sigma_eff
            }
            // no electronic current into the separator
            Node::AnodeSeparator => y.phi1(p) - y.phi1(p - 1),
            Node::SeparatorCathode => y.phi1(p + 1) - y.phi1(p),
            Node::Separator => y.phi1(p),
            Node::Anode | Node::Cathode => {
                let r = self.bulk(node);
                r.sigma_eff * r.coeff.powi(2) * laplacian(y.phi1(p - 1), y.phi1(p), y.phi1(p + 1))
                    - r.interfac_area * self.consts.faraday * y.j(p)
            }
        }
    }

    /// Ionic current across the face between `p` and `p + 1`, up to a factor `-coeff`, with the
    /// conductivity averaged over the two nodes at porosity `eps`.
    fn ionic_flux<S>(&self, p: usize, eps: f64, y: &StateView<S>) -> f64
    where
        S: Storage<f64, Dyn>,
    {
        let brugg = self.consts.bruggeman;
        let kappa_face = 0.5 * (kappa(y.c(p), eps, brugg) + kappa(y.c(p + 1), eps, brugg));
        let junction = self.consts.junction_factor() * (rlog(y.c(p + 1)) - rlog(y.c(p)));
        kappa_face * (y.phi2(p + 1) - y.phi2(p) - junction)
    }

    fn electrolyte_potential<S>(&self, node: Node, p: usize, y: &StateView<S>) -> f64
    where
        S: Storage<f64, Dyn>,
    {
        match node {
            // reference potential
            Node::AnodeCollector => y.phi2(p),
            Node::CathodeCollector => {
                y.phi2(p) - y.phi2(p - 1)
                    - self.consts.junction_factor() * (rlog(y.c(p)) - rlog(y.c(p - 1)))
            }
            Node::AnodeSeparator => {
                self.ionic_flux(p, self.separator.eps, y) - self.ionic_flux(p - 1, self.anode.eps, y)
            }
            Node::SeparatorCathode => {
                self.ionic_flux(p, self.cathode.eps, y)
                    - self.ionic_flux(p - 1, self.separator.eps, y)
            }
            Node::Anode | Node::Separator | Node::Cathode => {
                let r = self.bulk(node);
                r.coeff.powi(2) * (self.ionic_flux(p, r.eps, y) - self.ionic_flux(p - 1, r.eps, y))
                    + r.interfac_area * self.consts.faraday * y.j(p)
            }
        }
    }

    /// Butler-Volmer kinetics on electrode nodes, `j = 0` elsewhere.
    fn current_density<S>(&self, p: usize, y: &StateView<S>) -> f64
    where
        S: Storage<f64, Dyn>,
    {
        let Some(r) = self.electrode_at(p) else {
            return y.j(p);
        };
        let j = y.j(p);
        let c_s = y.c_s(p);
        let eta = y.phi1(p) - y.phi2(p) - r.open_circuit(c_s);
        let surface = c_s - j * r.radius / (5.0 * r.diff_coeff_solid);

        j - 2.0 * r.k * y.c(p).sqrt() * rsinh(0.5 * self.consts.f_rt() * eta) * (r.c_s_max - surface)
    }

    /// Reduced single-particle balance on electrode nodes, `c_s = 0` elsewhere.
    fn surface_concentration<SA, SB>(&self, p: usize, y: &StateView<SA>, yp: &StateView<SB>) -> f64
    where
        SA: Storage<f64, Dyn>,
        SB: Storage<f64, Dyn>,
    {
        match self.electrode_at(p) {
            Some(r) => yp.c_s(p) + 3.0 * y.j(p) / r.radius,
            None => y.c_s(p),
        }
    }
}
