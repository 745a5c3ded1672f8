use std::fmt;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::PhysicalConstants,
    correlations::{ocp_anode, ocp_cathode},
};

/// The three material regions of the cell, from the anode current collector to the cathode one.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Anode,
    Separator,
    Cathode,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Anode => write!(f, "anode"),
            Region::Separator => write!(f, "separator"),
            Region::Cathode => write!(f, "cathode"),
        }
    }
}

/// Open-circuit potential fit used by an electrode material.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenCircuit {
    /// [`ocp_anode`]
    Anode,
    /// [`ocp_cathode`]
    Cathode,
}

impl OpenCircuit {
    pub fn potential(&self, c: f64, c_max: f64) -> f64 {
        match self {
            OpenCircuit::Anode => ocp_anode(c, c_max),
            OpenCircuit::Cathode => ocp_cathode(c, c_max),
        }
    }
}

/// Raw constants of one region's material, as tabulated in the literature.
///
/// A separator has no solid phase: its `sigma`, `radius`, `k` and `c_s_max` are zero and it has
/// no open-circuit fit.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Electronic conductivity of the solid, S/m
    pub sigma: f64,
    /// Porosity (electrolyte volume fraction)
    pub eps: f64,
    /// Electrolyte diffusivity, m^2/s
    pub diff_coeff: f64,
    /// Solid-phase diffusivity, m^2/s
    pub diff_coeff_solid: f64,
    /// Particle radius, m
    pub radius: f64,
    /// Reaction rate constant
    pub k: f64,
    /// Maximum solid concentration, mol/m^3
    pub c_s_max: f64,
    /// Initial stoichiometry, `c_s_0 / c_s_max`
    pub stoichiometry: f64,
    /// Initial electrolyte concentration, mol/m^3
    pub c_0: f64,
    /// Region thickness, m
    pub l: f64,
    pub ocp: Option<OpenCircuit>,
}

impl Material {
    pub fn anode() -> Self {
        Self {
            sigma: 100.0,
            eps: 0.385,
            diff_coeff: 1.0e-14,
            diff_coeff_solid: 1.0e-14,
            radius: 2.0e-6,
            k: 2.334e-11,
            c_s_max: 51554.0,
            stoichiometry: 0.4955,
            c_0: 1000.0,
            l: 80.0e-6,
            ocp: Some(OpenCircuit::Anode),
        }
    }

    pub fn separator() -> Self {
        Self {
            sigma: 0.0,
            eps: 0.724,
            diff_coeff: 7.5e-10,
            diff_coeff_solid: 0.0,
            radius: 0.0,
            k: 0.0,
            c_s_max: 0.0,
            stoichiometry: 0.0,
            c_0: 1000.0,
            l: 25.0e-6,
            ocp: None,
        }
    }

    pub fn cathode() -> Self {
        Self {
            sigma: 100.0,
            eps: 0.0326,
            diff_coeff: 3.9e-14,
            diff_coeff_solid: 3.9e-14,
            radius: 2.0e-6,
            k: 5.0307e-11,
            c_s_max: 30555.0,
            stoichiometry: 0.8551,
            c_0: 1000.0,
            l: 88.0e-6,
            ocp: Some(OpenCircuit::Cathode),
        }
    }

    pub fn c_s_0(&self) -> f64 {
        self.c_s_max * self.stoichiometry
    }
}

/// Per-region parameters: the raw material plus the quantities derived from it once at setup.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionParams {
    pub region: Region,
    /// Number of grid nodes these parameters were derived for
    pub grid: usize,
    /// Normalised grid spacing, `1 / (grid - 1)`
    pub dx: f64,
    /// `1 / dx`
    pub coeff: f64,
    pub eps: f64,
    pub sigma: f64,
    /// `sigma * (1 - eps)`
    pub sigma_eff: f64,
    pub diff_coeff: f64,
    /// `diff_coeff * eps^bruggeman`
    pub diff_coeff_eff: f64,
    pub diff_coeff_solid: f64,
    pub radius: f64,
    pub k: f64,
    pub c_s_max: f64,
    pub c_s_0: f64,
    pub c_0: f64,
    pub l: f64,
    /// Particle surface area per unit volume, `3 (1 - eps) / radius`, zero without particles
    pub interfac_area: f64,
    pub ocp: Option<OpenCircuit>,
}

impl RegionParams {
    pub fn new(
        region: Region,
        material: &Material,
        grid: usize,
        consts: &PhysicalConstants,
    ) -> Self {
        let dx = 1.0 / (grid as f64 - 1.0);
        let interfac_area = if material.radius > 0.0 {
            3.0 * (1.0 - material.eps) / material.radius
        } else {
            0.0
        };

        Self {
            region,
            grid,
            dx,
            coeff: dx.recip(),
            eps: material.eps,
            sigma: material.sigma,
            sigma_eff: material.sigma * (1.0 - material.eps),
            diff_coeff: material.diff_coeff,
            diff_coeff_eff: material.diff_coeff * material.eps.powf(consts.bruggeman),
            diff_coeff_solid: material.diff_coeff_solid,
            radius: material.radius,
            k: material.k,
            c_s_max: material.c_s_max,
            c_s_0: material.c_s_0(),
            c_0: material.c_0,
            l: material.l,
            interfac_area,
            ocp: material.ocp,
        }
    }

    /// Open-circuit potential at surface concentration `c_s`; zero for a region without a fit.
    pub fn open_circuit(&self, c_s: f64) -> f64 {
        self.ocp
            .map_or(0.0, |ocp| ocp.potential(c_s, self.c_s_max))
    }
}
