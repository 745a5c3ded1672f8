#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Physical constants of one simulation run.
///
/// These are fixed for the lifetime of a [`crate::CellParams`]; build a new cell to change them.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalConstants {
    /// Faraday constant, C/mol
    pub faraday: f64,
    /// Universal gas constant, J/(mol K)
    pub gas_constant: f64,
    /// Absolute temperature, K
    pub temperature: f64,
    /// Cation transference number `t+`
    pub transference: f64,
    /// Bruggeman exponent applied to every porous region
    pub bruggeman: f64,
    /// Applied current density, A/m^2
    pub applied_current: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            faraday: 96487.0,
            gas_constant: 8.314,
            temperature: 298.15,
            transference: 0.363,
            bruggeman: 4.0,
            applied_current: 2.0,
        }
    }
}

impl PhysicalConstants {
    pub fn with_applied_current(mut self, applied_current: f64) -> Self {
        self.applied_current = applied_current;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// `F / (R T)`
    pub fn f_rt(&self) -> f64 {
        self.faraday / (self.gas_constant * self.temperature)
    }

    /// `R T / F`
    pub fn thermal_voltage(&self) -> f64 {
        self.f_rt().recip()
    }

    /// Prefactor of the liquid-junction term in the electrolyte current, `2 R T (1 - t+) / F`.
    pub fn junction_factor(&self) -> f64 {
        2.0 * self.thermal_voltage() * (1.0 - self.transference)
    }
}
