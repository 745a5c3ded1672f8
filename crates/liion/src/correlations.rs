//! Transport and kinetic correlations.
//!
//! All of these are plain functions of their arguments. None of them check their input domain:
//! out-of-range concentrations extrapolate the fits silently, and a zero surface concentration
//! in [`ocp_cathode`] divides by zero. Trial iterates that wander there produce non-finite
//! residuals, which the integrator handles by rejecting the step.

/// Electrolyte ionic conductivity, S/m, at concentration `c` (mol/m^3) in a region of porosity
/// `eps`, Bruggeman-corrected with exponent `bruggeman`.
pub fn kappa(c: f64, eps: f64, bruggeman: f64) -> f64 {
    let bulk = 4.1253e-2 + 5.007e-4 * c - 4.7212e-7 * c.powi(2) + 1.5094e-10 * c.powi(3)
        - 1.6018e-14 * c.powi(4);
    bulk * eps.powf(bruggeman)
}

/// Open-circuit potential of the anode material at surface concentration `c`.
pub fn ocp_anode(c: f64, c_max: f64) -> f64 {
    let soc = c / c_max;
    let num = -4.656 + 88.669 * soc.powi(2) - 401.119 * soc.powi(4) + 342.909 * soc.powi(6)
        - 462.471 * soc.powi(8)
        + 433.434 * soc.powi(10);
    let den = -1.0 + 18.933 * soc.powi(2) - 79.532 * soc.powi(4) + 37.311 * soc.powi(6)
        - 73.083 * soc.powi(8)
        + 95.96 * soc.powi(10);
    num / den
}

/// Open-circuit potential of the cathode material at surface concentration `c`.
pub fn ocp_cathode(c: f64, c_max: f64) -> f64 {
    let soc = c / c_max;
    0.7222 + 0.1387 * soc + 0.029 * soc.powf(0.5) - 0.0172 / soc + 0.0019 / soc.powf(1.5)
        + 0.2808 * 10f64.powf(0.9 - 15.0 * soc)
        - 0.7984 * 10f64.powf(0.4465 * soc - 0.4108)
}

/// Guarded natural logarithm: `0` for `x <= 0`, `ln(x)` otherwise.
///
/// The clamp hides the true behaviour near zero. It is kept so that Newton iterates with a
/// slightly negative concentration still give a finite liquid-junction term.
#[inline]
pub fn rlog(x: f64) -> f64 {
    if x <= 0.0 {
        0.0
    } else {
        x.ln()
    }
}

#[inline]
pub fn rsinh(x: f64) -> f64 {
    x.sinh()
}
