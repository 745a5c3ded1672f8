use approx::assert_relative_eq;

use crate::correlations::*;

#[test]
fn guarded_log() {
    assert_eq!(rlog(0.0), 0.0);
    assert_eq!(rlog(-1.0e-9), 0.0);
    assert_eq!(rlog(-250.0), 0.0);
    assert_relative_eq!(rlog(5.0), 1.6094379124341003);
    assert_relative_eq!(rlog(8.0), 2.0794415416798357);
    assert_eq!(rlog(1.0), 0.0);
}

#[test]
fn hyperbolic_sine() {
    assert_relative_eq!(rsinh(5.0), 74.20321057778875, max_relative = 1e-14);
    assert_relative_eq!(rsinh(8.0), 1490.4788257895502, max_relative = 1e-14);
    assert_relative_eq!(rsinh(-8.0), -1490.4788257895502, max_relative = 1e-14);
    assert_eq!(rsinh(0.0), 0.0);
}

#[test]
fn conductivity() {
    assert_relative_eq!(kappa(1000.0, 1.0, 4.0), 0.204755, max_relative = 1e-12);
    assert_relative_eq!(
        kappa(1000.0, 0.385, 4.0),
        0.004498600568721872,
        max_relative = 1e-12
    );
}

#[test]
fn conductivity_scales_with_bruggeman_power() {
    for c in [200.0, 1000.0, 1800.0] {
        let bulk = kappa(c, 1.0, 4.0);
        let mut last = 0.0;
        for eps in [0.05, 0.2, 0.385, 0.724, 0.95] {
            let k = kappa(c, eps, 4.0);
            assert_relative_eq!(k / eps.powi(4), bulk, max_relative = 1e-12);
            assert!(k > last);
            last = k;
        }
    }
}

#[test]
fn open_circuit_reference_values() {
    assert_relative_eq!(
        ocp_anode(51554.0 * 0.4955, 51554.0),
        4.245842709774838,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        ocp_cathode(30555.0 * 0.8551, 30555.0),
        0.1030758038122781,
        max_relative = 1e-12
    );
    assert_relative_eq!(ocp_anode(500.0, 800.0), 4.053597889752601, max_relative = 1e-12);
    assert_relative_eq!(
        ocp_cathode(500.0, 800.0),
        0.21864040392568063,
        max_relative = 1e-12
    );
}

#[test]
fn open_circuit_is_deterministic() {
    for c in [1.0, 1234.5, 25000.0, 51000.0] {
        assert_eq!(
            ocp_anode(c, 51554.0).to_bits(),
            ocp_anode(c, 51554.0).to_bits()
        );
        assert_eq!(
            ocp_cathode(c, 30555.0).to_bits(),
            ocp_cathode(c, 30555.0).to_bits()
        );
    }
}

#[test]
fn cathode_fit_diverges_at_empty_surface() {
    assert!(!ocp_cathode(0.0, 30555.0).is_finite());
}
