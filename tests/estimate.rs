use approx::assert_relative_eq;
use soil_ptf::{RetentionCurve, SoilSample, estimate};

#[test]
fn default_sample_scalars() {
    let result = estimate(SoilSample::default());

    let log_ks = -0.884 + 0.0153 * 65.0 - 0.0003 * 10.0 - 0.197 * 1.45 + 0.112 * 1.8;
    assert_relative_eq!(result.ks_cm_h, 10f64.powf(log_ks));
    assert_relative_eq!(result.van_genuchten.theta_s, 0.4528, epsilon = 1e-4);

    assert_relative_eq!(result.saxton.ad, result.saxton.cc - result.saxton.pmp);
    assert_relative_eq!(result.rawls.ad, result.rawls.cc - result.rawls.pmp);
}

#[test]
fn curve_properties() {
    let result = estimate(SoilSample::default());
    let curve = &result.curve;

    assert_eq!(curve.len(), 100);
    assert_relative_eq!(curve.h[0], 0.1);
    assert_relative_eq!(curve.h[99], 10f64.powf(3.2));
    for i in 1..curve.len() {
        assert!(curve.h[i] > curve.h[i - 1]);
        assert!(curve.theta[i] <= curve.theta[i - 1]);
    }
    for i in 0..curve.len() {
        assert_relative_eq!(curve.psi[i], curve.h[i] / 102.04);
    }
}

#[test]
fn csv_export_round_trip() {
    let result = estimate(SoilSample::new(30.0, 40.0, 30.0, 1.3, 2.0));
    let csv = result.curve.to_csv();
    let parsed = RetentionCurve::from_csv(&csv).unwrap();

    assert_eq!(parsed.len(), result.curve.len());
    for i in 0..parsed.len() {
        let (h, psi, theta) = result.curve.point(i);
        let (h2, psi2, theta2) = parsed.point(i);
        assert_relative_eq!(h, h2);
        assert_relative_eq!(psi, psi2);
        assert_relative_eq!(theta, theta2);
    }
}

#[test]
fn boundary_inputs_do_not_panic() {
    for sample in [
        SoilSample::new(0.0, 0.0, 0.0, 1.45, 0.0),
        SoilSample::new(65.0, 25.0, 10.0, 0.5, 1.8),
        SoilSample::new(65.0, 25.0, 10.0, 2.2, 1.8),
        SoilSample::new(100.0, 0.0, 0.0, 0.5, 10.0),
    ] {
        let result = estimate(sample);
        assert!(result.ks_cm_h.is_finite());
        assert_eq!(result.curve.len(), 100);
        assert!(!result.summary().is_empty());
    }
}
