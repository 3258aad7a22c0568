mod estimator;
mod ptf;
mod retention_curve;
mod soil_sample;
mod van_genuchten;

pub use estimator::{Estimate, estimate};
pub use ptf::{PtfResult, ks_rawls, rawls_1982, saxton_rawls_2006};
pub use retention_curve::{CM_PER_KPA, CURVE_POINTS, RetentionCurve};
pub use soil_sample::SoilSample;
pub use van_genuchten::VanGenuchtenParams;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let result = estimate(SoilSample::default());
        assert_eq!(result.curve.len(), CURVE_POINTS);
        assert!(result.ks_cm_h > 0.0);
    }
}
