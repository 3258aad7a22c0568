use crate::ptf::{PtfResult, ks_rawls, rawls_1982, saxton_rawls_2006};
use crate::retention_curve::RetentionCurve;
use crate::soil_sample::SoilSample;
use crate::van_genuchten::VanGenuchtenParams;
use std::fmt::Write;

// Composite result of one estimation request: all scalars plus the sampled
// curve. A pure function of the input sample; no state carries across calls.
#[derive(Debug, Clone)]
pub struct Estimate {
    pub sample: SoilSample,
    pub ks_cm_h: f64, // Saturated hydraulic conductivity [cm/h]
    pub van_genuchten: VanGenuchtenParams,
    pub saxton: PtfResult,
    pub rawls: PtfResult,
    pub curve: RetentionCurve,
}

// Run every pedotransfer function on the sample and sample the retention
// curve. No input validation: out-of-range values propagate into
// out-of-physical-range outputs.
pub fn estimate(sample: SoilSample) -> Estimate {
    let van_genuchten = VanGenuchtenParams::from_bulk_density(sample.bulk_density_g_cm3);
    Estimate {
        ks_cm_h: ks_rawls(&sample),
        saxton: saxton_rawls_2006(&sample),
        rawls: rawls_1982(&sample),
        curve: RetentionCurve::sample(&van_genuchten),
        van_genuchten,
        sample,
    }
}

impl Estimate {
    // Results block: Ks to 2 decimals, volumetric fractions to 3, n to 2
    pub fn summary(&self) -> String {
        let vg = &self.van_genuchten;
        let mut out = String::new();
        let _ = writeln!(out, "Ks: {:.2} cm/h", self.ks_cm_h);
        let _ = writeln!(out, "θs: {:.3}", vg.theta_s);
        let _ = writeln!(out, "θr: {:.3}", vg.theta_r);
        let _ = writeln!(out, "α: {:.3} 1/cm", vg.alpha);
        let _ = writeln!(out, "n: {:.2}", vg.n);
        let _ = writeln!(
            out,
            "CC Saxton: {:.3} | PMP Saxton: {:.3} | AD Saxton: {:.3}",
            self.saxton.cc, self.saxton.pmp, self.saxton.ad
        );
        let _ = writeln!(
            out,
            "CC Rawls: {:.3} | PMP Rawls: {:.3} | AD Rawls: {:.3}",
            self.rawls.cc, self.rawls.pmp, self.rawls.ad
        );
        out
    }
}
