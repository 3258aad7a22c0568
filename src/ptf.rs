use crate::soil_sample::SoilSample;

// Rawls et al. (1982) log10(Ks) regression coefficients, percentage-scale inputs
const KS_INTERCEPT: f64 = -0.884;
const KS_SAND: f64 = 0.0153;
const KS_CLAY: f64 = -0.0003;
const KS_BD: f64 = -0.197;
const KS_OM: f64 = 0.112;

// Field capacity and wilting point estimated by one pedotransfer method
#[derive(Debug, Clone, Copy)]
pub struct PtfResult {
    pub cc: f64,  // Field capacity [cm³/cm³]
    pub pmp: f64, // Permanent wilting point [cm³/cm³]
    pub ad: f64,  // Available water, cc - pmp [cm³/cm³]
}

impl PtfResult {
    fn new(cc: f64, pmp: f64) -> Self {
        PtfResult {
            cc,
            pmp,
            ad: cc - pmp,
        }
    }
}

// Saturated hydraulic conductivity [cm/h], Rawls et al. (1982)
pub fn ks_rawls(sample: &SoilSample) -> f64 {
    let log_ks = KS_INTERCEPT
        + KS_SAND * sample.sand_pct
        + KS_CLAY * sample.clay_pct
        + KS_BD * sample.bulk_density_g_cm3
        + KS_OM * sample.organic_matter_pct;
    10f64.powf(log_ks)
}

// Saxton & Rawls (2006) field capacity / wilting point, fractional (0-1) texture inputs
pub fn saxton_rawls_2006(sample: &SoilSample) -> PtfResult {
    let sand_f = sample.sand_pct / 100.0;
    let clay_f = sample.clay_pct / 100.0;
    let om_f = sample.organic_matter_pct / 100.0;

    let cc = -0.251 + 0.195 * clay_f + 0.011 * om_f + 0.006 * clay_f * om_f
        - 0.027 * sand_f * om_f
        + 0.452 * sand_f * clay_f
        + 0.299;

    let pmp = -0.024 + 0.487 * clay_f + 0.006 * om_f + 0.005 * clay_f * om_f
        - 0.013 * sand_f * om_f
        + 0.068 * sand_f * clay_f
        + 0.031;

    PtfResult::new(cc, pmp)
}

// Rawls et al. (1982) field capacity / wilting point, percentage-scale clay and
// organic matter with a final /100. The divisor differs from the Saxton form's
// fractional scaling; kept exactly as published in the source application.
pub fn rawls_1982(sample: &SoilSample) -> PtfResult {
    let clay = sample.clay_pct;
    let om = sample.organic_matter_pct;

    let cc = (-0.251 + 0.195 * clay + 0.011 * om) / 100.0;
    let pmp = (-0.024 + 0.004 * clay + 0.004 * om) / 100.0;

    PtfResult::new(cc, pmp)
}
