// Water-retention parameters (van Genuchten model)
//
// theta_r, alpha and n are Carsel & Parrish class defaults, not derived from
// the sample; only theta_s depends on the measured bulk density.

// Residual water content [cm³/cm³]
pub const THETA_R: f64 = 0.045;
// van Genuchten alpha [1/cm]
pub const ALPHA: f64 = 0.075;
// van Genuchten n [-]
pub const N: f64 = 1.89;
// Mineral particle density [g/cm³]
const PARTICLE_DENSITY: f64 = 2.65;

#[derive(Debug, Clone, Copy)]
pub struct VanGenuchtenParams {
    pub theta_r: f64, // Residual water content [cm³/cm³]
    pub theta_s: f64, // Saturated water content [cm³/cm³]
    pub alpha: f64,   // van Genuchten parameter [1/cm]
    pub n: f64,       // van Genuchten parameter [-]
}

impl VanGenuchtenParams {
    // theta_s from porosity: 1 - bd/2.65. A bulk density above 2.53 g/cm³
    // drives theta_s below theta_r and the resulting curve goes non-physical;
    // that input is outside the documented range and is not rejected here.
    pub fn from_bulk_density(bulk_density_g_cm3: f64) -> Self {
        VanGenuchtenParams {
            theta_r: THETA_R,
            theta_s: 1.0 - bulk_density_g_cm3 / PARTICLE_DENSITY,
            alpha: ALPHA,
            n: N,
        }
    }

    // Effective saturation at tension head h [cm], Se = (1 + (alpha*h)^n)^-(1 - 1/n)
    pub fn effective_saturation(&self, h: f64) -> f64 {
        let m = 1.0 - 1.0 / self.n;
        (1.0 + (self.alpha * h).powf(self.n)).powf(-m)
    }

    // Water content at tension head h [cm]
    pub fn theta(&self, h: f64) -> f64 {
        self.theta_r + self.effective_saturation(h) * (self.theta_s - self.theta_r)
    }
}
