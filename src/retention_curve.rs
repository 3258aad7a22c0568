use crate::van_genuchten::VanGenuchtenParams;
use nalgebra::DVector;

// Number of sampled points along the curve
pub const CURVE_POINTS: usize = 100;
// log10 of the tension-head sampling range [cm]
const LOG_H_MIN: f64 = -1.0;
const LOG_H_MAX: f64 = 3.2;
// Head-to-suction conversion [cm of water per kPa]
pub const CM_PER_KPA: f64 = 102.04;

const CSV_HEADER: &str = "h (cm),Suction (kPa),θ (cm³/cm³)";

// Sampled water-retention curve. Parallel arrays; a point has no identity
// beyond its position.
#[derive(Debug, Clone)]
pub struct RetentionCurve {
    pub h: DVector<f64>,     // Tension head [cm]
    pub psi: DVector<f64>,   // Suction [kPa]
    pub theta: DVector<f64>, // Volumetric water content [cm³/cm³]
}

impl RetentionCurve {
    // Sample theta(h) over log-spaced tension heads from 10^-1 to 10^3.2 cm
    pub fn sample(params: &VanGenuchtenParams) -> Self {
        let step = (LOG_H_MAX - LOG_H_MIN) / (CURVE_POINTS - 1) as f64;
        let h = DVector::from_fn(CURVE_POINTS, |i, _| 10f64.powf(LOG_H_MIN + i as f64 * step));
        let psi = h.map(|hi| hi / CM_PER_KPA);
        let theta = h.map(|hi| params.theta(hi));
        RetentionCurve { h, psi, theta }
    }

    pub fn len(&self) -> usize {
        self.h.len()
    }

    pub fn is_empty(&self) -> bool {
        self.h.len() == 0
    }

    pub fn point(&self, i: usize) -> (f64, f64, f64) {
        (self.h[i], self.psi[i], self.theta[i])
    }

    // Tabular export: header row, one comma-separated row per point, no index column
    pub fn to_csv(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for i in 0..self.len() {
            out.push_str(&format!("{},{},{}\n", self.h[i], self.psi[i], self.theta[i]));
        }
        out
    }

    // Parse a table produced by to_csv
    pub fn from_csv(text: &str) -> Result<Self, String> {
        let mut lines = text.lines();
        lines.next().ok_or_else(|| "Empty curve table".to_string())?;

        let mut h = Vec::new();
        let mut psi = Vec::new();
        let mut theta = Vec::new();
        for (row, line) in lines.enumerate() {
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split(',').map(|f| {
                f.trim()
                    .parse::<f64>()
                    .map_err(|e| format!("Row {}: bad number '{}': {}", row + 1, f, e))
            });
            let mut next = |name: &str| match fields.next() {
                Some(value) => value,
                None => Err(format!("Row {}: missing column '{}'", row + 1, name)),
            };
            h.push(next("h (cm)")?);
            psi.push(next("Suction (kPa)")?);
            theta.push(next("θ (cm³/cm³)")?);
        }

        Ok(RetentionCurve {
            h: DVector::from_vec(h),
            psi: DVector::from_vec(psi),
            theta: DVector::from_vec(theta),
        })
    }
}
