use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Basic soil inputs for the pedotransfer functions
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SoilSample {
    pub sand_pct: f64,           // Sand [%], 0-100
    pub silt_pct: f64,           // Silt [%], 0-100 (reported only; no formula uses it)
    pub clay_pct: f64,           // Clay [%], 0-100
    pub bulk_density_g_cm3: f64, // Bulk density [g/cm³], 0.5-2.2
    pub organic_matter_pct: f64, // Organic matter [%], 0-10
}

// Texture fractions need not sum to 100; no cross-check is performed.
// Callers are expected to keep values inside the ranges above.
impl Default for SoilSample {
    fn default() -> Self {
        SoilSample {
            sand_pct: 65.0,
            silt_pct: 25.0,
            clay_pct: 10.0,
            bulk_density_g_cm3: 1.45,
            organic_matter_pct: 1.8,
        }
    }
}

impl SoilSample {
    pub fn new(
        sand_pct: f64,
        silt_pct: f64,
        clay_pct: f64,
        bulk_density_g_cm3: f64,
        organic_matter_pct: f64,
    ) -> Self {
        SoilSample {
            sand_pct,
            silt_pct,
            clay_pct,
            bulk_density_g_cm3,
            organic_matter_pct,
        }
    }

    // Load a sample from a TOML file; missing fields keep their default values
    pub fn from_toml(path: &Path) -> Result<Self, String> {
        let toml_str = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_toml_str(&toml_str)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse sample TOML: {}", e))
    }

    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string(self).map_err(|e| format!("Failed to serialize sample: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let s = SoilSample::default();
        assert_eq!(s.sand_pct, 65.0);
        assert_eq!(s.silt_pct, 25.0);
        assert_eq!(s.clay_pct, 10.0);
        assert_eq!(s.bulk_density_g_cm3, 1.45);
        assert_eq!(s.organic_matter_pct, 1.8);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let s = SoilSample::from_toml_str("clay_pct = 30.0\nbulk_density_g_cm3 = 1.2\n").unwrap();
        assert_eq!(s.clay_pct, 30.0);
        assert_eq!(s.bulk_density_g_cm3, 1.2);
        assert_eq!(s.sand_pct, 65.0);
        assert_eq!(s.organic_matter_pct, 1.8);
    }

    #[test]
    fn toml_round_trip() {
        let s = SoilSample::new(40.0, 35.0, 25.0, 1.3, 2.5);
        let back = SoilSample::from_toml_str(&s.to_toml().unwrap()).unwrap();
        assert_eq!(back.sand_pct, s.sand_pct);
        assert_eq!(back.clay_pct, s.clay_pct);
        assert_eq!(back.bulk_density_g_cm3, s.bulk_density_g_cm3);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(SoilSample::from_toml_str("clay_pct = \"much\"").is_err());
    }
}
