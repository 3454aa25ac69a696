//! Compliance band evaluation for temperature readings.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Band used for readings taken while no backend is configured.
///
/// Demo mode has no fridge record to consult, so the reading is always
/// judged against this literal range.
pub const DEMO_BAND: ComplianceBand = ComplianceBand {
    min_temp: 0.0,
    max_temp: 5.0,
};

/// Inclusive temperature range a fridge is expected to stay within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComplianceBand {
    /// Lower bound in degrees Celsius
    #[schema(example = 0.0)]
    pub min_temp: f64,
    /// Upper bound in degrees Celsius
    #[schema(example = 5.0)]
    pub max_temp: f64,
}

impl ComplianceBand {
    pub const fn new(min_temp: f64, max_temp: f64) -> Self {
        Self { min_temp, max_temp }
    }

    /// Returns true when `temperature` lies within `[min_temp, max_temp]`.
    ///
    /// NaN never complies.
    pub fn contains(&self, temperature: f64) -> bool {
        self.min_temp <= temperature && temperature <= self.max_temp
    }

    /// A band is usable when both bounds are finite and ordered.
    pub fn is_valid(&self) -> bool {
        self.min_temp.is_finite() && self.max_temp.is_finite() && self.min_temp <= self.max_temp
    }
}

impl Default for ComplianceBand {
    fn default() -> Self {
        DEMO_BAND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        let band = ComplianceBand::new(0.0, 5.0);
        assert!(band.contains(0.0));
        assert!(band.contains(5.0));
        assert!(band.contains(3.0));
        assert!(!band.contains(-0.1));
        assert!(!band.contains(5.01));
    }

    #[test]
    fn test_demo_band_flags_readings() {
        assert!(DEMO_BAND.contains(3.0));
        assert!(!DEMO_BAND.contains(7.0));
    }

    #[test]
    fn test_nan_is_never_compliant() {
        assert!(!DEMO_BAND.contains(f64::NAN));
    }

    #[test]
    fn test_band_matches_comparison_for_many_readings() {
        let bands = [
            ComplianceBand::new(0.0, 5.0),
            ComplianceBand::new(-22.0, -15.0),
            ComplianceBand::new(1.0, 1.0),
        ];

        for band in bands {
            for tenths in -300..=300 {
                let t = tenths as f64 / 10.0;
                assert_eq!(
                    band.contains(t),
                    band.min_temp <= t && t <= band.max_temp,
                    "reading {t} against {band:?}"
                );
            }
        }
    }

    #[test]
    fn test_band_validity() {
        assert!(ComplianceBand::new(0.0, 5.0).is_valid());
        assert!(ComplianceBand::new(3.0, 3.0).is_valid());
        assert!(!ComplianceBand::new(5.0, 0.0).is_valid());
        assert!(!ComplianceBand::new(f64::NEG_INFINITY, 0.0).is_valid());
        assert!(!ComplianceBand::new(0.0, f64::NAN).is_valid());
    }
}
