//! Absolute humidity from temperature and relative humidity.

use crate::magnus::saturation_vapor_pressure;
use hf_core::units::constants::CELSIUS_TO_KELVIN;
use hf_core::{round_to, Reading, Real};

/// Inverse specific gas constant of water vapor, 1/Rw, scaled to grams
/// [g·K/J].
const VAPOR_GAS_FACTOR: Real = 2.1674;

/// hPa → Pa.
const HPA_TO_PA: Real = 100.0;

/// Partial vapor pressure [hPa] at `temp_c` [°C] and `rel_humidity_pct` [%].
pub fn vapor_pressure(temp_c: Real, rel_humidity_pct: Real) -> Real {
    rel_humidity_pct / 100.0 * saturation_vapor_pressure(temp_c)
}

/// Absolute humidity [g/m³], rounded to two decimals.
///
/// Absent inputs propagate as `None`. Relative humidity is taken as-is:
/// values outside 0..=100 flow through the formula unclamped, and only a
/// non-finite result (temperature at the formula singularities) collapses
/// to `None`.
pub fn absolute_humidity(temp_c: Reading, rel_humidity: Reading) -> Reading {
    let t = temp_c?;
    let rh = rel_humidity?;
    let pv_pa = HPA_TO_PA * vapor_pressure(t, rh);
    let grams_per_m3 = VAPOR_GAS_FACTOR * pv_pa / (CELSIUS_TO_KELVIN + t);
    grams_per_m3.is_finite().then(|| round_to(grams_per_m3, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_point_20c_50pct() {
        let ah = absolute_humidity(Some(20.0), Some(50.0)).unwrap();
        assert!((ah - 8.64).abs() < 0.01);
    }

    #[test]
    fn absent_inputs_propagate() {
        assert_eq!(absolute_humidity(None, Some(50.0)), None);
        assert_eq!(absolute_humidity(Some(20.0), None), None);
        assert_eq!(absolute_humidity(None, None), None);
    }

    #[test]
    fn zero_humidity_is_zero_not_absent() {
        assert_eq!(absolute_humidity(Some(20.0), Some(0.0)), Some(0.0));
    }

    #[test]
    fn supersaturation_passes_through_unclamped() {
        let at_100 = absolute_humidity(Some(20.0), Some(100.0)).unwrap();
        let at_110 = absolute_humidity(Some(20.0), Some(110.0)).unwrap();
        assert!(at_110 > at_100);
    }

    #[test]
    fn singularity_collapses_to_absent() {
        // -273.15 °C puts a zero in the denominator.
        assert_eq!(absolute_humidity(Some(-CELSIUS_TO_KELVIN), Some(50.0)), None);
    }
}
