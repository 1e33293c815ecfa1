//! Specific enthalpy of moist air.

use crate::humidity::absolute_humidity;
use hf_core::{round_to, Reading, Real};

/// Specific heat of dry air [kJ/(kg·K)].
const CP_DRY_AIR: Real = 1.006;
/// Latent heat of vaporization of water at 0 °C [kJ/kg].
const LATENT_HEAT_VAPOR: Real = 2501.0;
/// Specific heat of water vapor [kJ/(kg·K)].
const CP_WATER_VAPOR: Real = 1.86;

/// Specific enthalpy of moist air [kJ/kg dry air], rounded to two decimals.
///
/// Builds on the rounded absolute-humidity value and therefore fails
/// exactly when that calculation fails.
pub fn moist_air_enthalpy(temp_c: Reading, rel_humidity: Reading) -> Reading {
    let t = temp_c?;
    let abs_h_kg_per_kg = absolute_humidity(Some(t), rel_humidity)? / 1000.0;
    let h = CP_DRY_AIR * t + abs_h_kg_per_kg * (LATENT_HEAT_VAPOR + CP_WATER_VAPOR * t);
    h.is_finite().then(|| round_to(h, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_literal_recomputation_at_20c_50pct() {
        let ah = absolute_humidity(Some(20.0), Some(50.0)).unwrap();
        let expected = round_to(1.006 * 20.0 + (ah / 1000.0) * (2501.0 + 1.86 * 20.0), 2);
        assert_eq!(moist_air_enthalpy(Some(20.0), Some(50.0)), Some(expected));
        // Sensible + latent heat for ~8.64 g/m³ of vapor lands near 42 kJ/kg.
        assert!((expected - 42.05).abs() < 0.01);
    }

    #[test]
    fn dry_air_is_sensible_heat_only() {
        assert_eq!(moist_air_enthalpy(Some(20.0), Some(0.0)), Some(20.12));
    }

    #[test]
    fn fails_when_absolute_humidity_fails() {
        assert_eq!(moist_air_enthalpy(None, Some(50.0)), None);
        assert_eq!(moist_air_enthalpy(Some(20.0), None), None);
    }
}
