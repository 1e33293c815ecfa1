//! Dew point via Magnus inversion.

use crate::magnus::{MAGNUS_DEW_BETA, MAGNUS_DEW_GAMMA_C};
use hf_core::{round_to, Reading};

/// Dew point [°C], rounded to two decimals.
///
/// Undefined for a relative humidity of zero or below (the inversion
/// takes a logarithm of RH); those inputs yield `None` rather than a
/// panic or a non-finite value.
pub fn dew_point(temp_c: Reading, rel_humidity: Reading) -> Reading {
    let t = temp_c?;
    let rh = rel_humidity?;
    if rh <= 0.0 {
        return None;
    }
    let alpha = MAGNUS_DEW_BETA * t / (MAGNUS_DEW_GAMMA_C + t) + (rh / 100.0).ln();
    let dp = MAGNUS_DEW_GAMMA_C * alpha / (MAGNUS_DEW_BETA - alpha);
    dp.is_finite().then(|| round_to(dp, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_point_25c_60pct() {
        // ~16.7 °C for typical indoor summer air.
        let dp = dew_point(Some(25.0), Some(60.0)).unwrap();
        assert!((dp - 16.7).abs() < 0.2);
    }

    #[test]
    fn saturated_air_dew_point_equals_temperature() {
        let dp = dew_point(Some(18.0), Some(100.0)).unwrap();
        assert!((dp - 18.0).abs() < 0.01);
    }

    #[test]
    fn zero_and_negative_humidity_are_guarded() {
        assert_eq!(dew_point(Some(20.0), Some(0.0)), None);
        assert_eq!(dew_point(Some(20.0), Some(-5.0)), None);
    }

    #[test]
    fn absent_inputs_propagate() {
        assert_eq!(dew_point(None, Some(50.0)), None);
        assert_eq!(dew_point(Some(20.0), None), None);
    }
}
