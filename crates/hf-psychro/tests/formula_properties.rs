//! Property tests for the psychrometric formulas.

use hf_psychro::{absolute_humidity, dew_point, moist_air_enthalpy};
use proptest::prelude::*;

proptest! {
    // Over the physically plausible domain every formula is total.
    #[test]
    fn formulas_are_defined_on_valid_domain(t in -40.0f64..60.0, rh in 0.01f64..=100.0) {
        let ah = absolute_humidity(Some(t), Some(rh));
        let dp = dew_point(Some(t), Some(rh));
        let h = moist_air_enthalpy(Some(t), Some(rh));
        prop_assert!(ah.is_some_and(f64::is_finite));
        prop_assert!(dp.is_some_and(f64::is_finite));
        prop_assert!(h.is_some_and(f64::is_finite));
    }

    #[test]
    fn absolute_humidity_is_non_negative_on_valid_domain(t in -40.0f64..60.0, rh in 0.0f64..=100.0) {
        let ah = absolute_humidity(Some(t), Some(rh)).unwrap();
        prop_assert!(ah >= 0.0);
    }

    // Physical constraint: dew point never exceeds the air temperature
    // while RH stays at or below saturation. Rounding grants a small slack.
    #[test]
    fn dew_point_bounded_by_air_temperature(t in -40.0f64..60.0, rh in 0.01f64..=100.0) {
        let dp = dew_point(Some(t), Some(rh)).unwrap();
        prop_assert!(dp <= t + 0.01);
    }

    // The domain stays away from the cold/dry corner where two-decimal
    // rounding flattens the comparison.
    #[test]
    fn warmer_air_holds_more_water(t in -20.0f64..45.0, rh in 10.0f64..=100.0) {
        let cool = absolute_humidity(Some(t), Some(rh)).unwrap();
        let warm = absolute_humidity(Some(t + 10.0), Some(rh)).unwrap();
        prop_assert!(warm > cool);
    }

    // Stateless formulas are pure functions of their inputs.
    #[test]
    fn repeated_evaluation_is_identical(t in -40.0f64..60.0, rh in 0.01f64..=100.0) {
        prop_assert_eq!(absolute_humidity(Some(t), Some(rh)), absolute_humidity(Some(t), Some(rh)));
        prop_assert_eq!(dew_point(Some(t), Some(rh)), dew_point(Some(t), Some(rh)));
        prop_assert_eq!(moist_air_enthalpy(Some(t), Some(rh)), moist_air_enthalpy(Some(t), Some(rh)));
    }
}
