use crate::HfError;

/// Floating point type used throughout the engine
pub type Real = f64;

/// A single instantaneous measurement.
///
/// `None` means the backing sensor is currently unavailable or its value
/// could not be interpreted. Absence propagates through every downstream
/// calculation; it is never treated as zero.
pub type Reading = Option<Real>;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HfError::NonFinite { what, value: v })
    }
}

/// Round to a fixed number of decimal places.
///
/// Metric outputs are rounded at the calculation boundary: two decimals
/// for physical quantities, zero for whole-minute durations.
pub fn round_to(v: Real, decimals: i32) -> Real {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn round_to_two_decimals() {
        assert_eq!(round_to(8.6391, 2), 8.64);
        assert_eq!(round_to(-3.005, 2), -3.0);
        assert_eq!(round_to(7.5, 0), 8.0);
    }

    proptest! {
        #[test]
        fn round_to_is_idempotent(v in -1e6f64..1e6) {
            let once = round_to(v, 2);
            prop_assert_eq!(round_to(once, 2), once);
        }

        #[test]
        fn round_to_stays_close(v in -1e6f64..1e6) {
            prop_assert!((round_to(v, 2) - v).abs() <= 0.005 + 1e-9);
        }
    }
}
