//! Magnus approximation for saturation vapor pressure.

use hf_core::Real;

/// Magnus coefficients for saturation vapor pressure over liquid water.
///
/// Empirical fit in °C, good to a fraction of a percent between roughly
/// -40 °C and 50 °C.
pub const MAGNUS_SVP_HPA: Real = 6.112;
pub const MAGNUS_SVP_BETA: Real = 17.67;
pub const MAGNUS_SVP_GAMMA_C: Real = 243.5;

/// Coefficient set used by the dew-point inversion.
pub const MAGNUS_DEW_BETA: Real = 17.27;
pub const MAGNUS_DEW_GAMMA_C: Real = 237.7;

/// Saturation vapor pressure [hPa] over liquid water at `temp_c` [°C].
///
/// Total over finite inputs; the caller is responsible for catching the
/// non-finite output produced by the singularity at -243.5 °C.
pub fn saturation_vapor_pressure(temp_c: Real) -> Real {
    MAGNUS_SVP_HPA * (MAGNUS_SVP_BETA * temp_c / (temp_c + MAGNUS_SVP_GAMMA_C)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturation_pressure_reference_points() {
        // Tabulated values: ~6.1 hPa at 0 °C, ~23.4 hPa at 20 °C.
        assert!((saturation_vapor_pressure(0.0) - 6.112).abs() < 0.01);
        assert!((saturation_vapor_pressure(20.0) - 23.37).abs() < 0.05);
    }

    #[test]
    fn saturation_pressure_increases_with_temperature() {
        let mut last = saturation_vapor_pressure(-30.0);
        for t in [-20.0, -10.0, 0.0, 10.0, 20.0, 30.0, 40.0] {
            let svp = saturation_vapor_pressure(t);
            assert!(svp > last);
            last = svp;
        }
    }
}
