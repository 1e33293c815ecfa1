// hf-core/src/units.rs

use uom::si::f64::{Ratio as UomRatio, ThermodynamicTemperature as UomThermodynamicTemperature};

// Public canonical unit types (SI, f64)
pub type Humidity = UomRatio;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn fahrenheit(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_fahrenheit;
    Temperature::new::<degree_fahrenheit>(v)
}

#[inline]
pub fn kelvin(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn percent(v: f64) -> Humidity {
    use uom::si::ratio::percent;
    Humidity::new::<percent>(v)
}

/// Extract a temperature in °C, the working unit of the empirical formulas.
#[inline]
pub fn as_celsius(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

/// Extract a relative humidity in percent.
#[inline]
pub fn as_percent(h: Humidity) -> f64 {
    use uom::si::ratio::percent;
    h.get::<percent>()
}

pub mod constants {
    /// Offset between the Celsius and Kelvin scales.
    pub const CELSIUS_TO_KELVIN: f64 = 273.15;
}
