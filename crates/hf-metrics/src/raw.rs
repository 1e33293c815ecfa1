//! Raw sensor values as supplied by the host.
//!
//! The host hands over whatever its sensor state currently holds: a
//! number, a string, or nothing at all. This module converts those loose
//! values into typed [`Reading`]s. "Not present" and "not parseable as a
//! number" deliberately collapse into one absence signal here — the rest
//! of the engine never distinguishes a missing sensor from one reporting
//! garbage.

use hf_core::units::{as_celsius, fahrenheit, kelvin};
use hf_core::{Reading, Real};

/// Dimension of a raw reading, selecting how unit suffixes are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingQuantity {
    /// Air temperature (canonical: °C; bare numbers are taken as °C)
    Temperature,
    /// Relative humidity (canonical: percent; bare numbers are percent)
    RelativeHumidity,
}

/// A raw value for one bound sensor, exactly as the host reported it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawReading {
    /// The sensor is not present or currently reports no value.
    #[default]
    Absent,
    /// A textual state, e.g. `"21.4"`, `"70 °F"`, or `"offline"`.
    Text(String),
    /// An already-numeric state.
    Value(Real),
}

impl RawReading {
    /// Convert to a typed reading.
    ///
    /// Absent values, unparseable text, unknown unit suffixes, and
    /// non-finite numbers all become `None`.
    pub fn to_reading(&self, quantity: ReadingQuantity) -> Reading {
        let value = match self {
            Self::Absent => return None,
            Self::Value(v) => *v,
            Self::Text(text) => parse_reading(text, quantity)?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<Option<f64>> for RawReading {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Absent,
        }
    }
}

impl From<&str> for RawReading {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Parse a textual reading, honoring an optional unit suffix.
fn parse_reading(text: &str, quantity: ReadingQuantity) -> Option<Real> {
    let (value, unit) = split_value_and_unit(text)?;
    match quantity {
        ReadingQuantity::Temperature => convert_temperature(value, &unit),
        ReadingQuantity::RelativeHumidity => convert_humidity(value, &unit),
    }
}

/// Convert a temperature to °C from the suffix's unit.
fn convert_temperature(value: Real, unit: &str) -> Option<Real> {
    match unit.to_lowercase().as_str() {
        // Sensors report °C by default.
        "" | "c" | "°c" | "celsius" => Some(value),
        "f" | "°f" | "fahrenheit" => Some(as_celsius(fahrenheit(value))),
        "k" | "kelvin" => Some(as_celsius(kelvin(value))),
        _ => None,
    }
}

/// Convert a relative humidity to percent.
fn convert_humidity(value: Real, unit: &str) -> Option<Real> {
    match unit.to_lowercase().as_str() {
        "" | "%" | "percent" => Some(value),
        _ => None,
    }
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "70F" -> (70.0, "F")
/// - "21.4 °C" -> (21.4, "°C")
/// - "55" -> (55.0, "")
fn split_value_and_unit(input: &str) -> Option<(Real, String)> {
    let trimmed = input.trim();

    // Find where the numeric part ends
    let split_idx = trimmed
        .find(|c: char| !c.is_numeric() && c != '.' && c != '-' && c != '+' && c != 'e' && c != 'E')
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let value: Real = num_part.trim().parse().ok()?;
    Some((value, unit_part.trim().to_string()))
}

/// The four current raw values, one per sensor role.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSnapshot {
    pub indoor_temperature: RawReading,
    pub indoor_humidity: RawReading,
    pub outdoor_temperature: RawReading,
    pub outdoor_humidity: RawReading,
}
