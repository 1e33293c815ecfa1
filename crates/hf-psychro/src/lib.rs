//! hf-psychro: psychrometric formula library for hygroflow.
//!
//! Provides:
//! - Magnus saturation vapor pressure
//! - Vapor pressure and absolute humidity
//! - Dew point (Magnus inversion)
//! - Specific enthalpy of moist air
//!
//! # Architecture
//!
//! Every function here is stateless and fail-soft: an absent input
//! (`Reading::None`) or a mathematically undefined combination yields
//! `None` instead of panicking or surfacing NaN/infinity. Rounding to the
//! precision the presentation layer expects happens inside the formulas,
//! so downstream consumers compare and forward the values as-is.
//!
//! # Example
//!
//! ```
//! use hf_psychro::{absolute_humidity, dew_point};
//!
//! let ah = absolute_humidity(Some(20.0), Some(50.0)).unwrap();
//! assert!((ah - 8.64).abs() < 0.01);
//!
//! // A dropped sensor propagates as absence, never as zero.
//! assert_eq!(dew_point(None, Some(50.0)), None);
//! ```

pub mod dew_point;
pub mod enthalpy;
pub mod humidity;
pub mod magnus;

// Re-exports for ergonomics
pub use dew_point::dew_point;
pub use enthalpy::moist_air_enthalpy;
pub use humidity::{absolute_humidity, vapor_pressure};
pub use magnus::saturation_vapor_pressure;
