//! hf-advisor: decision and state layers on top of the formula library.
//!
//! Two advisors live here:
//! - **Ventilation**: stateless indoor-vs-outdoor absolute humidity
//!   comparison producing a recommendation label and an estimated airing
//!   duration.
//! - **Mold risk**: a bounded accumulator that integrates sustained warm,
//!   damp conditions into a 0-6 index, one discrete step per evaluation.
//!
//! # Design Principles
//!
//! - **Pure transitions**: the mold step is `(state, input) -> (state,
//!   output)`; the caller owns the state and decides how to serialize
//!   access to it.
//! - **Fail-soft**: absent readings produce absent outputs and, for the
//!   accumulator, leave the state untouched.
//! - **Parameterized, validated**: thresholds and rates are plain serde
//!   structs with validated constructors and reference defaults.

pub mod error;
pub mod mold;
pub mod ventilation;

pub use error::{AdvisorError, AdvisorResult};
pub use mold::{MoldModel, MoldRiskState};
pub use ventilation::{AirSample, VentilationAdvice, VentilationPolicy};
