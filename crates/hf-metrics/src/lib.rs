//! hf-metrics: uniform per-metric facade for hygroflow.
//!
//! The host platform speaks in loosely-typed sensor values and change
//! notifications; the calculation layers below speak in typed readings.
//! This crate is the seam between the two:
//!
//! - [`MetricKind`]: the closed set of derived metrics, each with a fixed
//!   unit-of-measurement assignment
//! - [`RawReading`] / [`RawSnapshot`]: host-side values (text, numbers,
//!   or nothing), converted so that "not present" and "not parseable"
//!   become one absence signal
//! - [`MetricInput`]: the immutable per-evaluation snapshot
//! - [`EngineConfig`]: sensor-role bindings and the enabled metric set,
//!   validated once at setup
//! - [`MetricEngine`]: evaluates every enabled metric per notification
//!   and owns the single piece of mutable state (the mold risk index)
//!
//! # Example
//!
//! ```
//! use hf_metrics::{MetricEngine, MetricInput, MetricKind, MetricValue};
//!
//! let mut engine = MetricEngine::with_metrics(&[MetricKind::DewPoint]);
//! let input = MetricInput::indoor(Some(25.0), Some(60.0));
//! let reports = engine.evaluate(&input);
//! assert!(matches!(reports[0].value, Some(MetricValue::Quantity(_))));
//! ```

pub mod binding;
pub mod engine;
pub mod error;
pub mod input;
pub mod kind;
pub mod raw;
pub mod value;

// Re-exports for ergonomics
pub use binding::{validate_config, EngineConfig, SensorRole};
pub use engine::{MetricEngine, MetricReport};
pub use error::{MetricError, MetricResult};
pub use input::MetricInput;
pub use kind::MetricKind;
pub use raw::{RawReading, RawSnapshot, ReadingQuantity};
pub use value::MetricValue;
