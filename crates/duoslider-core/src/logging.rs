//! Logging facade.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros the
//! slider crates use, so downstream crates only need to forward the feature.
//! Without it the module is empty and all instrumentation compiles away.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace};

/// Span name used for each resolved drag step.
pub const DRAG_STEP_SPAN: &str = "slider.drag_step";
