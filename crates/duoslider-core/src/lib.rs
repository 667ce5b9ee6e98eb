#![forbid(unsafe_code)]

//! Core: geometry and pointer input types shared by the range slider crates.
//!
//! # Role in duoslider
//! `duoslider-core` is the input layer. It owns the floating-point geometry
//! primitives used for layout and hit testing, and the normalized pointer
//! samples that a host feeds into the slider engine.
//!
//! # How it fits in the system
//! `duoslider-engine` consumes [`event::PointerSample`] values and a
//! [`geometry::Geometry`] recomputed by the host on every layout pass. Nothing
//! here knows about slider values, so hosts can translate their native touch
//! or mouse events without pulling in the engine.

pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace};
