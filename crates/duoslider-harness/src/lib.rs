#![forbid(unsafe_code)]

//! Scripted replay of pointer gestures against a [`duoslider_engine::RangeSlider`].
//!
//! A script bundles a [`duoslider_engine::SliderConfig`], a view size and a
//! list of pointer samples. Replaying it drives the slider exactly as a host
//! would and records the text of the left, middle, right and message labels
//! after every sample that changed them.

pub mod cli;
pub mod error;
pub mod labels;
pub mod script;

pub use cli::run_from_env;
pub use error::{HarnessError, Result};
