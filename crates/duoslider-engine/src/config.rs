#![forbid(unsafe_code)]

//! Declarative slider configuration.
//!
//! [`SliderConfig`] mirrors what a host sets up before showing the control:
//! global limits, a value and bounds per thumb, and the mid value with its
//! bounds. [`SliderConfig::build`] applies it through the same validating
//! setup API a host would call by hand, in the order limits, thumb bounds,
//! values, mid bounds. Every intermediate state of a valid config passes the
//! setup checks in that order.
//!
//! With the `serde` feature the config can be loaded from JSON or any other
//! serde format; missing fields take their defaults.

use crate::bounds::Bounds;
use crate::error::{BoundsKind, ConfigError};
use crate::slider::RangeSlider;
use crate::state::{RangeSliderState, Thumb};

/// Value and bounds for one element of the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementConfig {
    pub value: f64,
    pub bounds: Bounds,
}

/// Full configuration of a range slider.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderConfig {
    pub limits: Bounds,
    pub left: ElementConfig,
    /// `value` is derived from the thumbs and only checked for consistency.
    pub mid: ElementConfig,
    /// Measured from the `limits.max` end.
    pub right: ElementConfig,
}

impl Default for SliderConfig {
    /// Limits `[0, 100]`, left thumb at 0, right thumb 60 from the right end,
    /// leaving a mid of 40; every range spans `[0, 100]`.
    fn default() -> Self {
        let full = Bounds::new_unchecked(0.0, 100.0);
        Self {
            limits: full,
            left: ElementConfig {
                value: 0.0,
                bounds: full,
            },
            mid: ElementConfig {
                value: 40.0,
                bounds: full,
            },
            right: ElementConfig {
                value: 60.0,
                bounds: full,
            },
        }
    }
}

impl SliderConfig {
    /// Validate and produce the configured state.
    pub fn into_state(self) -> Result<RangeSliderState, ConfigError> {
        let limits = Bounds::new(BoundsKind::Limits, self.limits.min, self.limits.max)?;
        let mut state = RangeSliderState::with_limits(limits);
        state.setup_thumb_bounds(Thumb::Left, self.left.bounds.min, self.left.bounds.max)?;
        state.setup_thumb_bounds(Thumb::Right, self.right.bounds.min, self.right.bounds.max)?;
        state.set_current_values(self.left.value, self.mid.value, self.right.value)?;
        state.setup_mid_bounds(self.mid.bounds.min, self.mid.bounds.max)?;
        Ok(state)
    }

    /// Validate and produce a ready slider (no geometry yet).
    pub fn build(self) -> Result<RangeSlider, ConfigError> {
        self.into_state().map(RangeSlider::new)
    }
}
