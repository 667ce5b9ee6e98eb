#![forbid(unsafe_code)]

//! Slider state: the single source of truth for thumb values and bounds.
//!
//! # Value model
//!
//! The left value is measured from the `limits.min` end of the track, the
//! right value from the `limits.max` end. Both live in `limits`; a larger
//! right value moves the right thumb further left.
//!
//! The middle value is the room left between the thumbs:
//!
//! ```text
//! mid = (limits.max - limits.min) - ((left - limits.min) + (right - limits.min))
//! ```
//!
//! which is `span - (left + right)` for sliders whose limits start at zero. It
//! is derived on every read and never stored, so it cannot drift.
//!
//! # Invariants
//!
//! 1. `limits`, thumb bounds and mid bounds are finite with `min <= max`.
//! 2. Drag updates only arrive through [`RangeSliderState::apply`], which takes
//!    a [`Resolution`] produced by the resolver; rejected resolutions leave the
//!    state untouched.
//! 3. Thumb bounds are intersected with `limits` when resolving, so they may be
//!    configured in any order relative to the limits.
//! 4. Every setup call leaves the thumbs uncrossed and the mid inside its
//!    bounds, or fails and leaves the state as it was.

use crate::bounds::Bounds;
use crate::error::{BoundsKind, ConfigError};
use crate::mapper::Anchor;
use crate::resolver::Resolution;

/// Relative tolerance when checking a caller-supplied mid value against the
/// derived one.
const MID_TOLERANCE: f64 = 1e-9;

/// A derived mid within this many ulps of the limits' magnitude is zero.
const PIN_ULPS: f64 = 16.0;

/// One of the two draggable thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Thumb {
    Left,
    Right,
}

impl Thumb {
    /// The end of the track this thumb's value is measured from.
    #[must_use]
    pub const fn anchor(self) -> Anchor {
        match self {
            Self::Left => Anchor::Left,
            Self::Right => Anchor::Right,
        }
    }

    /// The other thumb.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl std::fmt::Display for Thumb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// A thumb's current value and its own bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbConfig {
    pub value: f64,
    pub bounds: Bounds,
}

/// Values and bounds of a dual-thumb slider.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSliderState {
    limits: Bounds,
    left: ThumbConfig,
    right: ThumbConfig,
    mid_bounds: Bounds,
}

impl Default for RangeSliderState {
    fn default() -> Self {
        Self::with_limits(Bounds::default())
    }
}

impl RangeSliderState {
    /// State with both thumbs at their outer ends, thumb bounds equal to
    /// `limits` and mid bounds covering the whole span.
    #[must_use]
    pub fn with_limits(limits: Bounds) -> Self {
        let thumb = ThumbConfig {
            value: limits.min,
            bounds: limits,
        };
        Self {
            limits,
            left: thumb,
            right: thumb,
            mid_bounds: Bounds::new_unchecked(0.0, limits.span()),
        }
    }

    /// Global limits.
    #[must_use]
    pub const fn limits(&self) -> Bounds {
        self.limits
    }

    /// Configuration of one thumb.
    #[must_use]
    pub const fn thumb(&self, thumb: Thumb) -> &ThumbConfig {
        match thumb {
            Thumb::Left => &self.left,
            Thumb::Right => &self.right,
        }
    }

    /// Current value of one thumb.
    #[must_use]
    pub const fn value(&self, thumb: Thumb) -> f64 {
        self.thumb(thumb).value
    }

    #[must_use]
    pub const fn left(&self) -> f64 {
        self.left.value
    }

    #[must_use]
    pub const fn right(&self) -> f64 {
        self.right.value
    }

    /// Bounds of the derived middle value.
    #[must_use]
    pub const fn mid_bounds(&self) -> Bounds {
        self.mid_bounds
    }

    /// The derived middle value.
    #[must_use]
    pub fn mid(&self) -> f64 {
        self.mid_for(self.left.value, self.right.value)
    }

    /// Middle value the slider would have with the given thumb values.
    ///
    /// Thumbs pinned against each other give exactly zero; the rounding left
    /// over from the non-crossing limit is dropped.
    #[must_use]
    pub fn mid_for(&self, left: f64, right: f64) -> f64 {
        let min = self.limits.min;
        let mid = self.limits.span() - ((left - min) + (right - min));
        let scale = self.limits.min.abs().max(self.limits.max.abs());
        if mid.abs() <= PIN_ULPS * f64::EPSILON * scale {
            0.0
        } else {
            mid
        }
    }

    /// Range a thumb may take while the other thumb holds `other_value`.
    ///
    /// The intersection of the thumb's own bounds, the limits, and the
    /// non-crossing limit `limits.max - (other_value - limits.min)`. May be
    /// degenerate when the constraints do not overlap.
    #[must_use]
    pub fn allowed_range(&self, thumb: Thumb, other_value: f64) -> Bounds {
        let own = self.thumb(thumb).bounds.intersect(&self.limits);
        let opposing = self.limits.max - (other_value - self.limits.min);
        Bounds {
            min: own.min,
            max: own.max.min(opposing),
        }
    }

    /// Set the global limits. Current values are clamped into the new limits;
    /// thumb and mid bounds are kept as configured.
    ///
    /// Fails without mutating anything when the clamped values would cross or
    /// leave the mid outside its bounds.
    pub fn setup_limits(&mut self, min: f64, max: f64) -> Result<(), ConfigError> {
        let limits = Bounds::new(BoundsKind::Limits, min, max)?;
        let mut next = self.clone();
        next.limits = limits;
        next.left.value = limits.clamp(self.left.value);
        next.right.value = limits.clamp(self.right.value);
        next.check()?;
        *self = next;
        Ok(())
    }

    /// Set one thumb's own bounds. Its current value is clamped into them.
    ///
    /// Fails without mutating anything when the clamped value would cross the
    /// other thumb or leave the mid outside its bounds.
    pub fn setup_thumb_bounds(
        &mut self,
        thumb: Thumb,
        min: f64,
        max: f64,
    ) -> Result<(), ConfigError> {
        let bounds = Bounds::new(BoundsKind::Thumb(thumb), min, max)?;
        let mut next = self.clone();
        let limits = next.limits;
        let config = next.thumb_mut(thumb);
        config.bounds = bounds;
        config.value = bounds.intersect(&limits).clamp(config.value);
        next.check()?;
        *self = next;
        Ok(())
    }

    /// Set the bounds of the derived middle value. The current mid must lie
    /// inside them.
    pub fn setup_mid_bounds(&mut self, min: f64, max: f64) -> Result<(), ConfigError> {
        let mid_bounds = Bounds::new(BoundsKind::Mid, min, max)?;
        check_mid(&mid_bounds, self.mid())?;
        self.mid_bounds = mid_bounds;
        Ok(())
    }

    /// Set both thumb values at once.
    ///
    /// `mid` must match the middle value derived from `left` and `right`; it is
    /// accepted so hosts can pass the triple they display. Fails without
    /// mutating anything when a value is outside its allowed range or the mid
    /// is inconsistent or out of its bounds.
    pub fn set_current_values(&mut self, left: f64, mid: f64, right: f64) -> Result<(), ConfigError> {
        for (thumb, value) in [(Thumb::Left, left), (Thumb::Right, right)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteValue { thumb, value });
            }
        }
        self.check_ranges(left, right)?;

        let derived = self.mid_for(left, right);
        if (mid - derived).abs() > MID_TOLERANCE * derived.abs().max(1.0) {
            return Err(ConfigError::InconsistentMid {
                given: mid,
                derived,
            });
        }
        check_mid(&self.mid_bounds, derived)?;

        self.left.value = left;
        self.right.value = right;
        Ok(())
    }

    /// Commit a resolver outcome. Rejections are no-ops.
    pub fn apply(&mut self, resolution: &Resolution) {
        if let Resolution::Accepted { thumb, value, .. } = *resolution {
            self.thumb_mut(thumb).value = value;
        }
    }

    /// Capture values and bounds for persistence.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            limits: self.limits,
            left: self.left,
            right: self.right,
            mid_bounds: self.mid_bounds,
        }
    }

    /// Rebuild state from a snapshot, re-running every configuration check.
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Result<Self, ConfigError> {
        let mut state = Self::with_limits(Bounds::new(
            BoundsKind::Limits,
            snapshot.limits.min,
            snapshot.limits.max,
        )?);
        for (thumb, config) in [(Thumb::Left, snapshot.left), (Thumb::Right, snapshot.right)] {
            state.setup_thumb_bounds(thumb, config.bounds.min, config.bounds.max)?;
        }
        let mid = state.mid_for(snapshot.left.value, snapshot.right.value);
        state.set_current_values(snapshot.left.value, mid, snapshot.right.value)?;
        state.setup_mid_bounds(snapshot.mid_bounds.min, snapshot.mid_bounds.max)?;
        Ok(state)
    }

    fn thumb_mut(&mut self, thumb: Thumb) -> &mut ThumbConfig {
        match thumb {
            Thumb::Left => &mut self.left,
            Thumb::Right => &mut self.right,
        }
    }

    /// Both thumbs inside their allowed ranges and the mid inside its bounds.
    fn check(&self) -> Result<(), ConfigError> {
        self.check_ranges(self.left.value, self.right.value)?;
        check_mid(&self.mid_bounds, self.mid())
    }

    /// Own bounds first, then non-crossing. Crossing is measured on the mid
    /// so thumbs pinned by the resolver always pass.
    fn check_ranges(&self, left: f64, right: f64) -> Result<(), ConfigError> {
        for (thumb, value) in [(Thumb::Left, left), (Thumb::Right, right)] {
            let own = self.thumb(thumb).bounds.intersect(&self.limits);
            if !own.contains(value) {
                return Err(ConfigError::ValueOutOfBounds {
                    thumb,
                    value,
                    min: own.min,
                    max: own.max,
                });
            }
        }
        let mid = self.mid_for(left, right);
        if mid < 0.0 {
            return Err(ConfigError::ThumbsCrossed {
                left,
                right,
                overlap: -mid,
            });
        }
        Ok(())
    }
}

fn check_mid(bounds: &Bounds, mid: f64) -> Result<(), ConfigError> {
    if bounds.contains(mid) {
        Ok(())
    } else {
        Err(ConfigError::MidOutOfBounds {
            mid,
            min: bounds.min,
            max: bounds.max,
        })
    }
}

/// Serializable copy of a [`RangeSliderState`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateSnapshot {
    pub limits: Bounds,
    pub left: ThumbConfig,
    pub right: ThumbConfig,
    pub mid_bounds: Bounds,
}
