#![forbid(unsafe_code)]

//! Closed numeric intervals.

use crate::error::{BoundsKind, ConfigError};

/// A closed interval `[min, max]` with `min <= max`.
///
/// Constructed through [`Bounds::new`], which validates, or
/// [`Bounds::new_unchecked`] for literals known to be well-formed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Validate and build bounds. `kind` only labels the error.
    pub fn new(kind: BoundsKind, min: f64, max: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFiniteBounds { kind, min, max });
        }
        if min > max {
            return Err(ConfigError::InvertedBounds { kind, min, max });
        }
        Ok(Self { min, max })
    }

    /// Build bounds without validation.
    #[must_use]
    pub const fn new_unchecked(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `max - min`.
    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` lies inside the closed interval.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into the interval.
    ///
    /// Applies the upper bound first and the lower bound last, so when
    /// `min > max` (possible only for intersections built internally) the
    /// result is `min`. Unlike [`f64::clamp`] this never panics.
    #[inline]
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    /// Intersection with `other`. May be degenerate (`min > max`) when the
    /// intervals are disjoint; callers rely on [`Bounds::clamp`]'s lower-bound
    /// tie-break in that case.
    #[must_use]
    pub fn intersect(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new_unchecked(0.0, 100.0)
    }
}
