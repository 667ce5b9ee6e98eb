#![forbid(unsafe_code)]

//! Constraint resolution for one drag step.
//!
//! Given the current state and a proposed value delta for one thumb, decide
//! the thumb's new value. Resolution is a pure function of its inputs; the
//! caller commits the result with [`RangeSliderState::apply`].
//!
//! # Algorithm
//!
//! 1. **Own-bound clamp.** `candidate = value + delta`, clamped to the thumb's
//!    [allowed range](RangeSliderState::allowed_range): its own bounds, the
//!    limits, and the non-crossing limit set by the other thumb. The upper
//!    bound is applied first, so a degenerate range resolves to its lower
//!    bound.
//! 2. **Mid check.** The mid value implied by the clamped candidate must lie in
//!    the mid bounds. If it does not, the whole proposal is rejected and the
//!    thumb keeps its pre-proposal value bit-for-bit.
//!
//! There is no partial correction after step 1: a candidate that violates the
//! mid bounds is never nudged back inside them.
//!
//! Both thumbs run the same steps with their roles swapped.

use crate::state::{RangeSliderState, Thumb};

/// Which side of a range was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    Min,
    Max,
}

/// Outcome of a proposal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// The candidate passed the mid check.
    Accepted {
        thumb: Thumb,
        /// Value before the proposal.
        previous: f64,
        /// Value after the own-bound clamp.
        value: f64,
        /// Mid value implied by `value`.
        mid: f64,
        /// Set when `value` sits on an end of the allowed range. A range
        /// that has collapsed to a point reports `Min`.
        clamped: Option<Limit>,
    },
    /// The candidate would have moved the mid value out of its bounds.
    Rejected {
        thumb: Thumb,
        /// Pre-proposal value, unchanged.
        value: f64,
        /// The clamped candidate that was refused.
        candidate: f64,
        /// Mid value the candidate would have produced.
        mid: f64,
        violation: Limit,
    },
}

impl Resolution {
    /// The thumb's value after resolution.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match *self {
            Self::Accepted { value, .. } | Self::Rejected { value, .. } => value,
        }
    }

    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Propose moving the left thumb's value by `delta`.
#[must_use]
pub fn propose_left(state: &RangeSliderState, delta: f64) -> Resolution {
    propose(state, Thumb::Left, delta)
}

/// Propose moving the right thumb's value by `delta`.
///
/// Right values are measured from the right end, so a positive delta moves
/// the thumb leftwards.
#[must_use]
pub fn propose_right(state: &RangeSliderState, delta: f64) -> Resolution {
    propose(state, Thumb::Right, delta)
}

/// Propose moving `thumb`'s value by `delta`.
#[must_use]
pub fn propose(state: &RangeSliderState, thumb: Thumb, delta: f64) -> Resolution {
    let previous = state.value(thumb);
    let other = state.value(thumb.opposite());

    let range = state.allowed_range(thumb, other);
    let raw = previous + delta;
    let candidate = range.clamp(raw);
    let clamped = if candidate <= range.min {
        Some(Limit::Min)
    } else if candidate >= range.max {
        Some(Limit::Max)
    } else {
        None
    };

    let mid = match thumb {
        Thumb::Left => state.mid_for(candidate, other),
        Thumb::Right => state.mid_for(other, candidate),
    };
    let mid_bounds = state.mid_bounds();
    let violation = if mid < mid_bounds.min {
        Some(Limit::Min)
    } else if mid > mid_bounds.max {
        Some(Limit::Max)
    } else {
        None
    };

    match violation {
        Some(violation) => Resolution::Rejected {
            thumb,
            value: previous,
            candidate,
            mid,
            violation,
        },
        None => Resolution::Accepted {
            thumb,
            previous,
            value: candidate,
            mid,
            clamped,
        },
    }
}
