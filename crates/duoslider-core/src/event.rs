#![forbid(unsafe_code)]

//! Canonical pointer input types.
//!
//! Hosts translate their native touch or mouse callbacks into
//! [`PointerSample`]s. Only one pointer is tracked at a time; a host with
//! multi-touch should forward the first touch and drop the rest.
//!
//! # Design Notes
//!
//! - Positions are in slider view coordinates (see [`crate::geometry`]).
//! - `Cancel` is distinct from `Up` so hosts can tell an interrupted gesture
//!   from a completed one; the engine treats both as the end of a drag.

use crate::geometry::Point;

/// Phase of a pointer sample within a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Pointer went down (touch began / button pressed).
    Down,
    /// Pointer moved while down.
    Move,
    /// Pointer lifted.
    Up,
    /// Gesture interrupted by the system.
    Cancel,
}

impl PointerPhase {
    /// Whether this phase ends a gesture.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// A raw pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Point,
    pub phase: PointerPhase,
}

impl PointerSample {
    /// Create a new sample.
    #[must_use]
    pub const fn new(position: Point, phase: PointerPhase) -> Self {
        Self { position, phase }
    }

    /// A `Down` sample at `(x, y)`.
    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), PointerPhase::Down)
    }

    /// A `Move` sample at `(x, y)`.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), PointerPhase::Move)
    }

    /// An `Up` sample at `(x, y)`.
    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), PointerPhase::Up)
    }

    /// A `Cancel` sample at `(x, y)`.
    #[must_use]
    pub const fn cancel(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), PointerPhase::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_phases() {
        assert!(!PointerPhase::Down.is_terminal());
        assert!(!PointerPhase::Move.is_terminal());
        assert!(PointerPhase::Up.is_terminal());
        assert!(PointerPhase::Cancel.is_terminal());
    }

    #[test]
    fn constructors_set_phase() {
        assert_eq!(PointerSample::down(1.0, 2.0).phase, PointerPhase::Down);
        assert_eq!(PointerSample::moved(1.0, 2.0).phase, PointerPhase::Move);
        assert_eq!(PointerSample::up(1.0, 2.0).phase, PointerPhase::Up);
        assert_eq!(PointerSample::cancel(1.0, 2.0).phase, PointerPhase::Cancel);
        assert_eq!(PointerSample::moved(1.0, 2.0).position, Point::new(1.0, 2.0));
    }
}
