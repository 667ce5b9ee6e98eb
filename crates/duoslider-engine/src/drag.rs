#![forbid(unsafe_code)]

//! Drag orchestration.
//!
//! [`DragController`] owns the ephemeral drag session and turns pointer
//! samples into resolver proposals.
//!
//! # State Machine
//!
//! ```text
//! Idle --down on left thumb--> DraggingLeft --up/cancel--> Idle
//! Idle --down on right thumb-> DraggingRight --up/cancel-> Idle
//! ```
//!
//! - A down that misses both thumbs leaves the controller idle and is reported
//!   as not handled, so the host can route the gesture elsewhere.
//! - Each move computes the delta from the *previous sample*, not from the drag
//!   start, so updates are incremental and a rejected step does not build up a
//!   debt the thumb has to pay back later.
//! - Release never changes a value.
//! - Samples that arrive while idle (other than down) are ignored.
//!
//! # Invariants
//!
//! 1. At most one thumb is active.
//! 2. State is only mutated through [`RangeSliderState::apply`] with a
//!    resolution computed from the same state.
//! 3. Within one move, the thumb event precedes the mid event.

use duoslider_core::event::{PointerPhase, PointerSample};
use duoslider_core::geometry::{Geometry, Point};

use crate::emitter::EventEmitter;
use crate::layout::SliderLayout;
use crate::mapper::delta_value;
use crate::resolver::{self, Resolution};
use crate::state::{RangeSliderState, Thumb};

/// Externally visible drag phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    DraggingLeft,
    DraggingRight,
}

impl DragPhase {
    /// The thumb being dragged, if any.
    #[must_use]
    pub const fn thumb(self) -> Option<Thumb> {
        match self {
            Self::Idle => None,
            Self::DraggingLeft => Some(Thumb::Left),
            Self::DraggingRight => Some(Thumb::Right),
        }
    }
}

impl From<Thumb> for DragPhase {
    fn from(thumb: Thumb) -> Self {
        match thumb {
            Thumb::Left => Self::DraggingLeft,
            Thumb::Right => Self::DraggingRight,
        }
    }
}

/// An active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    thumb: Thumb,
    previous: Point,
}

/// Everything a drag step reads or mutates, borrowed from the owning control.
pub struct DragTarget<'a> {
    pub state: &'a mut RangeSliderState,
    pub geometry: &'a Geometry,
    pub layout: &'a mut SliderLayout,
    pub emitter: &'a mut EventEmitter,
}

/// Per-gesture drag state machine.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.session
            .map_or(DragPhase::Idle, |session| session.thumb.into())
    }

    /// Feed one pointer sample. Returns `true` when the sample was claimed.
    pub fn handle(&mut self, sample: PointerSample, target: DragTarget<'_>) -> bool {
        match sample.phase {
            PointerPhase::Down => self.begin(sample.position, target),
            PointerPhase::Move => self.step(sample.position, target).is_some(),
            phase if phase.is_terminal() => self.end(target),
            _ => false,
        }
    }

    /// Start a drag if `position` hits a thumb.
    ///
    /// A down while already dragging starts over with a fresh hit test.
    pub fn begin(&mut self, position: Point, target: DragTarget<'_>) -> bool {
        let hit = target.layout.hit_test(position);
        self.session = hit.map(|thumb| DragSession {
            thumb,
            previous: position,
        });
        *target.layout = SliderLayout::compute(target.state, target.geometry, hit);

        #[cfg(feature = "tracing")]
        match hit {
            Some(thumb) => duoslider_core::debug!(%thumb, x = position.x, "slider drag started"),
            None => duoslider_core::trace!(x = position.x, y = position.y, "pointer down missed thumbs"),
        }

        hit.is_some()
    }

    /// Advance the active drag to `position`.
    ///
    /// Returns the resolution that was applied, or `None` when idle.
    pub fn step(&mut self, position: Point, target: DragTarget<'_>) -> Option<Resolution> {
        let session = self.session.as_mut()?;
        let thumb = session.thumb;
        let delta_position = position.x - session.previous.x;
        session.previous = position;

        let limits = target.state.limits();
        let delta = delta_value(delta_position, &limits, target.geometry, thumb.anchor());
        let resolution = resolver::propose(target.state, thumb, delta);

        #[cfg(feature = "tracing")]
        let _span = duoslider_core::debug_span!(
            "slider.drag_step",
            %thumb,
            delta_position,
            delta_value = delta,
            accepted = resolution.is_accepted(),
            value = resolution.value()
        )
        .entered();

        #[cfg(feature = "tracing")]
        if let Resolution::Rejected {
            candidate, mid, violation, ..
        } = resolution
        {
            duoslider_core::trace!(candidate, mid, ?violation, "proposal rejected by mid bounds");
        }

        target.state.apply(&resolution);
        *target.layout = SliderLayout::compute(target.state, target.geometry, Some(thumb));
        target.emitter.dispatch(&resolution);
        Some(resolution)
    }

    /// End the active drag. Returns `false` when there was nothing to end.
    pub fn end(&mut self, target: DragTarget<'_>) -> bool {
        let Some(_session) = self.session.take() else {
            return false;
        };
        target.layout.left_highlighted = false;
        target.layout.right_highlighted = false;

        #[cfg(feature = "tracing")]
        duoslider_core::debug!(thumb = %_session.thumb, "slider drag ended");

        true
    }
}
