#![forbid(unsafe_code)]

//! The range slider control.
//!
//! [`RangeSlider`] bundles the state, the drag controller, the current layout
//! and the event emitter behind the host-facing API:
//!
//! - configuration (`setup_*`, [`set_current_values`](RangeSlider::set_current_values)),
//!   called between drags;
//! - layout passes ([`set_geometry`](RangeSlider::set_geometry));
//! - pointer input ([`handle_pointer`](RangeSlider::handle_pointer));
//! - observers ([`subscribe`](RangeSlider::subscribe)).
//!
//! Pointer samples that arrive before the first layout pass are not handled:
//! there is nothing on screen to hit.

use duoslider_core::event::PointerSample;
use duoslider_core::geometry::{Geometry, Rect};

use crate::drag::{DragController, DragPhase, DragTarget};
use crate::emitter::{EventEmitter, SliderObserver, SubscriptionId};
use crate::error::ConfigError;
use crate::layout::SliderLayout;
use crate::state::{RangeSliderState, Thumb};

/// A dual-thumb range slider.
#[derive(Debug, Default)]
pub struct RangeSlider {
    state: RangeSliderState,
    drag: DragController,
    geometry: Option<Geometry>,
    layout: SliderLayout,
    emitter: EventEmitter,
}

impl RangeSlider {
    /// Create a slider from an already configured state.
    #[must_use]
    pub fn new(state: RangeSliderState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn state(&self) -> &RangeSliderState {
        &self.state
    }

    /// Frames from the last layout pass or drag step.
    #[must_use]
    pub const fn layout(&self) -> &SliderLayout {
        &self.layout
    }

    #[must_use]
    pub const fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.drag.phase()
    }

    #[must_use]
    pub const fn left(&self) -> f64 {
        self.state.left()
    }

    #[must_use]
    pub const fn right(&self) -> f64 {
        self.state.right()
    }

    #[must_use]
    pub fn mid(&self) -> f64 {
        self.state.mid()
    }

    /// Set the global limits.
    pub fn setup_limits(&mut self, min: f64, max: f64) -> Result<(), ConfigError> {
        self.state.setup_limits(min, max)?;
        self.configured("limits");
        Ok(())
    }

    /// Set one thumb's own bounds.
    pub fn setup_thumb_bounds(
        &mut self,
        thumb: Thumb,
        min: f64,
        max: f64,
    ) -> Result<(), ConfigError> {
        self.state.setup_thumb_bounds(thumb, min, max)?;
        self.configured("thumb bounds");
        Ok(())
    }

    /// Set the mid value's bounds.
    pub fn setup_mid_bounds(&mut self, min: f64, max: f64) -> Result<(), ConfigError> {
        self.state.setup_mid_bounds(min, max)?;
        self.configured("mid bounds");
        Ok(())
    }

    /// Set the displayed triple. See [`RangeSliderState::set_current_values`].
    pub fn set_current_values(&mut self, left: f64, mid: f64, right: f64) -> Result<(), ConfigError> {
        self.state.set_current_values(left, mid, right)?;
        self.configured("current values");
        Ok(())
    }

    /// Layout pass: store the new geometry and recompute frames.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = Some(geometry);
        self.relayout();
    }

    /// Layout pass from the view bounds (thumb width is half the height).
    pub fn set_view_bounds(&mut self, bounds: Rect) {
        self.set_geometry(Geometry::from_view_bounds(bounds));
    }

    /// Feed a pointer sample. Returns `true` when the slider claimed it.
    pub fn handle_pointer(&mut self, sample: PointerSample) -> bool {
        let Some(geometry) = self.geometry.as_ref() else {
            return false;
        };
        self.drag.handle(
            sample,
            DragTarget {
                state: &mut self.state,
                geometry,
                layout: &mut self.layout,
                emitter: &mut self.emitter,
            },
        )
    }

    /// Attach an event observer.
    pub fn subscribe(&mut self, observer: impl SliderObserver + 'static) -> SubscriptionId {
        self.emitter.subscribe(observer)
    }

    /// Detach an event observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.emitter.unsubscribe(id)
    }

    fn relayout(&mut self) {
        if let Some(geometry) = &self.geometry {
            self.layout =
                SliderLayout::compute(&self.state, geometry, self.drag.phase().thumb());
        }
    }

    fn configured(&mut self, _what: &'static str) {
        self.emitter.reset_status();
        self.relayout();

        #[cfg(feature = "tracing")]
        duoslider_core::debug!(
            what = _what,
            left = self.state.left(),
            mid = self.state.mid(),
            right = self.state.right(),
            "slider reconfigured"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::SliderEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn slider() -> RangeSlider {
        let mut slider = RangeSlider::default();
        slider.set_current_values(0.0, 40.0, 60.0).unwrap();
        slider
    }

    #[test]
    fn pointer_before_layout_is_ignored() {
        let mut slider = slider();
        assert!(!slider.handle_pointer(PointerSample::down(10.0, 10.0)));
        assert_eq!(slider.phase(), DragPhase::Idle);
    }

    #[test]
    fn layout_pass_places_thumbs() {
        let mut slider = slider();
        slider.set_view_bounds(Rect::from_size(335.0, 70.0));
        assert!((slider.layout().left_position - 17.5).abs() < 1e-9);
        assert!((slider.layout().right_position - 137.5).abs() < 1e-9);
    }

    #[test]
    fn resize_keeps_values_and_moves_frames() {
        let mut slider = slider();
        slider.set_view_bounds(Rect::from_size(335.0, 70.0));
        slider.set_view_bounds(Rect::from_size(635.0, 70.0));
        assert_eq!(slider.right(), 60.0);
        assert!((slider.layout().right_position - 257.5).abs() < 1e-9);
    }

    #[test]
    fn configuration_relayouts_and_validates() {
        let mut slider = slider();
        slider.set_view_bounds(Rect::from_size(335.0, 70.0));
        slider.set_current_values(10.0, 30.0, 60.0).unwrap();
        assert!((slider.layout().left_position - 47.5).abs() < 1e-9);

        assert!(slider.setup_mid_bounds(3.0, 2.0).is_err());
        assert!(slider.setup_thumb_bounds(Thumb::Left, f64::NAN, 2.0).is_err());
        assert!(slider.setup_limits(2.0, 1.0).is_err());
    }

    #[test]
    fn full_gesture_emits_and_detaches() {
        let mut slider = slider();
        slider.set_view_bounds(Rect::from_size(335.0, 70.0));
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let id = slider.subscribe(move |event: &SliderEvent| sink.borrow_mut().push(*event));

        assert!(slider.handle_pointer(PointerSample::down(17.5, 35.0)));
        assert!(slider.handle_pointer(PointerSample::moved(47.5, 35.0)));
        assert!(slider.handle_pointer(PointerSample::up(47.5, 35.0)));
        assert_eq!(log.borrow().len(), 2);

        assert!(slider.unsubscribe(id));
        slider.handle_pointer(PointerSample::down(47.5, 35.0));
        slider.handle_pointer(PointerSample::moved(77.5, 35.0));
        assert_eq!(log.borrow().len(), 2);
        assert!((slider.left() - 20.0).abs() < 1e-9);
    }
}
