#![forbid(unsafe_code)]

//! Frames handed to the host renderer.
//!
//! Recomputed from a state snapshot and the current geometry after every
//! accepted step and every layout pass. The host draws from these frames;
//! nothing here holds a reference back into the slider.

use duoslider_core::geometry::{Geometry, Point, Rect};

use crate::mapper::value_to_position;
use crate::state::{RangeSliderState, Thumb};

/// Positions and rectangles for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderLayout {
    /// Center of the left thumb along the track.
    pub left_position: f64,
    /// Center of the right thumb along the track.
    pub right_position: f64,
    /// Track bar: the view inset vertically by a third of its height.
    pub track_rect: Rect,
    pub left_thumb_rect: Rect,
    pub right_thumb_rect: Rect,
    /// Track segment from the left edge to the left thumb.
    pub left_back_rect: Rect,
    /// Track segment from the right thumb to the right edge.
    pub right_back_rect: Rect,
    pub left_highlighted: bool,
    pub right_highlighted: bool,
}

impl SliderLayout {
    /// Compute frames for `state` under `geometry`. `active` marks the thumb
    /// currently being dragged, if any.
    #[must_use]
    pub fn compute(state: &RangeSliderState, geometry: &Geometry, active: Option<Thumb>) -> Self {
        let limits = state.limits();
        let view = geometry.view_rect();
        let track_rect = view.inset(0.0, geometry.height / 3.0);

        let left_position =
            value_to_position(state.left(), &limits, geometry, Thumb::Left.anchor());
        let right_position =
            value_to_position(state.right(), &limits, geometry, Thumb::Right.anchor());

        let thumb_rect = |center: f64| {
            Rect::new(
                center - geometry.half_thumb(),
                0.0,
                geometry.thumb_width,
                geometry.height,
            )
        };
        let left_thumb_rect = thumb_rect(left_position);
        let right_thumb_rect = thumb_rect(right_position);

        let left_back_rect = Rect::new(
            0.0,
            track_rect.y,
            left_thumb_rect.x.max(0.0),
            track_rect.height,
        );
        let right_back_rect = Rect::new(
            right_thumb_rect.x,
            track_rect.y,
            (view.width - right_thumb_rect.x).max(0.0),
            track_rect.height,
        );

        Self {
            left_position,
            right_position,
            track_rect,
            left_thumb_rect,
            right_thumb_rect,
            left_back_rect,
            right_back_rect,
            left_highlighted: active == Some(Thumb::Left),
            right_highlighted: active == Some(Thumb::Right),
        }
    }

    /// Rectangle of one thumb.
    #[must_use]
    pub const fn thumb_rect(&self, thumb: Thumb) -> Rect {
        match thumb {
            Thumb::Left => self.left_thumb_rect,
            Thumb::Right => self.right_thumb_rect,
        }
    }

    /// Thumb under `point`, testing the left thumb first.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<Thumb> {
        [Thumb::Left, Thumb::Right]
            .into_iter()
            .find(|&thumb| self.thumb_rect(thumb).contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    /// 335 x 70 view: thumbs are 35 wide, usable length 300.
    fn geometry() -> Geometry {
        Geometry::from_view_bounds(Rect::from_size(335.0, 70.0))
    }

    fn host_state() -> RangeSliderState {
        let mut state = RangeSliderState::default();
        state.set_current_values(0.0, 40.0, 60.0).unwrap();
        state
    }

    #[test]
    fn frames_follow_values() {
        let layout = SliderLayout::compute(&host_state(), &geometry(), None);

        assert!((layout.left_position - 17.5).abs() < EPS);
        // right value 60 from the right end: 40% along the usable length
        assert!((layout.right_position - 137.5).abs() < EPS);

        assert_eq!(layout.left_thumb_rect, Rect::new(0.0, 0.0, 35.0, 70.0));
        assert!((layout.right_thumb_rect.x - 120.0).abs() < EPS);

        let third = 70.0 / 3.0;
        assert!((layout.track_rect.y - third).abs() < EPS);
        assert!((layout.track_rect.height - third).abs() < EPS);
        assert_eq!(layout.track_rect.width, 335.0);
    }

    #[test]
    fn back_rects_cover_outer_segments() {
        let layout = SliderLayout::compute(&host_state(), &geometry(), None);

        assert_eq!(layout.left_back_rect.x, 0.0);
        assert_eq!(layout.left_back_rect.width, layout.left_thumb_rect.x);
        assert_eq!(layout.left_back_rect.y, layout.track_rect.y);

        assert_eq!(layout.right_back_rect.x, layout.right_thumb_rect.x);
        assert!((layout.right_back_rect.right() - 335.0).abs() < EPS);
        assert_eq!(layout.right_back_rect.height, layout.track_rect.height);
    }

    #[test]
    fn hit_test_prefers_left_thumb() {
        let mut state = RangeSliderState::default();
        // thumbs touching: left at 50, right 50 from the right end
        state.set_current_values(50.0, 0.0, 50.0).unwrap();
        let layout = SliderLayout::compute(&state, &geometry(), None);
        let center = Point::new(layout.left_position, 35.0);
        assert_eq!(layout.hit_test(center), Some(Thumb::Left));
    }

    #[test]
    fn hit_test_misses_track() {
        let layout = SliderLayout::compute(&host_state(), &geometry(), None);
        assert_eq!(layout.hit_test(Point::new(300.0, 35.0)), None);
        assert_eq!(
            layout.hit_test(Point::new(layout.right_position, 10.0)),
            Some(Thumb::Right)
        );
    }

    #[test]
    fn highlight_flags_track_active_thumb() {
        let layout = SliderLayout::compute(&host_state(), &geometry(), Some(Thumb::Right));
        assert!(!layout.left_highlighted);
        assert!(layout.right_highlighted);
    }
}
