#![forbid(unsafe_code)]

//! Value <-> position mapping.
//!
//! Thumb centers travel over `[half_thumb, track_length - half_thumb]`, so a
//! thumb at either extreme sits flush with the track end. Values are mapped
//! linearly onto that interval.
//!
//! A [`Anchor::Left`] value grows from the left end of the track; a
//! [`Anchor::Right`] value grows from the right end, so its position
//! *decreases* as the value increases.
//!
//! All functions are pure. Degenerate inputs (zero span, or a view narrower
//! than one thumb) never divide by zero: positions collapse onto the anchor's
//! starting edge and values onto `bounds.min`.

use duoslider_core::geometry::Geometry;

use crate::bounds::Bounds;

/// Which end of the track a value is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    Left,
    Right,
}

#[inline]
fn is_degenerate(bounds: &Bounds, geometry: &Geometry) -> bool {
    geometry.usable_length() <= 0.0 || bounds.span() <= 0.0
}

/// Center position of a thumb holding `value`.
#[must_use]
pub fn value_to_position(value: f64, bounds: &Bounds, geometry: &Geometry, anchor: Anchor) -> f64 {
    let half = geometry.half_thumb();
    if is_degenerate(bounds, geometry) {
        return match anchor {
            Anchor::Left => half,
            Anchor::Right => geometry.track_length - half,
        };
    }
    let usable = geometry.usable_length();
    let from_anchor = match anchor {
        Anchor::Left => value - bounds.min,
        Anchor::Right => bounds.max - value,
    };
    usable * from_anchor / bounds.span() + half
}

/// Inverse of [`value_to_position`].
#[must_use]
pub fn position_to_value(
    position: f64,
    bounds: &Bounds,
    geometry: &Geometry,
    anchor: Anchor,
) -> f64 {
    if is_degenerate(bounds, geometry) {
        return bounds.min;
    }
    let along = (position - geometry.half_thumb()) * bounds.span() / geometry.usable_length();
    match anchor {
        Anchor::Left => bounds.min + along,
        Anchor::Right => bounds.max - along,
    }
}

/// Value change produced by moving the pointer `delta_position` units to the
/// right.
///
/// `(max - min) * delta_position / (track_length - thumb_width)`, negated for
/// right-anchored values.
#[must_use]
pub fn delta_value(
    delta_position: f64,
    bounds: &Bounds,
    geometry: &Geometry,
    anchor: Anchor,
) -> f64 {
    let usable = geometry.usable_length();
    if usable <= 0.0 {
        return 0.0;
    }
    let scaled = bounds.span() * delta_position / usable;
    match anchor {
        Anchor::Left => scaled,
        Anchor::Right => -scaled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn geometry() -> Geometry {
        // usable length 300, half thumb 17.5
        Geometry::new(335.0, 35.0, 70.0)
    }

    fn bounds() -> Bounds {
        Bounds::new_unchecked(0.0, 100.0)
    }

    #[test]
    fn left_anchor_endpoints() {
        let g = geometry();
        let b = bounds();
        assert!((value_to_position(0.0, &b, &g, Anchor::Left) - 17.5).abs() < EPS);
        assert!((value_to_position(100.0, &b, &g, Anchor::Left) - 317.5).abs() < EPS);
        assert!((value_to_position(50.0, &b, &g, Anchor::Left) - 167.5).abs() < EPS);
    }

    #[test]
    fn right_anchor_is_reversed() {
        let g = geometry();
        let b = bounds();
        assert!((value_to_position(0.0, &b, &g, Anchor::Right) - 317.5).abs() < EPS);
        assert!((value_to_position(100.0, &b, &g, Anchor::Right) - 17.5).abs() < EPS);
        let p10 = value_to_position(10.0, &b, &g, Anchor::Right);
        let p20 = value_to_position(20.0, &b, &g, Anchor::Right);
        assert!(p20 < p10);
    }

    #[test]
    fn position_to_value_inverts_both_anchors() {
        let g = geometry();
        let b = Bounds::new_unchecked(-20.0, 80.0);
        for anchor in [Anchor::Left, Anchor::Right] {
            for v in [-20.0, -3.5, 0.0, 12.25, 79.0, 80.0] {
                let p = value_to_position(v, &b, &g, anchor);
                let back = position_to_value(p, &b, &g, anchor);
                assert!((back - v).abs() < EPS, "{anchor:?} {v} -> {p} -> {back}");
            }
        }
    }

    #[test]
    fn delta_value_scales_by_usable_length() {
        let g = geometry();
        let b = bounds();
        assert!((delta_value(30.0, &b, &g, Anchor::Left) - 10.0).abs() < EPS);
        assert!((delta_value(-30.0, &b, &g, Anchor::Left) + 10.0).abs() < EPS);
        assert!((delta_value(30.0, &b, &g, Anchor::Right) + 10.0).abs() < EPS);
    }

    #[test]
    fn delta_matches_position_difference() {
        let g = geometry();
        let b = bounds();
        for anchor in [Anchor::Left, Anchor::Right] {
            let p0 = value_to_position(20.0, &b, &g, anchor);
            let p1 = value_to_position(35.0, &b, &g, anchor);
            let dv = delta_value(p1 - p0, &b, &g, anchor);
            assert!((dv - 15.0).abs() < EPS, "{anchor:?}: {dv}");
        }
    }

    #[test]
    fn degenerate_geometry_does_not_divide_by_zero() {
        let g = Geometry::new(20.0, 20.0, 40.0);
        let b = bounds();
        assert_eq!(value_to_position(70.0, &b, &g, Anchor::Left), 10.0);
        assert_eq!(value_to_position(70.0, &b, &g, Anchor::Right), 10.0);
        assert_eq!(position_to_value(15.0, &b, &g, Anchor::Left), 0.0);
        assert_eq!(delta_value(15.0, &b, &g, Anchor::Left), 0.0);
    }

    #[test]
    fn zero_span_collapses_to_min() {
        let g = geometry();
        let b = Bounds::new_unchecked(5.0, 5.0);
        assert_eq!(value_to_position(5.0, &b, &g, Anchor::Left), 17.5);
        assert_eq!(value_to_position(5.0, &b, &g, Anchor::Right), 317.5);
        assert_eq!(position_to_value(200.0, &b, &g, Anchor::Right), 5.0);
        assert_eq!(delta_value(200.0, &b, &g, Anchor::Right), -0.0);
    }
}
