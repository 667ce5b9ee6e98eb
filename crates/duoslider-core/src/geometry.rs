#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are in host view units (points or pixels), origin at the
//! top-left of the slider view, `x` growing to the right.

/// A 2D position in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle for layout frames and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal center.
    #[inline]
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Check if the rectangle has no area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    ///
    /// Left and top edges are inclusive, right and bottom exclusive, so two
    /// rectangles sharing an edge never both claim a point on it.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Shrink the rectangle by `dx` on the left and right and `dy` on the top
    /// and bottom. Width and height never go negative.
    #[must_use]
    pub fn inset(&self, dx: f64, dy: f64) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            width: (self.width - 2.0 * dx).max(0.0),
            height: (self.height - 2.0 * dy).max(0.0),
        }
    }
}

/// Track geometry for one layout pass.
///
/// Recomputed by the host whenever the view is laid out (e.g. on resize) and
/// passed into the engine; the engine never caches a stale copy across
/// layout passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Full length of the track along the drag axis.
    pub track_length: f64,
    /// Width of one thumb along the drag axis.
    pub thumb_width: f64,
    /// Height of the view; thumbs span the full height.
    pub height: f64,
}

impl Geometry {
    /// Create geometry from explicit measurements.
    #[must_use]
    pub const fn new(track_length: f64, thumb_width: f64, height: f64) -> Self {
        Self {
            track_length,
            thumb_width,
            height,
        }
    }

    /// Derive geometry from the view bounds: thumbs are half as wide as the
    /// view is tall and span its full height.
    #[must_use]
    pub fn from_view_bounds(bounds: Rect) -> Self {
        Self {
            track_length: bounds.width,
            thumb_width: bounds.height / 2.0,
            height: bounds.height,
        }
    }

    /// Length available to thumb centers: `track_length - thumb_width`.
    ///
    /// May be zero or negative for views narrower than one thumb.
    #[inline]
    #[must_use]
    pub fn usable_length(&self) -> f64 {
        self.track_length - self.thumb_width
    }

    /// Half of the thumb width.
    #[inline]
    #[must_use]
    pub fn half_thumb(&self) -> f64 {
        self.thumb_width / 2.0
    }

    /// The full view rectangle described by this geometry.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        Rect::from_size(self.track_length, self.height)
    }
}
