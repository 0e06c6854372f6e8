// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout direction and axis resolution.
//!
//! Every offset and step-sign computation in this crate goes through an
//! [`Orientation`], so the same drag or key handling works left-to-right,
//! right-to-left, and along either vertical flow.
//!
//! Direction is resolved per interaction through
//! [`GeometryProvider::direction`](crate::GeometryProvider::direction), not cached,
//! because hosts may switch language (and thus direction) at any time.

use kurbo::{Point, Rect};

/// Inline layout direction of the track.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Axis along which the handle travels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Along x. The leading edge is the left edge in [`Direction::Ltr`] and the right
    /// edge in [`Direction::Rtl`].
    #[default]
    Horizontal,
    /// Along y, growing upward: the leading edge is the bottom edge.
    ///
    /// This is how vertical sliders and bottom-docked panels behave. Direction is ignored.
    Vertical,
    /// Along y in block-flow order: the leading edge is the top edge.
    ///
    /// Direction is ignored.
    Block,
}

/// A fully resolved axis, direction, and mirroring for one interaction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Axis of travel.
    pub axis: Axis,
    /// Inline direction read from the track.
    pub direction: Direction,
    /// Flip the leading edge, for example for a panel docked at the end of its container.
    pub mirrored: bool,
}

impl Orientation {
    /// Create an orientation.
    pub const fn new(axis: Axis, direction: Direction, mirrored: bool) -> Self {
        Self {
            axis,
            direction,
            mirrored,
        }
    }

    /// Returns `true` if the leading edge is the edge with the larger coordinate.
    pub const fn is_reversed(&self) -> bool {
        let base = match self.axis {
            Axis::Horizontal => matches!(self.direction, Direction::Rtl),
            Axis::Vertical => true,
            Axis::Block => false,
        };
        base != self.mirrored
    }

    /// Coordinate of `point` along the axis.
    pub const fn coordinate(&self, point: Point) -> f64 {
        match self.axis {
            Axis::Horizontal => point.x,
            Axis::Vertical | Axis::Block => point.y,
        }
    }

    /// `(low, high)` coordinates of `rect` along the axis.
    pub fn span(&self, rect: Rect) -> (f64, f64) {
        let rect = rect.abs();
        match self.axis {
            Axis::Horizontal => (rect.x0, rect.x1),
            Axis::Vertical | Axis::Block => (rect.y0, rect.y1),
        }
    }

    /// Length of `rect` along the axis.
    pub fn length(&self, rect: Rect) -> f64 {
        let (low, high) = self.span(rect);
        high - low
    }

    /// Coordinate of the leading edge of `rect`.
    pub fn leading_edge(&self, rect: Rect) -> f64 {
        let (low, high) = self.span(rect);
        if self.is_reversed() { high } else { low }
    }

    /// Coordinate of the trailing edge of `rect`.
    pub fn trailing_edge(&self, rect: Rect) -> f64 {
        let (low, high) = self.span(rect);
        if self.is_reversed() { low } else { high }
    }

    /// Signed distance travelled from coordinate `from` to coordinate `to`.
    ///
    /// Positive values move away from the leading edge.
    pub const fn distance(&self, from: f64, to: f64) -> f64 {
        if self.is_reversed() { from - to } else { to - from }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: Rect = Rect::new(10.0, 20.0, 210.0, 60.0);

    #[test]
    fn horizontal_ltr_leads_from_left() {
        let o = Orientation::new(Axis::Horizontal, Direction::Ltr, false);
        assert!(!o.is_reversed());
        assert_eq!(o.leading_edge(TRACK), 10.0);
        assert_eq!(o.trailing_edge(TRACK), 210.0);
        assert_eq!(o.distance(10.0, 60.0), 50.0);
    }

    #[test]
    fn horizontal_rtl_leads_from_right() {
        let o = Orientation::new(Axis::Horizontal, Direction::Rtl, false);
        assert!(o.is_reversed());
        assert_eq!(o.leading_edge(TRACK), 210.0);
        assert_eq!(o.distance(210.0, 160.0), 50.0);
    }

    #[test]
    fn mirroring_flips_leading_edge() {
        let o = Orientation::new(Axis::Horizontal, Direction::Ltr, true);
        assert_eq!(o.leading_edge(TRACK), 210.0);
        let o = Orientation::new(Axis::Horizontal, Direction::Rtl, true);
        assert_eq!(o.leading_edge(TRACK), 10.0);
    }

    #[test]
    fn vertical_axes_ignore_direction() {
        for direction in [Direction::Ltr, Direction::Rtl] {
            let up = Orientation::new(Axis::Vertical, direction, false);
            assert_eq!(up.leading_edge(TRACK), 60.0);
            assert_eq!(up.coordinate(Point::new(1.0, 2.0)), 2.0);

            let down = Orientation::new(Axis::Block, direction, false);
            assert_eq!(down.leading_edge(TRACK), 20.0);
            assert_eq!(down.length(TRACK), 40.0);
        }
    }

    #[test]
    fn span_normalizes_inverted_rects() {
        let o = Orientation::default();
        assert_eq!(o.span(Rect::new(50.0, 0.0, 10.0, 5.0)), (10.0, 50.0));
    }
}
