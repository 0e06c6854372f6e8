// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry sampling: turning a pointer position into a one-dimensional handle offset.
//!
//! Layout reads go through [`GeometryProvider`], so hosts can back it with a real
//! layout engine and tests can back it with literal rectangles
//! (see [`StubGeometry`](crate::stub::StubGeometry)).
//!
//! Bounds are sampled on every move rather than cached at the start of a drag, so a
//! layout shift mid-drag (for example a window resize) is picked up immediately.

use kurbo::{Point, Rect};

use crate::direction::{Direction, Orientation};

/// Read-only access to element layout.
///
/// `K` is whatever the host uses to name elements (a node id, a widget key, ...).
pub trait GeometryProvider<K> {
    /// Bounding box of `element`, or `None` if it has not been laid out yet.
    fn bounds(&self, element: &K) -> Option<Rect>;

    /// Computed inline direction of `element`.
    fn direction(&self, element: &K) -> Direction;
}

/// Extent of the track along the active axis at the moment of sampling.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InteractionBounds {
    /// Coordinate of the track's leading edge.
    pub start: f64,
    /// Coordinate of the track's trailing edge.
    pub end: f64,
    /// Distance the handle can travel: track length minus handle length, never negative.
    pub size: f64,
    /// Length of the handle along the axis.
    pub handle: f64,
}

impl InteractionBounds {
    /// Sample the bounds of `track` for a handle occupying `handle`.
    pub fn sample(track: Rect, handle: Rect, orientation: &Orientation) -> Self {
        let track_length = orientation.length(track).max(0.0);
        let handle = orientation.length(handle).max(0.0);
        Self {
            start: orientation.leading_edge(track),
            end: orientation.trailing_edge(track),
            size: (track_length - handle).max(0.0),
            handle,
        }
    }

    /// Full track length, handle included.
    pub fn track_length(&self) -> f64 {
        self.size + self.handle
    }
}

/// Distance from the handle's leading edge to `point`.
///
/// Measured once when a drag starts and kept for the whole session, so the handle
/// does not jump to sit under the pointer on the first move.
pub fn leading_edge_offset(point: Point, handle: Rect, orientation: &Orientation) -> f64 {
    orientation.distance(orientation.leading_edge(handle), orientation.coordinate(point))
}

/// Raw, unclamped offset of the handle's leading edge from the track's leading edge.
///
/// Values outside `0..=bounds.size` are expected while the pointer is past either end
/// of the track; value mapping clamps them.
pub fn sample_offset(
    bounds: &InteractionBounds,
    point: Point,
    start_diff: f64,
    orientation: &Orientation,
) -> f64 {
    orientation.distance(bounds.start, orientation.coordinate(point)) - start_diff
}
