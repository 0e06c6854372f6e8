// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory stand-ins for a layout engine and a document.
//!
//! These are useful for unit tests of host widgets and for headless demos:
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_drag::stub::{RecordingHost, StubGeometry};
//! use understory_drag::{DragConfig, DragController, PointerKind};
//! use understory_range::ValueDomain;
//!
//! let geometry = StubGeometry::new()
//!     .with_rect("track", Rect::new(0.0, 0.0, 100.0, 8.0))
//!     .with_rect("thumb", Rect::new(0.0, 0.0, 0.0, 8.0));
//! let mut document = RecordingHost::new();
//! let mut slider = DragController::new(
//!     "track",
//!     "thumb",
//!     ValueDomain::default(),
//!     DragConfig::default(),
//!     0.0,
//! );
//!
//! slider.on_pointer_down(&geometry, &mut document, PointerKind::Mouse, Point::new(0.0, 4.0));
//! slider.on_pointer_move(&geometry, PointerKind::Mouse, Point::new(30.0, 4.0));
//! slider.on_pointer_up(&mut document, PointerKind::Mouse);
//!
//! assert_eq!(slider.value(), 30.0);
//! assert_eq!(document.added(), document.removed());
//! ```

use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::direction::Direction;
use crate::geometry::GeometryProvider;
use crate::listeners::{ListenerHost, ListenerId, ListenerKind};

/// A [`GeometryProvider`] backed by literal rectangles.
///
/// Elements without a rectangle report `None`, as if they had not been laid out.
#[derive(Clone, Debug)]
pub struct StubGeometry<K> {
    rects: HashMap<K, Rect>,
    directions: HashMap<K, Direction>,
}

impl<K: Eq + Hash> StubGeometry<K> {
    /// Create an empty layout where everything is left-to-right.
    pub fn new() -> Self {
        Self {
            rects: HashMap::new(),
            directions: HashMap::new(),
        }
    }

    /// Builder form of [`set_rect`](Self::set_rect).
    #[must_use]
    pub fn with_rect(mut self, element: K, rect: Rect) -> Self {
        self.set_rect(element, rect);
        self
    }

    /// Builder form of [`set_direction`](Self::set_direction).
    #[must_use]
    pub fn with_direction(mut self, element: K, direction: Direction) -> Self {
        self.set_direction(element, direction);
        self
    }

    /// Lay out `element` at `rect`.
    pub fn set_rect(&mut self, element: K, rect: Rect) {
        self.rects.insert(element, rect);
    }

    /// Remove `element` from the layout.
    pub fn remove(&mut self, element: &K) -> Option<Rect> {
        self.rects.remove(element)
    }

    /// Set the computed direction of `element`.
    pub fn set_direction(&mut self, element: K, direction: Direction) {
        self.directions.insert(element, direction);
    }
}

impl<K: Eq + Hash> Default for StubGeometry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> GeometryProvider<K> for StubGeometry<K> {
    fn bounds(&self, element: &K) -> Option<Rect> {
        self.rects.get(element).copied()
    }

    fn direction(&self, element: &K) -> Direction {
        self.directions.get(element).copied().unwrap_or_default()
    }
}

/// A [`ListenerHost`] that records every registration.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    next_id: u64,
    live: HashMap<ListenerId, ListenerKind>,
    added: usize,
    removed: usize,
}

impl RecordingHost {
    /// Create a host with no registrations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total `add_listener` calls.
    pub fn added(&self) -> usize {
        self.added
    }

    /// Total `remove_listener` calls.
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Registrations currently live.
    pub fn active(&self) -> usize {
        self.live.len()
    }

    /// Union of the kinds currently registered.
    pub fn active_kinds(&self) -> ListenerKind {
        self.live
            .values()
            .fold(ListenerKind::empty(), |acc, kind| acc | *kind)
    }
}

impl ListenerHost for RecordingHost {
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.live.insert(id, kind);
        self.added += 1;
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.removed += 1;
        if self.live.remove(&id).is_none() {
            log::warn!("removing unknown listener {id:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_elements_have_no_bounds() {
        let geometry = StubGeometry::new().with_rect(1_u32, Rect::new(0.0, 0.0, 1.0, 1.0));
        assert!(geometry.bounds(&1).is_some());
        assert!(geometry.bounds(&2).is_none());
        assert_eq!(geometry.direction(&1), Direction::Ltr);
    }

    #[test]
    fn removing_an_element_unlays_it() {
        let mut geometry = StubGeometry::new().with_rect(1_u32, Rect::new(0.0, 0.0, 1.0, 1.0));
        assert!(geometry.remove(&1).is_some());
        assert!(geometry.bounds(&1).is_none());
    }

    #[test]
    fn host_counts_calls() {
        let mut host = RecordingHost::new();
        let a = host.add_listener(ListenerKind::MOUSE_MOVE);
        let b = host.add_listener(ListenerKind::MOUSE_UP);
        assert_ne!(a, b);
        assert_eq!(host.active_kinds(), ListenerKind::mouse());
        host.remove_listener(a);
        host.remove_listener(a);
        assert_eq!(host.added(), 2);
        assert_eq!(host.removed(), 2);
        assert_eq!(host.active(), 1);
    }
}
