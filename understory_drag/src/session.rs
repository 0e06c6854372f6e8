// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One continuous drag gesture, from initial contact to release or cancel.

use crate::direction::Orientation;
use crate::listeners::{ListenerHost, ListenerKind, ListenerSet};

/// Input device driving a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse or pen reported as mouse events.
    Mouse,
    /// Touch contact.
    Touch,
}

impl PointerKind {
    /// Document-level listeners a session for this pointer needs.
    pub const fn listeners(self) -> ListenerKind {
        match self {
            Self::Mouse => ListenerKind::mouse(),
            Self::Touch => ListenerKind::touch(),
        }
    }
}

/// An active drag session.
///
/// A session owns its listener registrations. It is created by [`DragSession::begin`]
/// and consumed by [`DragSession::end`], so the registrations are released exactly once.
#[derive(Debug)]
pub struct DragSession {
    pointer: PointerKind,
    start_diff: f64,
    orientation: Orientation,
    listeners: ListenerSet,
}

impl DragSession {
    /// Start a session and register the listeners `pointer` needs on `host`.
    ///
    /// `start_diff` is the distance from the handle's leading edge to the contact point.
    pub fn begin<H: ListenerHost + ?Sized>(
        host: &mut H,
        pointer: PointerKind,
        start_diff: f64,
        orientation: Orientation,
    ) -> Self {
        let listeners = ListenerSet::register(host, pointer.listeners());
        log::debug!("drag session started: {pointer:?}, start_diff={start_diff}, {orientation:?}");
        Self {
            pointer,
            start_diff,
            orientation,
            listeners,
        }
    }

    /// End the session and release its listeners.
    pub fn end<H: ListenerHost + ?Sized>(mut self, host: &mut H) {
        self.listeners.release(host);
        log::debug!("drag session ended: {:?}", self.pointer);
    }

    /// Pointer kind that started this session; only it may drive moves.
    pub fn pointer(&self) -> PointerKind {
        self.pointer
    }

    /// Distance from the handle's leading edge to the initial contact point.
    pub fn start_diff(&self) -> f64 {
        self.start_diff
    }

    /// Orientation resolved when the session started.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Listeners currently registered by this session.
    pub fn listeners(&self) -> ListenerKind {
        self.listeners.kinds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::RecordingHost;

    #[test]
    fn begin_registers_pointer_listeners() {
        let mut host = RecordingHost::new();
        let session =
            DragSession::begin(&mut host, PointerKind::Mouse, 4.0, Orientation::default());
        assert_eq!(session.pointer(), PointerKind::Mouse);
        assert_eq!(session.start_diff(), 4.0);
        assert_eq!(session.listeners(), ListenerKind::mouse());
        assert_eq!(host.active_kinds(), ListenerKind::mouse());
        session.end(&mut host);
    }

    #[test]
    fn end_releases_everything() {
        let mut host = RecordingHost::new();
        let session =
            DragSession::begin(&mut host, PointerKind::Touch, 0.0, Orientation::default());
        session.end(&mut host);
        assert_eq!(host.added(), 3);
        assert_eq!(host.removed(), 3);
        assert_eq!(host.active(), 0);
    }
}
