// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-level listener registration owned by a drag session.
//!
//! While a drag is active the host must deliver move and release events even when
//! the pointer leaves the handle, which usually means listening on the whole
//! document or window. [`ListenerSet`] records every registration it makes so that
//! each one is removed exactly once when the session ends.

use smallvec::SmallVec;

bitflags::bitflags! {
    /// Kinds of document-level listeners a session can hold.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ListenerKind: u8 {
        /// Mouse movement anywhere in the document.
        const MOUSE_MOVE = 1 << 0;
        /// Mouse button release anywhere in the document.
        const MOUSE_UP = 1 << 1;
        /// Touch movement anywhere in the document.
        const TOUCH_MOVE = 1 << 2;
        /// Touch release anywhere in the document.
        const TOUCH_END = 1 << 3;
        /// Touch sequence interrupted by the platform.
        const TOUCH_CANCEL = 1 << 4;
    }
}

impl ListenerKind {
    /// Listeners needed for a mouse-driven session.
    pub const fn mouse() -> Self {
        Self::MOUSE_MOVE.union(Self::MOUSE_UP)
    }

    /// Listeners needed for a touch-driven session.
    pub const fn touch() -> Self {
        Self::TOUCH_MOVE
            .union(Self::TOUCH_END)
            .union(Self::TOUCH_CANCEL)
    }
}

/// Opaque handle for one registration, issued by a [`ListenerHost`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// The surface sessions register their listeners on, typically the document.
pub trait ListenerHost {
    /// Register a listener for a single `kind` and return its handle.
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId;

    /// Remove a listener previously returned by [`add_listener`](Self::add_listener).
    fn remove_listener(&mut self, id: ListenerId);
}

/// Registrations held by one session.
#[derive(Debug, Default)]
pub struct ListenerSet {
    registrations: SmallVec<[(ListenerKind, ListenerId); 3]>,
}

impl ListenerSet {
    /// Register one listener per flag in `kinds`.
    pub fn register<H: ListenerHost + ?Sized>(host: &mut H, kinds: ListenerKind) -> Self {
        let registrations = kinds
            .iter()
            .map(|kind| (kind, host.add_listener(kind)))
            .collect();
        Self { registrations }
    }

    /// Union of the kinds currently registered.
    pub fn kinds(&self) -> ListenerKind {
        self.registrations
            .iter()
            .fold(ListenerKind::empty(), |acc, (kind, _)| acc | *kind)
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Remove every registration from `host`.
    ///
    /// Calling this again is a no-op.
    pub fn release<H: ListenerHost + ?Sized>(&mut self, host: &mut H) {
        for (_, id) in self.registrations.drain(..) {
            host.remove_listener(id);
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        if !self.registrations.is_empty() {
            log::warn!(
                "dropping {} document listener(s) without releasing them ({:?})",
                self.registrations.len(),
                self.kinds()
            );
        }
    }
}
