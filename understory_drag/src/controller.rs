// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag state machine.
//!
//! ```text
//!          pointer down (enabled, not dragging)
//!   Idle ─────────────────────────────────────────▶ Dragging ──┐ move: sample, map, emit
//!    ▲                                                  │  ◀────┘
//!    └──────── pointer up / touch cancel / teardown ────┘
//! ```
//!
//! Keyboard input is a parallel entry point: it bypasses geometry and feeds the same
//! emitter.

use kurbo::Point;

use crate::direction::{Axis, Orientation};
use crate::emit::{ChangeEmitter, ValueChange};
use crate::geometry::{GeometryProvider, InteractionBounds, leading_edge_offset, sample_offset};
use crate::keys::Key;
use crate::listeners::ListenerHost;
use crate::session::{DragSession, PointerKind};
use crate::target::DragTarget;

/// Host configuration for a [`DragController`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragConfig {
    /// Axis the handle travels along.
    pub axis: Axis,
    /// Measure from the far edge of the track, for example for end-docked panels.
    pub mirrored: bool,
    /// Refuse new drags and key input.
    pub disabled: bool,
    /// Report an `input_value` with every change for a paired numeric field.
    pub pair_input_value: bool,
}

/// Lifecycle phase of a [`DragController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No drag in progress.
    Idle,
    /// A session is active.
    Dragging,
}

/// Result of feeding one input event to a [`DragController`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Outcome {
    /// Change to dispatch, if the value changed.
    pub change: Option<ValueChange>,
    /// The host should suppress the event's default action (page scroll).
    pub prevent_default: bool,
}

/// Drag and keyboard interaction for one handle on one track.
///
/// `K` names elements for the [`GeometryProvider`]; `T` decides what the position means.
/// The controller proposes values but does not own them: hosts apply each
/// [`ValueChange`] and call [`set_value`](Self::set_value) when they change the value
/// themselves.
#[derive(Debug)]
pub struct DragController<K, T> {
    track: K,
    handle: K,
    target: T,
    config: DragConfig,
    value: f64,
    emitter: ChangeEmitter,
    session: Option<DragSession>,
}

impl<K, T: DragTarget> DragController<K, T> {
    /// Create a controller in the [`DragPhase::Idle`] phase showing `value`.
    pub fn new(track: K, handle: K, target: T, config: DragConfig, value: f64) -> Self {
        let value = target.clamp(value);
        let emitter = ChangeEmitter::new(value).with_input_value(config.pair_input_value);
        Self {
            track,
            handle,
            target,
            config,
            value,
            emitter,
            session: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    /// Returns `true` while a session is active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Displayed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value from the host side. Does not emit.
    pub fn set_value(&mut self, value: f64) {
        self.value = self.target.clamp(value);
        self.emitter.reset(self.value);
    }

    /// What the drag controls.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Replace the target.
    ///
    /// Targets are fixed for the lifetime of a session, so this returns `false` and does
    /// nothing while dragging.
    pub fn set_target(&mut self, target: T) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.target = target;
        self.set_value(self.value);
        true
    }

    /// Current configuration.
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Enable or disable the controller.
    ///
    /// Disabling does not cancel an active session; it only refuses new sessions and
    /// key input.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    fn orientation<G: GeometryProvider<K> + ?Sized>(&self, geometry: &G) -> Orientation {
        Orientation::new(
            self.config.axis,
            geometry.direction(&self.track),
            self.config.mirrored,
        )
    }

    /// Handle a press on the handle.
    ///
    /// Returns `true` if a session started. Nothing happens when disabled, when a session
    /// is already active, or when the handle has not been laid out.
    pub fn on_pointer_down<G, H>(
        &mut self,
        geometry: &G,
        host: &mut H,
        pointer: PointerKind,
        point: Point,
    ) -> bool
    where
        G: GeometryProvider<K> + ?Sized,
        H: ListenerHost + ?Sized,
    {
        if self.config.disabled || self.session.is_some() {
            return false;
        }
        let Some(handle) = geometry.bounds(&self.handle) else {
            return false;
        };
        let orientation = self.orientation(geometry);
        let start_diff = leading_edge_offset(point, handle, &orientation);
        self.session = Some(DragSession::begin(host, pointer, start_diff, orientation));
        true
    }

    /// Handle a document-level move.
    ///
    /// Only the pointer kind that started the session drives it. Touch moves always ask
    /// the host to prevent scrolling.
    pub fn on_pointer_move<G>(&mut self, geometry: &G, pointer: PointerKind, point: Point) -> Outcome
    where
        G: GeometryProvider<K> + ?Sized,
    {
        let Some(start_diff) = self
            .session
            .as_ref()
            .filter(|s| s.pointer() == pointer)
            .map(DragSession::start_diff)
        else {
            return Outcome::default();
        };
        Outcome {
            change: self.drag_to(geometry, start_diff, point),
            prevent_default: pointer == PointerKind::Touch,
        }
    }

    fn drag_to<G>(&mut self, geometry: &G, start_diff: f64, point: Point) -> Option<ValueChange>
    where
        G: GeometryProvider<K> + ?Sized,
    {
        let track = geometry.bounds(&self.track)?;
        let handle = geometry.bounds(&self.handle)?;
        let orientation = self.orientation(geometry);
        let bounds = InteractionBounds::sample(track, handle, &orientation);
        let offset = sample_offset(&bounds, point, start_diff, &orientation);
        if !offset.is_finite() {
            return None;
        }
        let value = self
            .target
            .value_at(offset, &bounds)
            .filter(|v| v.is_finite())?;
        self.value = value;
        self.emitter.emit_if_changed(value)
    }

    /// Handle a document-level release; ends the session if `pointer` owns it.
    ///
    /// The last move's change stands as the final value; nothing is emitted here.
    pub fn on_pointer_up<H: ListenerHost + ?Sized>(
        &mut self,
        host: &mut H,
        pointer: PointerKind,
    ) -> bool {
        if self.session.as_ref().map(DragSession::pointer) != Some(pointer) {
            return false;
        }
        self.end_session(host);
        true
    }

    /// Handle a platform touch cancel, which ends a touch session like a release.
    pub fn on_touch_cancel<H: ListenerHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.on_pointer_up(host, PointerKind::Touch)
    }

    /// Handle a key press while the handle has focus.
    ///
    /// Arrow keys along the axis are always reported as handled, even when the value
    /// is already at a boundary and nothing is emitted.
    pub fn on_key<G>(&mut self, geometry: &G, key: Key) -> Outcome
    where
        G: GeometryProvider<K> + ?Sized,
    {
        if self.config.disabled {
            return Outcome::default();
        }
        let Some(direction) = key.step_direction(&self.orientation(geometry)) else {
            return Outcome::default();
        };
        let next = self
            .target
            .step(self.value, direction)
            .filter(|v| v.is_finite());
        let change = next.and_then(|next| {
            self.value = next;
            self.emitter.emit_if_changed(next)
        });
        Outcome {
            change,
            prevent_default: true,
        }
    }

    /// Release everything, whatever the phase. Call when the host element goes away.
    pub fn teardown<H: ListenerHost + ?Sized>(&mut self, host: &mut H) {
        self.end_session(host);
    }

    fn end_session<H: ListenerHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(session) = self.session.take() {
            session.end(host);
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::target::PanelResize;

    #[test]
    fn partial_configs_fill_in_defaults() {
        let json = r#"{"axis":"Vertical","mirrored":true}"#;
        let config: DragConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config,
            DragConfig {
                axis: Axis::Vertical,
                mirrored: true,
                ..DragConfig::default()
            }
        );

        let panel: PanelResize = serde_json::from_str(r#"{"min_size":120.0}"#).unwrap();
        assert_eq!(panel.min_size, 120.0);
        assert_eq!(panel.max_size, None);
        assert_eq!(panel.increment, PanelResize::default().increment);
    }
}
