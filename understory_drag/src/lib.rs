// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag --heading-base-level=0

//! Understory Drag: pointer and keyboard driven value interaction.
//!
//! ## Overview
//!
//! Sliders, splitters, and resizable panels all share one interaction: press a handle,
//! drag it along a track, and release. Arrow keys nudge the same value. This crate
//! implements that interaction once, independent of any UI toolkit.
//!
//! Data flows like this:
//!
//! 1) Pointer down on the handle starts a [`DragSession`], which registers document-level
//!    move and release listeners through a [`ListenerHost`] and remembers where on the
//!    handle the pointer landed.
//! 2) Each move re-samples the track through a [`GeometryProvider`], resolves the
//!    [`Orientation`] (axis, LTR/RTL, mirroring), computes the handle offset, and asks
//!    the [`DragTarget`] for a value.
//! 3) The [`ChangeEmitter`] compares that value against the last one it emitted and
//!    produces a [`ValueChange`] only when it differs.
//! 4) Release, touch cancel, or [`DragController::teardown`] end the session, removing
//!    exactly the listeners it added.
//!
//! Keyboard input ([`DragController::on_key`]) skips geometry and steps the value
//! arithmetically, feeding the same emitter.
//!
//! ## Targets
//!
//! - [`understory_range::ValueDomain`] drives sliders: continuous ranges with a step, or
//!   labelled stops.
//! - [`PanelResize`] drives resizable panels: the value is the panel size in pixels.
//!
//! ## Host responsibilities
//!
//! The controller never touches a real document. Hosts:
//!
//! - forward pointer, touch, and key events to the controller,
//! - implement [`GeometryProvider`] over their layout and [`ListenerHost`] over their
//!   event registration,
//! - call `preventDefault` (or equivalent) when an [`Outcome`] asks for it,
//! - dispatch each [`ValueChange`] with [`ValueChange::FLAGS`],
//! - call [`DragController::teardown`] when the widget is removed.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_drag::stub::{RecordingHost, StubGeometry};
//! use understory_drag::{DragConfig, DragController, Key, PointerKind};
//! use understory_range::ValueDomain;
//!
//! let domain = ValueDomain::continuous(0.0, 100.0, 5.0).unwrap();
//! let geometry = StubGeometry::new()
//!     .with_rect(1_u32, Rect::new(0.0, 0.0, 200.0, 10.0)) // track
//!     .with_rect(2_u32, Rect::new(0.0, 0.0, 0.0, 10.0)); // handle
//! let mut document = RecordingHost::new();
//! let mut slider = DragController::new(1, 2, domain, DragConfig::default(), 0.0);
//!
//! assert!(slider.on_pointer_down(&geometry, &mut document, PointerKind::Mouse, Point::new(0.0, 5.0)));
//! let outcome = slider.on_pointer_move(&geometry, PointerKind::Mouse, Point::new(102.0, 5.0));
//! assert_eq!(outcome.change.map(|c| c.value), Some(50.0));
//! slider.on_pointer_up(&mut document, PointerKind::Mouse);
//!
//! let outcome = slider.on_key(&geometry, Key::ArrowRight);
//! assert_eq!(outcome.change.map(|c| c.value), Some(55.0));
//! assert!(outcome.prevent_default);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `understory_range`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for configuration types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
pub mod direction;
mod emit;
pub mod geometry;
mod keys;
pub mod listeners;
mod session;
pub mod stub;
mod target;

pub use controller::{DragConfig, DragController, DragPhase, Outcome};
pub use direction::{Axis, Direction, Orientation};
pub use emit::{ChangeEmitter, DispatchFlags, ValueChange};
pub use geometry::{GeometryProvider, InteractionBounds};
pub use keys::Key;
pub use listeners::{ListenerHost, ListenerId, ListenerKind, ListenerSet};
pub use session::{DragSession, PointerKind};
pub use target::{DragTarget, PanelResize};
