// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_range --heading-base-level=0

//! Understory Range: value domains for sliders and other range controls.
//!
//! This crate is the numeric half of a drag interaction. It knows how to turn a
//! position along a track into a value, and how to step a value from the keyboard,
//! but it knows nothing about pointers, events, or layout.
//!
//! The core concepts are:
//!
//! - [`ValueDomain`]: either a continuous `min..=max` range with a fixed `step`, or an
//!   ordered list of labelled [`Stop`]s.
//! - [`map`]: conversions between a pixel offset, a percentage of the track, and a
//!   snapped domain value.
//! - [`step`]: arithmetic for arrow-key increments that never wraps around.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_range::{ValueDomain, map};
//!
//! // A 0..=100 slider that snaps to multiples of 5, on a 200px track.
//! let domain = ValueDomain::continuous(0.0, 100.0, 5.0).unwrap();
//!
//! // 102px is 51% of the track, which snaps down to 50.
//! assert_eq!(map::map_offset_to_value(102.0, 200.0, &domain), 50.0);
//!
//! // Offsets outside the track clamp to the ends of the domain.
//! assert_eq!(map::map_offset_to_value(-40.0, 200.0, &domain), 0.0);
//! assert_eq!(map::map_offset_to_value(900.0, 200.0, &domain), 100.0);
//! ```
//!
//! ## Discrete stops
//!
//! With stops, the track is spread proportionally between the first and last stop's
//! values, and drag positions snap to the nearest stop:
//!
//! ```rust
//! use understory_range::{Stop, ValueDomain, map};
//!
//! let domain = ValueDomain::stops(
//!     vec![Stop::new(0.0, "Low"), Stop::new(100.0, "High")],
//!     false,
//! )
//! .unwrap();
//!
//! // 40% of the track is below the midpoint between the two stops.
//! assert_eq!(map::map_offset_to_value(40.0, 100.0, &domain), 0.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for rounding.
//! - `serde`: derives `Serialize`/`Deserialize` for [`ValueDomain`] and [`Stop`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod domain;
pub mod map;
pub mod step;

pub use domain::{DomainConfig, DomainError, Stop, ValueDomain};
pub use step::{StepDirection, next_value};
