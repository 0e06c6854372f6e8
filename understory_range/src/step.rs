// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard stepping without geometry.
//!
//! Stepping never wraps: at either end of the domain the step is a no-op and
//! [`next_value`] returns `None`, so hosts can skip emitting a change.
//!
//! ```rust
//! use understory_range::{StepDirection, ValueDomain, next_value};
//!
//! let domain = ValueDomain::continuous(0.0, 10.0, 4.0).unwrap();
//! assert_eq!(next_value(&domain, 4.0, StepDirection::Increase), Some(8.0));
//! assert_eq!(next_value(&domain, 8.0, StepDirection::Increase), Some(10.0));
//! assert_eq!(next_value(&domain, 10.0, StepDirection::Increase), None);
//! ```

use crate::map::round_to_hundredths;
use crate::{DomainConfig, ValueDomain};

/// Which way a keyboard step moves the value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StepDirection {
    /// Toward `max`.
    Increase,
    /// Toward `min`.
    Decrease,
}

impl StepDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Increase => Self::Decrease,
            Self::Decrease => Self::Increase,
        }
    }
}

/// Compute the value one step away from `current`.
///
/// - Continuous domains move by `step`, clamped to `min..=max`.
/// - Stop domains move to the adjacent stop. When `current` sits between stops (which
///   happens with continuous custom steps), the nearest stop in `direction` is used.
///
/// Returns `None` when the value would not change.
pub fn next_value(domain: &ValueDomain, current: f64, direction: StepDirection) -> Option<f64> {
    let next = match domain.config() {
        DomainConfig::Continuous { step, .. } => {
            let delta = match direction {
                StepDirection::Increase => *step,
                StepDirection::Decrease => -*step,
            };
            domain.clamp(round_to_hundredths(current + delta))
        }
        DomainConfig::Stops { stops, .. } => match direction {
            StepDirection::Increase => stops.iter().find(|s| s.value > current)?.value,
            StepDirection::Decrease => stops.iter().rev().find(|s| s.value < current)?.value,
        },
    };
    (next != current).then_some(next)
}
