// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications, deduplicated against the last emitted value.
//!
//! Fast drags produce many move events that resolve to the same snapped value.
//! [`ChangeEmitter`] only lets a notification through when the value actually
//! changes, comparing against what it emitted last rather than against the host's
//! current value. That way a host that applies updates late cannot cause a loop.

/// How a host should dispatch a change notification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DispatchFlags {
    /// Propagate to ancestors.
    pub bubbles: bool,
    /// Cross encapsulation boundaries (for example shadow roots).
    pub composed: bool,
    /// Whether listeners may cancel the change.
    pub cancelable: bool,
}

/// A value change proposed by the interaction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValueChange {
    /// The new value.
    pub value: f64,
    /// Mirror of `value` for a paired numeric input field, when enabled.
    pub input_value: Option<f64>,
}

impl ValueChange {
    /// Dispatch flags for change notifications: bubbling, composed, not cancelable.
    pub const FLAGS: DispatchFlags = DispatchFlags {
        bubbles: true,
        composed: true,
        cancelable: false,
    };
}

/// Deduplicating emitter for [`ValueChange`]s.
#[derive(Clone, Debug)]
pub struct ChangeEmitter {
    last: f64,
    pair_input: bool,
}

impl ChangeEmitter {
    /// Create an emitter seeded with the host's current value.
    pub fn new(initial: f64) -> Self {
        Self {
            last: initial,
            pair_input: false,
        }
    }

    /// Also report `input_value` on every change, for hosts with a paired text field.
    #[must_use]
    pub fn with_input_value(mut self, pair_input: bool) -> Self {
        self.pair_input = pair_input;
        self
    }

    /// The last value emitted, or the seed if nothing has been emitted since.
    pub fn last_emitted(&self) -> f64 {
        self.last
    }

    /// Re-seed after the host changed the value on its own.
    pub fn reset(&mut self, value: f64) {
        self.last = value;
    }

    /// Emit `candidate` if it differs from the last emitted value.
    ///
    /// Non-finite candidates are dropped.
    pub fn emit_if_changed(&mut self, candidate: f64) -> Option<ValueChange> {
        if !candidate.is_finite() || candidate == self.last {
            return None;
        }
        log::trace!("value changed: {} -> {candidate}", self.last);
        self.last = candidate;
        Some(ValueChange {
            value: candidate,
            input_value: self.pair_input.then_some(candidate),
        })
    }
}
