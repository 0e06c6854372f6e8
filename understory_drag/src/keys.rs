// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow-key handling.

use understory_range::StepDirection;

use crate::direction::{Axis, Orientation};

/// Keys the interaction understands. Hosts map their native key events onto this.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Anything else; never handled.
    Other,
}

impl Key {
    /// Step direction for this key, or `None` if the key does not act along the axis.
    ///
    /// The arrow pointing toward larger coordinates (right, or down) increases the value
    /// unless the orientation is reversed. In RTL, right therefore decreases the value,
    /// mirroring the track; on a vertical axis up increases it.
    pub fn step_direction(self, orientation: &Orientation) -> Option<StepDirection> {
        let forward = match (orientation.axis, self) {
            (Axis::Horizontal, Self::ArrowRight) => true,
            (Axis::Horizontal, Self::ArrowLeft) => false,
            (Axis::Vertical | Axis::Block, Self::ArrowDown) => true,
            (Axis::Vertical | Axis::Block, Self::ArrowUp) => false,
            _ => return None,
        };
        let direction = if forward {
            StepDirection::Increase
        } else {
            StepDirection::Decrease
        };
        Some(if orientation.is_reversed() {
            direction.reversed()
        } else {
            direction
        })
    }
}
