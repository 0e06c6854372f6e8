// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What a drag controls.
//!
//! [`DragTarget`] is the seam that lets one [`DragController`](crate::DragController)
//! drive different widgets: a slider maps offsets into a [`ValueDomain`], a resizable
//! panel maps them into a pixel size ([`PanelResize`]).

use understory_range::{StepDirection, ValueDomain, map, next_value};

use crate::geometry::InteractionBounds;

/// Maps handle offsets and key steps to values.
pub trait DragTarget {
    /// Value for a raw handle offset within `bounds`.
    ///
    /// Returns `None` when no value can be computed, for example when the track has
    /// not been laid out and has no room for the handle.
    fn value_at(&self, offset: f64, bounds: &InteractionBounds) -> Option<f64>;

    /// Value one keyboard step away from `current`, or `None` at a boundary.
    fn step(&self, current: f64, direction: StepDirection) -> Option<f64>;

    /// Clamp an externally supplied value into the valid range.
    fn clamp(&self, value: f64) -> f64;
}

impl DragTarget for ValueDomain {
    fn value_at(&self, offset: f64, bounds: &InteractionBounds) -> Option<f64> {
        (bounds.size > 0.0).then(|| map::map_offset_to_value(offset, bounds.size, self))
    }

    fn step(&self, current: f64, direction: StepDirection) -> Option<f64> {
        next_value(self, current, direction)
    }

    fn clamp(&self, value: f64) -> f64 {
        Self::clamp(self, value)
    }
}

/// Resize constraints for a draggable panel splitter.
///
/// The value is the panel's size along the drag axis. The track is the panel's
/// container, measured from the edge the panel is docked to; use
/// [`DragConfig::mirrored`](crate::DragConfig::mirrored) for panels docked at the end.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelResize {
    /// Smallest allowed size.
    pub min_size: f64,
    /// Largest allowed size; the container length always applies as well while dragging.
    pub max_size: Option<f64>,
    /// Keyboard resize step.
    pub increment: f64,
}

impl Default for PanelResize {
    fn default() -> Self {
        Self {
            min_size: 0.0,
            max_size: None,
            increment: 5.0,
        }
    }
}

impl DragTarget for PanelResize {
    fn value_at(&self, offset: f64, bounds: &InteractionBounds) -> Option<f64> {
        let container = bounds.track_length();
        if container <= 0.0 {
            return None;
        }
        // The handle sits on the panel's inner edge, so the panel spans the handle too.
        let size = self.clamp(offset + bounds.handle);
        Some(size.min(container).max(self.min_size.min(container)))
    }

    fn step(&self, current: f64, direction: StepDirection) -> Option<f64> {
        let delta = match direction {
            StepDirection::Increase => self.increment,
            StepDirection::Decrease => -self.increment,
        };
        let next = self.clamp(current + delta);
        (next != current).then_some(next)
    }

    fn clamp(&self, value: f64) -> f64 {
        let value = value.max(self.min_size);
        match self.max_size {
            Some(max) => value.min(max.max(self.min_size)),
            None => value,
        }
    }
}
