// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between track offsets, percentages, and domain values.
//!
//! All offsets are measured from the track's leading edge along its axis, in the
//! same units as `extent` (typically logical pixels). `extent` is the distance the
//! handle can travel, i.e. the track length minus the handle length.
//!
//! Resolving which edge is "leading" (left or right, top or bottom) is the caller's
//! job; these functions only ever see a one-dimensional offset.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{DomainConfig, Stop, ValueDomain};

/// Round to two decimal places to keep repeated snapping from drifting.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage (`0..=100`) of `extent` covered by `offset`.
///
/// Offsets outside `0..=extent` are clamped. A non-positive extent yields `0`.
pub fn percentage(offset: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !extent.is_finite() {
        return 0.0;
    }
    100.0 * offset.clamp(0.0, extent) / extent
}

/// Linearly interpolate a percentage into the domain's `min..=max`.
pub fn value_at_percentage(domain: &ValueDomain, percentage: f64) -> f64 {
    percentage / 100.0 * domain.span() + domain.min()
}

/// Snap `raw` to the nearest multiple of `step` above `min`.
///
/// A non-positive or non-finite `step` leaves `raw` untouched.
pub fn snap_to_step(raw: f64, min: f64, step: f64) -> f64 {
    if step <= 0.0 || !step.is_finite() {
        return raw;
    }
    round_to_hundredths(((raw - min) / step).round() * step + min)
}

/// Snap `candidate` to one of `stops`, which must be in non-decreasing order.
///
/// Candidates outside the first/last stop clamp to that stop. Otherwise the first stop
/// at or above the candidate is found; an exact match wins, and anything else is
/// compared against the midpoint between that stop and the one before it. Below the
/// midpoint snaps down, at or above snaps up.
///
/// An empty slice returns `candidate` unchanged.
pub fn snap_to_stops(stops: &[Stop], candidate: f64) -> f64 {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return candidate;
    };
    if candidate <= first.value {
        return first.value;
    }
    let Some(index) = stops.iter().position(|s| s.value >= candidate) else {
        return last.value;
    };
    let upper = stops[index].value;
    if upper == candidate {
        return upper;
    }
    // `candidate > first.value`, so `index` is at least 1.
    let lower = stops[index - 1].value;
    let midpoint = (lower + upper) / 2.0;
    if candidate < midpoint { lower } else { upper }
}

/// Map an offset along the track to a domain value.
///
/// This is the whole drag pipeline: clamp the offset to the track, convert it to a
/// percentage, interpolate into the domain, then snap to the step or the nearest stop.
/// The result is always within `min..=max`, and for snapping stop domains it is always
/// one of the stop values.
pub fn map_offset_to_value(offset: f64, extent: f64, domain: &ValueDomain) -> f64 {
    let raw = value_at_percentage(domain, percentage(offset, extent));
    let value = match domain.config() {
        DomainConfig::Continuous { min, step, .. } => snap_to_step(raw, *min, *step),
        DomainConfig::Stops {
            stops,
            continuous: false,
        } => snap_to_stops(stops, raw),
        DomainConfig::Stops {
            continuous: true, ..
        } => raw,
    };
    domain.clamp(value)
}

/// Percentage (`0..=100`) of the track at which `value` sits.
///
/// Values outside the domain are clamped first. A zero-width domain yields `0`.
pub fn percentage_for_value(domain: &ValueDomain, value: f64) -> f64 {
    let span = domain.span();
    if span <= 0.0 {
        return 0.0;
    }
    100.0 * (domain.clamp(value) - domain.min()) / span
}

/// Offset along a track of length `extent` at which `value` sits.
///
/// This is the inverse of [`map_offset_to_value`] for values that are already snapped.
pub fn offset_for_value(domain: &ValueDomain, value: f64, extent: f64) -> f64 {
    percentage_for_value(domain, value) / 100.0 * extent.max(0.0)
}
