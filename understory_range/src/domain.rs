// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated value domains.

use alloc::string::String;
use alloc::vec::Vec;

/// One labelled position in a stepped domain, such as a named tick on a slider.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Domain value of this stop.
    pub value: f64,
    /// Human readable label shown next to the stop.
    pub label: String,
}

impl Stop {
    /// Create a stop at `value` with the given `label`.
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Reasons a domain configuration is rejected.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A bound, step, or stop value was `NaN` or infinite.
    #[error("domain bounds, step and stop values must be finite")]
    NonFinite,
    /// The step of a continuous domain was zero or negative.
    #[error("step must be greater than zero, got {0}")]
    NonPositiveStep(f64),
    /// `min` was greater than `max`.
    #[error("min ({min}) is greater than max ({max})")]
    InvertedRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// A stepped domain had no stops.
    #[error("a stepped domain needs at least one stop")]
    NoStops,
    /// A stop's value was lower than the value of the stop before it.
    #[error("stop {index} is lower than the stop before it")]
    UnorderedStops {
        /// Index of the offending stop.
        index: usize,
    },
}

/// Unvalidated domain configuration, as read from a host or a config file.
///
/// Convert it with [`ValueDomain::try_from`] to get a domain the mapping functions can use.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DomainConfig {
    /// A continuous range snapped to multiples of `step` above `min`.
    Continuous {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// Snap increment; must be positive.
        step: f64,
    },
    /// An ordered set of custom stops.
    Stops {
        /// Stops in non-decreasing value order.
        stops: Vec<Stop>,
        /// When `true`, drag positions are not snapped to stops and any value between
        /// the first and last stop is allowed.
        continuous: bool,
    },
}

/// A validated value domain.
///
/// A domain is immutable for the lifetime of a drag session; hosts replace it
/// between sessions when their configuration changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "DomainConfig", into = "DomainConfig")
)]
pub struct ValueDomain {
    config: DomainConfig,
}

impl ValueDomain {
    /// Create a continuous domain over `min..=max` that snaps to `step`.
    pub fn continuous(min: f64, max: f64, step: f64) -> Result<Self, DomainError> {
        Self::try_from(DomainConfig::Continuous { min, max, step })
    }

    /// Create a domain over custom `stops`.
    ///
    /// `continuous` corresponds to "custom steps are continuous": the track still
    /// spans the first to the last stop but drag positions are not snapped.
    pub fn stops(stops: Vec<Stop>, continuous: bool) -> Result<Self, DomainError> {
        Self::try_from(DomainConfig::Stops { stops, continuous })
    }

    /// The configuration this domain was built from.
    pub fn config(&self) -> &DomainConfig {
        &self.config
    }

    /// Lowest value in the domain.
    pub fn min(&self) -> f64 {
        match &self.config {
            DomainConfig::Continuous { min, .. } => *min,
            // Validation guarantees at least one stop.
            DomainConfig::Stops { stops, .. } => stops.first().map_or(0.0, |s| s.value),
        }
    }

    /// Highest value in the domain.
    pub fn max(&self) -> f64 {
        match &self.config {
            DomainConfig::Continuous { max, .. } => *max,
            DomainConfig::Stops { stops, .. } => stops.last().map_or(0.0, |s| s.value),
        }
    }

    /// Distance between `min` and `max`.
    pub fn span(&self) -> f64 {
        self.max() - self.min()
    }

    /// Snap increment of a continuous domain, `None` for stops.
    pub fn step(&self) -> Option<f64> {
        match &self.config {
            DomainConfig::Continuous { step, .. } => Some(*step),
            DomainConfig::Stops { .. } => None,
        }
    }

    /// Custom stops, empty for a continuous domain.
    pub fn stop_list(&self) -> &[Stop] {
        match &self.config {
            DomainConfig::Continuous { .. } => &[],
            DomainConfig::Stops { stops, .. } => stops,
        }
    }

    /// Returns `true` if drag positions snap to custom stops.
    pub fn snaps_to_stops(&self) -> bool {
        matches!(
            self.config,
            DomainConfig::Stops {
                continuous: false,
                ..
            }
        )
    }

    /// Clamp `value` into `min..=max`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min(), self.max())
    }

    /// Find the stop whose value equals `value` exactly.
    pub fn stop_index(&self, value: f64) -> Option<usize> {
        self.stop_list().iter().position(|s| s.value == value)
    }
}

impl Default for ValueDomain {
    /// A `0..=100` range with a step of `1`.
    fn default() -> Self {
        Self {
            config: DomainConfig::Continuous {
                min: 0.0,
                max: 100.0,
                step: 1.0,
            },
        }
    }
}

impl TryFrom<DomainConfig> for ValueDomain {
    type Error = DomainError;

    fn try_from(config: DomainConfig) -> Result<Self, Self::Error> {
        match &config {
            DomainConfig::Continuous { min, max, step } => {
                if !(min.is_finite() && max.is_finite() && step.is_finite()) {
                    return Err(DomainError::NonFinite);
                }
                if *step <= 0.0 {
                    return Err(DomainError::NonPositiveStep(*step));
                }
                if min > max {
                    return Err(DomainError::InvertedRange {
                        min: *min,
                        max: *max,
                    });
                }
            }
            DomainConfig::Stops { stops, .. } => {
                if stops.is_empty() {
                    return Err(DomainError::NoStops);
                }
                if stops.iter().any(|s| !s.value.is_finite()) {
                    return Err(DomainError::NonFinite);
                }
                if let Some(index) = stops
                    .windows(2)
                    .position(|pair| pair[1].value < pair[0].value)
                {
                    return Err(DomainError::UnorderedStops { index: index + 1 });
                }
            }
        }
        Ok(Self { config })
    }
}

impl From<ValueDomain> for DomainConfig {
    fn from(domain: ValueDomain) -> Self {
        domain.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn continuous_bounds_are_reported() {
        let domain = ValueDomain::continuous(-10.0, 10.0, 0.5).unwrap();
        assert_eq!(domain.min(), -10.0);
        assert_eq!(domain.max(), 10.0);
        assert_eq!(domain.span(), 20.0);
        assert_eq!(domain.step(), Some(0.5));
        assert!(domain.stop_list().is_empty());
        assert!(!domain.snaps_to_stops());
    }

    #[test]
    fn stop_bounds_come_from_first_and_last_stop() {
        let domain = ValueDomain::stops(
            vec![
                Stop::new(2.0, "A"),
                Stop::new(8.0, "B"),
                Stop::new(32.0, "C"),
            ],
            false,
        )
        .unwrap();
        assert_eq!(domain.min(), 2.0);
        assert_eq!(domain.max(), 32.0);
        assert_eq!(domain.step(), None);
        assert!(domain.snaps_to_stops());
        assert_eq!(domain.stop_index(8.0), Some(1));
        assert_eq!(domain.stop_index(9.0), None);
    }

    #[test]
    fn continuous_stops_do_not_snap() {
        let domain =
            ValueDomain::stops(vec![Stop::new(0.0, "Low"), Stop::new(1.0, "High")], true)
                .unwrap();
        assert!(!domain.snaps_to_stops());
    }

    #[test]
    fn non_positive_step_is_rejected() {
        assert_eq!(
            ValueDomain::continuous(0.0, 1.0, 0.0),
            Err(DomainError::NonPositiveStep(0.0))
        );
        assert_eq!(
            ValueDomain::continuous(0.0, 1.0, -2.0),
            Err(DomainError::NonPositiveStep(-2.0))
        );
    }

    #[test]
    fn inverted_and_non_finite_ranges_are_rejected() {
        assert_eq!(
            ValueDomain::continuous(5.0, 1.0, 1.0),
            Err(DomainError::InvertedRange { min: 5.0, max: 1.0 })
        );
        assert_eq!(
            ValueDomain::continuous(f64::NAN, 1.0, 1.0),
            Err(DomainError::NonFinite)
        );
        assert_eq!(
            ValueDomain::continuous(0.0, f64::INFINITY, 1.0),
            Err(DomainError::NonFinite)
        );
    }

    #[test]
    fn empty_and_unordered_stops_are_rejected() {
        assert_eq!(
            ValueDomain::stops(vec![], false),
            Err(DomainError::NoStops)
        );
        assert_eq!(
            ValueDomain::stops(
                vec![
                    Stop::new(0.0, "a"),
                    Stop::new(50.0, "b"),
                    Stop::new(25.0, "c"),
                ],
                false,
            ),
            Err(DomainError::UnorderedStops { index: 2 })
        );
    }

    #[test]
    fn clamp_respects_bounds() {
        let domain = ValueDomain::default();
        assert_eq!(domain.clamp(-1.0), 0.0);
        assert_eq!(domain.clamp(42.0), 42.0);
        assert_eq!(domain.clamp(101.0), 100.0);
    }

    #[test]
    fn config_round_trips_through_conversion() {
        let domain = ValueDomain::continuous(0.0, 10.0, 2.0).unwrap();
        let config = DomainConfig::from(domain.clone());
        assert_eq!(ValueDomain::try_from(config), Ok(domain));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn deserializing_validates_the_config() {
        let zero_step = r#"{"continuous":{"min":0,"max":1,"step":0}}"#;
        let err = serde_json::from_str::<ValueDomain>(zero_step).unwrap_err();
        assert!(err.to_string().contains(&DomainError::NonPositiveStep(0.0).to_string()));

        let no_stops = r#"{"stops":{"stops":[],"continuous":false}}"#;
        let err = serde_json::from_str::<ValueDomain>(no_stops).unwrap_err();
        assert!(err.to_string().contains(&DomainError::NoStops.to_string()));
    }

    #[test]
    fn valid_domains_survive_a_round_trip() {
        let continuous = ValueDomain::continuous(-5.0, 5.0, 0.5).unwrap();
        let stops = ValueDomain::stops(
            vec![Stop::new(0.0, "Low"), Stop::new(100.0, "High")],
            true,
        )
        .unwrap();
        for domain in [continuous, stops] {
            let json = serde_json::to_string(&domain).unwrap();
            assert_eq!(serde_json::from_str::<ValueDomain>(&json).unwrap(), domain);
        }
    }
}
