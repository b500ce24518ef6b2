// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ruler geometry: the value → coordinate mapping and the fixed layout.

use core::fmt;
use core::ops::RangeInclusive;

use crate::input::MAX_MAGNITUDE;
use crate::tick::{Tick, classify};

/// Most integer positions a ruler may have. Each one is a drawn tick.
pub const MAX_POSITIONS: u64 = 10_001;

/// Vertical layout of the canvas. These are fixed design values.
pub mod layout {
    /// Height of the whole canvas.
    pub const CANVAS_HEIGHT: f64 = 280.0;
    /// Y of the ruler's top edge; ticks, guides and points hang off it.
    pub const BASELINE_Y: f64 = 180.0;
    /// Height of the ruler body below the baseline.
    pub const BODY_HEIGHT: f64 = 80.0;
    /// Horizontal inset of the ruler body from the canvas edges.
    pub const BODY_INSET: f64 = 20.0;
    /// Corner radius of the ruler body.
    pub const BODY_RADIUS: f64 = 16.0;
    /// Baseline of the tick labels.
    pub const LABEL_Y: f64 = 245.0;
    /// Y of the horizontal run of a jump path.
    pub const PATH_TOP_Y: f64 = 80.0;
    /// Y where a jump path stops, leaving room for the arrowhead.
    pub const PATH_END_Y: f64 = 155.0;
    /// How far above the path's horizontal run the delta label sits.
    pub const PATH_LABEL_RISE: f64 = 15.0;
}

/// Invalid [`RulerConfig`] parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `domain_min` is greater than `domain_max`.
    EmptyDomain {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },
    /// The domain spans more than [`MAX_POSITIONS`] integers.
    DomainTooLarge {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },
    /// A domain bound lies beyond [`MAX_MAGNITUDE`].
    DomainOutOfRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },
    /// Spacing must be finite and strictly positive.
    Spacing(f64),
    /// Margin must be finite and non-negative.
    Margin(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDomain { min, max } => {
                write!(f, "empty ruler domain: min {min} is greater than max {max}")
            }
            Self::DomainTooLarge { min, max } => write!(
                f,
                "ruler domain [{min}, {max}] has more than {MAX_POSITIONS} positions"
            ),
            Self::DomainOutOfRange { min, max } => write!(
                f,
                "ruler domain [{min}, {max}] reaches past +/-{MAX_MAGNITUDE}"
            ),
            Self::Spacing(s) => write!(f, "ruler spacing must be finite and > 0, got {s}"),
            Self::Margin(m) => write!(f, "ruler margin must be finite and >= 0, got {m}"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Horizontal ruler parameters.
///
/// The default matches the reference layout: domain `[-100, 100]`, 60 units of
/// margin and 80 units between consecutive integers, for a canvas 16120 wide.
/// Smaller configurations are handy in tests.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RulerConfig {
    margin: f64,
    spacing: f64,
    domain_min: i64,
    domain_max: i64,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl RulerConfig {
    /// The reference layout.
    pub const REFERENCE: Self = Self {
        margin: 60.0,
        spacing: 80.0,
        domain_min: -100,
        domain_max: 100,
    };

    /// Creates a validated configuration.
    pub fn new(
        margin: f64,
        spacing: f64,
        domain_min: i64,
        domain_max: i64,
    ) -> Result<Self, ConfigError> {
        if domain_min > domain_max {
            return Err(ConfigError::EmptyDomain {
                min: domain_min,
                max: domain_max,
            });
        }
        if domain_min < -MAX_MAGNITUDE || domain_max > MAX_MAGNITUDE {
            return Err(ConfigError::DomainOutOfRange {
                min: domain_min,
                max: domain_max,
            });
        }
        if domain_max.abs_diff(domain_min) >= MAX_POSITIONS {
            return Err(ConfigError::DomainTooLarge {
                min: domain_min,
                max: domain_max,
            });
        }
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(ConfigError::Spacing(spacing));
        }
        if !margin.is_finite() || margin < 0.0 {
            return Err(ConfigError::Margin(margin));
        }
        Ok(Self {
            margin,
            spacing,
            domain_min,
            domain_max,
        })
    }

    /// Left (and right) margin.
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Distance between consecutive integers.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Smallest value on the ruler.
    #[must_use]
    pub fn domain_min(&self) -> i64 {
        self.domain_min
    }

    /// Largest value on the ruler.
    #[must_use]
    pub fn domain_max(&self) -> i64 {
        self.domain_max
    }

    /// All values on the ruler, in order.
    #[must_use]
    pub fn values(&self) -> RangeInclusive<i64> {
        self.domain_min..=self.domain_max
    }

    /// Number of integer positions on the ruler (201 for the reference layout).
    ///
    /// Never more than [`MAX_POSITIONS`].
    #[must_use]
    pub fn positions(&self) -> u64 {
        self.domain_max
            .abs_diff(self.domain_min)
            .checked_add(1)
            .unwrap_or(u64::MAX)
    }

    /// Whether `value` is drawn on the ruler.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.values().contains(&value)
    }

    /// Maps a value to its horizontal coordinate.
    ///
    /// Strictly linear and never clamped: values off the ruler still get a
    /// coordinate, it just falls outside the canvas.
    #[must_use]
    pub fn to_coordinate(&self, value: i64) -> f64 {
        // Go through f64 before subtracting so extreme values cannot overflow.
        self.margin + (value as f64 - self.domain_min as f64) * self.spacing
    }

    /// Total canvas width: one margin on each side of the outermost ticks.
    #[must_use]
    pub fn canvas_width(&self) -> f64 {
        2.0 * self.margin + (self.positions() - 1) as f64 * self.spacing
    }

    /// Canvas height; fixed by [`layout::CANVAS_HEIGHT`].
    #[must_use]
    pub fn canvas_height(&self) -> f64 {
        layout::CANVAS_HEIGHT
    }

    /// Every tick on the ruler with its coordinate and tier, left to right.
    pub fn ticks(&self) -> impl Iterator<Item = Tick> + '_ {
        self.values().map(|value| Tick {
            value,
            x: self.to_coordinate(value),
            tier: classify(value),
        })
    }
}
