// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick classification.
//!
//! Every integer on the ruler gets a tick. How prominent it is depends only on
//! the value, so the classifier is a free function that can be tested without
//! drawing anything.

/// Visual prominence of a tick, ordered from least to most prominent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Tier {
    /// Any other integer.
    Minor,
    /// Multiples of 5 that are not multiples of 10.
    Medium,
    /// Non-zero multiples of 10.
    Major,
    /// The origin.
    Zero,
}

/// Classifies a value into its tick tier.
#[must_use]
pub fn classify(value: i64) -> Tier {
    if value == 0 {
        Tier::Zero
    } else if value % 10 == 0 {
        Tier::Major
    } else if value % 5 == 0 {
        Tier::Medium
    } else {
        Tier::Minor
    }
}

impl Tier {
    /// Tick stroke width.
    #[must_use]
    pub fn stroke_width(self) -> f64 {
        match self {
            Self::Zero => 4.0,
            Self::Major => 3.0,
            Self::Medium | Self::Minor => 2.0,
        }
    }

    /// How far the tick reaches down from the ruler's baseline.
    #[must_use]
    pub fn length(self) -> f64 {
        match self {
            Self::Zero => 35.0,
            Self::Major => 25.0,
            Self::Medium => 15.0,
            Self::Minor => 10.0,
        }
    }

    /// Label font size.
    #[must_use]
    pub fn font_size(self) -> f64 {
        match self {
            Self::Zero | Self::Major => 26.0,
            Self::Medium | Self::Minor => 20.0,
        }
    }

    /// Label font weight (CSS numeric scale).
    #[must_use]
    pub fn font_weight(self) -> u16 {
        match self {
            Self::Zero | Self::Major => 700,
            Self::Medium | Self::Minor => 600,
        }
    }

    /// Whether a tick of this tier is labeled under `policy`.
    #[must_use]
    pub fn is_labeled(self, policy: LabelPolicy) -> bool {
        match policy {
            LabelPolicy::MajorAndZero => self >= Self::Major,
            LabelPolicy::All => true,
        }
    }
}

/// Which ticks get a numeric label.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LabelPolicy {
    /// Only the zero tick and multiples of 10.
    #[default]
    MajorAndZero,
    /// Every tick.
    All,
}

/// A positioned, classified tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tick {
    /// The integer this tick marks.
    pub value: i64,
    /// Horizontal coordinate.
    pub x: f64,
    /// Prominence tier.
    pub tier: Tier,
}
