// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Everything derived from one pair of raw inputs.

use alloc::format;
use alloc::string::{String, ToString};

use crate::center::{ViewportTarget, scroll_target};
use crate::explain::{Narrative, explain};
use crate::input::{Addition, Inputs, RawInput};
use crate::path::{PathPlan, plan_path};
use crate::ruler::RulerConfig;

/// Glyph shown in place of the result while the inputs are incomplete.
pub const RESULT_PLACEHOLDER: &str = "?";

/// Dashed guide lines marking the start and end positions.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Guides {
    /// Coordinate of the start guide.
    pub start_x: f64,
    /// Coordinate of the end guide.
    pub end_x: f64,
}

/// The full derived state for one render.
///
/// Deriving twice from the same raw input gives equal transcripts; nothing in
/// here depends on anything but the inputs and the ruler configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Transcript {
    /// Parsed values.
    pub inputs: Inputs,
    /// The complete addition, when valid.
    pub addition: Option<Addition>,
    /// The jump, when valid and the movement is non-zero.
    pub path: Option<PathPlan>,
    /// Start/end guides, whenever valid (including a zero movement).
    pub guides: Option<Guides>,
    /// Whether part of the addition falls off the visible ruler.
    pub out_of_range: bool,
    /// The three-step explanation, when valid.
    pub narrative: Option<Narrative>,
    /// Where the viewport should be centered.
    pub target: ViewportTarget,
}

impl Transcript {
    /// Derives everything from the two raw fields.
    #[must_use]
    pub fn derive(config: &RulerConfig, raw: &RawInput) -> Self {
        Self::from_inputs(config, &raw.inputs())
    }

    /// Derives everything from already parsed values.
    #[must_use]
    pub fn from_inputs(config: &RulerConfig, inputs: &Inputs) -> Self {
        let addition = inputs.addition();
        Self {
            inputs: *inputs,
            addition,
            path: plan_path(config, inputs),
            guides: addition.map(|a| Guides {
                start_x: config.to_coordinate(a.start),
                end_x: config.to_coordinate(a.sum),
            }),
            out_of_range: is_out_of_range(config, inputs),
            narrative: explain(inputs),
            target: scroll_target(config, inputs),
        }
    }

    /// Whether the inputs form a complete addition.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.addition.is_some()
    }

    /// The result as shown to the user: the sum, or the placeholder glyph.
    #[must_use]
    pub fn result_text(&self) -> String {
        match self.addition {
            Some(a) => a.sum.to_string(),
            None => RESULT_PLACEHOLDER.into(),
        }
    }

    /// The out-of-range warning, when it applies.
    #[must_use]
    pub fn warning(&self, config: &RulerConfig) -> Option<String> {
        self.out_of_range.then(|| warning_text(config))
    }
}

/// `true` iff the inputs are valid and the start or the sum lies outside the
/// ruler's domain.
///
/// Start and sum are not reported separately: a single combined flag drives
/// the one warning banner.
#[must_use]
pub fn is_out_of_range(config: &RulerConfig, inputs: &Inputs) -> bool {
    inputs
        .addition()
        .is_some_and(|a| !config.contains(a.start) || !config.contains(a.sum))
}

/// The out-of-range warning text for a ruler.
#[must_use]
pub fn warning_text(config: &RulerConfig) -> String {
    format!(
        "Algunos números están fuera de la recta visible ({} a {}), pero el cálculo es correcto.",
        config.domain_min(),
        config.domain_max()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(start: &str, delta: &str) -> Transcript {
        let raw = RawInput::from_texts(start, delta).unwrap();
        Transcript::derive(&RulerConfig::default(), &raw)
    }

    #[test]
    fn warning_for_both_ends_off_ruler() {
        let t = derive("150", "-10");
        assert_eq!(t.addition.map(|a| a.sum), Some(140));
        assert!(t.out_of_range);
        let text = t.warning(&RulerConfig::default()).unwrap();
        assert!(text.contains("-100 a 100"));
        assert!(text.contains("el cálculo es correcto"));
    }

    #[test]
    fn no_warning_inside_ruler() {
        let t = derive("50", "10");
        assert!(!t.out_of_range);
        assert_eq!(t.warning(&RulerConfig::default()), None);
    }

    #[test]
    fn warning_for_either_end() {
        assert!(derive("95", "10").out_of_range);
        assert!(derive("-120", "30").out_of_range);
        assert!(derive("-101", "0").out_of_range);
        assert!(!derive("-100", "200").out_of_range);
    }

    #[test]
    fn no_warning_when_incomplete() {
        assert!(!derive("500", "").out_of_range);
    }

    #[test]
    fn zero_delta_keeps_guides_but_no_path() {
        let t = derive("12", "0");
        assert!(t.path.is_none());
        let guides = t.guides.unwrap();
        assert_eq!(guides.start_x, guides.end_x);
        assert!(t.narrative.is_some());
    }

    #[test]
    fn incomplete_shows_placeholder() {
        let t = derive("", "4");
        assert!(!t.is_valid());
        assert_eq!(t.result_text(), "?");
        assert!(t.path.is_none());
        assert!(t.guides.is_none());
        assert!(t.narrative.is_none());
    }
}
