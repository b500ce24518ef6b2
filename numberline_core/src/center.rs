// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport centering policy.
//!
//! Decides which coordinate the viewport should be centered on for the
//! current inputs. Applying the target (and animating toward it) is the
//! display surface's job; see `numberline_scroll`.

use crate::input::Inputs;
use crate::ruler::RulerConfig;

/// Which centering rule produced a [`ViewportTarget`], in priority order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CenterRule {
    /// Both values present: halfway between start and end.
    Jump,
    /// Only the start is present: on the start.
    Start,
    /// Nothing usable: on zero.
    Origin,
}

/// The coordinate the viewport should be centered on.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ViewportTarget {
    /// Rule that picked this target.
    pub rule: CenterRule,
    /// Coordinate to bring to the middle of the visible area.
    pub x: f64,
}

impl ViewportTarget {
    /// Scroll offset that puts [`x`](Self::x) in the middle of a viewport
    /// `visible_width` wide.
    #[must_use]
    pub fn offset_for(&self, visible_width: f64) -> f64 {
        scroll_offset(self.x, visible_width)
    }
}

/// Computes the centering target for `inputs`.
///
/// A delta without a start falls through to centering on zero. A pair whose
/// sum is not representable is incomplete, so it centers on the start.
#[must_use]
pub fn scroll_target(config: &RulerConfig, inputs: &Inputs) -> ViewportTarget {
    if let Some(addition) = inputs.addition() {
        let x = (config.to_coordinate(addition.start) + config.to_coordinate(addition.sum)) / 2.0;
        return ViewportTarget {
            rule: CenterRule::Jump,
            x,
        };
    }
    match inputs.start {
        Some(start) => ViewportTarget {
            rule: CenterRule::Start,
            x: config.to_coordinate(start),
        },
        None => ViewportTarget {
            rule: CenterRule::Origin,
            x: config.to_coordinate(0),
        },
    }
}

/// Left scroll offset that centers `target` in a viewport `visible_width` wide.
#[must_use]
pub fn scroll_offset(target: f64, visible_width: f64) -> f64 {
    target - visible_width / 2.0
}
