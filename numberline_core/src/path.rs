// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jump path planning.
//!
//! A jump is drawn as an orthogonal connector: up from the start point, a
//! rounded corner toward the direction of travel, a horizontal run above the
//! ruler, a rounded corner down, and a short drop onto the end point. The
//! shape reads left or right unambiguously whatever the distance, and stays
//! legible for a jump of a single unit.

use alloc::format;
use alloc::string::String;

use kurbo::{BezPath, Point};

use crate::input::Inputs;
use crate::ruler::{RulerConfig, layout};

/// Radius of the two rounded corners of a jump path.
pub const CORNER_RADIUS: f64 = 20.0;

/// Which way the jump travels on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Direction {
    /// Toward smaller values.
    Left,
    /// Toward larger values.
    Right,
}

impl Direction {
    /// `-1` for left, `+1` for right.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    fn factor(self) -> f64 {
        f64::from(self.sign())
    }
}

/// The two visual styles of a jump. Exactly one applies to any path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum JumpStyle {
    /// `delta >= 0`: blue path with a forward arrowhead.
    Positive,
    /// `delta < 0`: red path.
    Negative,
}

impl JumpStyle {
    /// Style for a movement.
    #[must_use]
    pub fn for_delta(delta: i64) -> Self {
        if delta >= 0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Color name used when the explanation points at the path.
    #[must_use]
    pub fn color_name(self) -> &'static str {
        match self {
            Self::Positive => "azul",
            Self::Negative => "roja",
        }
    }
}

/// Geometry and styling of a jump from start to end.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathPlan {
    /// Coordinate of the starting value.
    pub start_x: f64,
    /// Coordinate of the landing value.
    pub end_x: f64,
    /// Which way the path runs.
    pub direction: Direction,
    /// Path style, picked from the sign of `delta`.
    pub style: JumpStyle,
    /// The movement being drawn; never zero.
    pub delta: i64,
}

/// Plans the jump for `inputs`.
///
/// Returns `None` when the inputs are incomplete or `delta` is zero. End
/// points off the ruler are not special-cased.
#[must_use]
pub fn plan_path(config: &RulerConfig, inputs: &Inputs) -> Option<PathPlan> {
    let addition = inputs.addition()?;
    if addition.delta == 0 {
        return None;
    }
    let start_x = config.to_coordinate(addition.start);
    let end_x = config.to_coordinate(addition.sum);
    // Follow the sign, not the coordinates, so the drawing never disagrees
    // with the style and the narrative.
    let direction = if addition.delta > 0 {
        Direction::Right
    } else {
        Direction::Left
    };
    Some(PathPlan {
        start_x,
        end_x,
        direction,
        style: JumpStyle::for_delta(addition.delta),
        delta: addition.delta,
    })
}

impl PathPlan {
    /// `true` when the movement is non-negative.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.style == JumpStyle::Positive
    }

    /// The connector outline, from the ruler baseline at the start to just
    /// above the end point.
    #[must_use]
    pub fn to_bez_path(&self) -> BezPath {
        let r = CORNER_RADIUS;
        let dir = self.direction.factor();
        let top = layout::PATH_TOP_Y;

        let mut path = BezPath::new();
        path.move_to((self.start_x, layout::BASELINE_Y));
        path.line_to((self.start_x, top + r));
        path.quad_to((self.start_x, top), (self.start_x + r * dir, top));
        path.line_to((self.end_x - r * dir, top));
        path.quad_to((self.end_x, top), (self.end_x, top + r));
        path.line_to((self.end_x, layout::PATH_END_Y));
        path
    }

    /// The signed movement, with an explicit `+` when non-negative.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:+}", self.delta)
    }

    /// Where the label is anchored: centered over the horizontal run.
    #[must_use]
    pub fn label_anchor(&self) -> Point {
        Point::new(
            (self.start_x + self.end_x) * 0.5,
            layout::PATH_TOP_Y - layout::PATH_LABEL_RISE,
        )
    }
}
