// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors of the number line view.

use numberline_core::path::JumpStyle;
use numberline_core::tick::Tier;
use peniko::Color;

/// Start point, start guide, and the positive jump.
pub const BLUE: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);
/// The negative jump.
pub const RED: Color = Color::from_rgb8(0xef, 0x44, 0x44);
/// End point and end guide.
pub const GREEN: Color = Color::from_rgb8(0x22, 0xc5, 0x5e);
/// Point outlines.
pub const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);
/// Zero tick and its label.
pub const INK: Color = Color::from_rgb8(0x0f, 0x17, 0x2a);
/// Major labels.
pub const INK_SOFT: Color = Color::from_rgb8(0x33, 0x41, 0x55);
/// Non-zero ticks and minor labels.
pub const INK_MUTED: Color = Color::from_rgb8(0x64, 0x74, 0x8b);
/// Ruler baseline.
pub const RULE: Color = Color::from_rgb8(0x94, 0xa3, 0xb8);
/// Ruler body outline.
pub const BODY_OUTLINE: Color = Color::from_rgb8(0xcb, 0xd5, 0xe1);
/// Ruler body fill.
pub const BODY_FILL: Color = Color::from_rgb8(0xf8, 0xfa, 0xfc);

/// Path, arrowhead and delta label color for a jump style.
#[must_use]
pub fn jump_color(style: JumpStyle) -> Color {
    match style {
        JumpStyle::Positive => BLUE,
        JumpStyle::Negative => RED,
    }
}

/// Id of the arrowhead marker for a jump style.
#[must_use]
pub fn marker_id(style: JumpStyle) -> &'static str {
    match style {
        JumpStyle::Positive => "arrowhead-blue",
        JumpStyle::Negative => "arrowhead-red",
    }
}

/// Tick stroke color.
#[must_use]
pub fn tick_color(tier: Tier) -> Color {
    match tier {
        Tier::Zero => INK,
        Tier::Major | Tier::Medium | Tier::Minor => INK_MUTED,
    }
}

/// Tick label color.
#[must_use]
pub fn label_color(tier: Tier) -> Color {
    match tier {
        Tier::Zero => INK,
        Tier::Major => INK_SOFT,
        Tier::Medium | Tier::Minor => INK_MUTED,
    }
}
