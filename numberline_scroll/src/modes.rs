// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for the scroll offset relative to the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not clamp; the offset may go anywhere, including negative.
    None,
    /// Keep the offset in `[0, content_width - visible_width]`, the way a
    /// scroll container does. When the content is narrower than the view the
    /// only valid offset is zero.
    #[default]
    ContentBounds,
}

/// How a scroll request reaches its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump straight to the target.
    Instant,
    /// Animate toward the target over the viewport's smooth-scroll duration.
    #[default]
    Smooth,
}
