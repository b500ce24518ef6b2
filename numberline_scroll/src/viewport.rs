// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;
use core::time::Duration;

use kurbo::Point;
use numberline_core::center::scroll_offset;

use crate::animation::ScrollAnimation;
use crate::modes::{ClampMode, ScrollBehavior};

/// Default length of a smooth scroll.
pub const DEFAULT_SMOOTH_DURATION: Duration = Duration::from_millis(400);

/// Horizontal scroll viewport over a wide canvas.
///
/// `ScrollViewport` tracks a visible width in view/device units, the total
/// content width, and the current left scroll offset into the content. It
/// plays the part of the display surface's scroll container: it owns the last
/// scroll position, clamps it to the content, and animates smooth scroll
/// requests when the caller advances time.
#[derive(Clone, Debug)]
pub struct ScrollViewport {
    visible_width: f64,
    content_width: f64,
    offset: f64,
    clamp_mode: ClampMode,
    smooth_duration: Duration,
    animation: Option<ScrollAnimation>,
}

impl ScrollViewport {
    /// Creates a viewport `visible_width` wide over content `content_width` wide.
    ///
    /// - Initial offset is zero.
    /// - Clamping defaults to [`ClampMode::ContentBounds`].
    /// - Smooth scrolls take [`DEFAULT_SMOOTH_DURATION`].
    #[must_use]
    pub fn new(visible_width: f64, content_width: f64) -> Self {
        Self {
            visible_width: visible_width.max(0.0),
            content_width: content_width.max(0.0),
            offset: 0.0,
            clamp_mode: ClampMode::default(),
            smooth_duration: DEFAULT_SMOOTH_DURATION,
            animation: None,
        }
    }

    /// Returns the visible width.
    #[must_use]
    pub fn visible_width(&self) -> f64 {
        self.visible_width
    }

    /// Sets the visible width (for example on window resize).
    ///
    /// The offset is re-clamped; an animation in flight keeps its target,
    /// re-clamped as well.
    pub fn set_visible_width(&mut self, width: f64) {
        let width = width.max(0.0);
        if self.visible_width == width {
            return;
        }
        self.visible_width = width;
        self.reclamp();
    }

    /// Returns the content width.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// Sets the content width.
    pub fn set_content_width(&mut self, width: f64) {
        let width = width.max(0.0);
        if self.content_width == width {
            return;
        }
        self.content_width = width;
        self.reclamp();
    }

    /// Current left scroll offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Largest offset allowed by [`ClampMode::ContentBounds`].
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.visible_width).max(0.0)
    }

    /// Sets the clamp mode.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.reclamp();
        }
    }

    /// Returns the current clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Sets how long a smooth scroll takes.
    pub fn set_smooth_duration(&mut self, duration: Duration) {
        self.smooth_duration = duration;
    }

    /// Returns how long a smooth scroll takes.
    #[must_use]
    pub fn smooth_duration(&self) -> Duration {
        self.smooth_duration
    }

    /// Scrolls so that the left edge of the view sits at `offset`.
    ///
    /// A new request always supersedes an animation in flight; only the latest
    /// target is honored.
    pub fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        let target = self.clamp(offset);
        match behavior {
            ScrollBehavior::Instant => {
                self.offset = target;
                self.animation = None;
            }
            ScrollBehavior::Smooth => {
                if self.smooth_duration.is_zero() || self.offset == target {
                    self.offset = target;
                    self.animation = None;
                } else {
                    self.animation = Some(ScrollAnimation::new(
                        self.offset,
                        target,
                        self.smooth_duration,
                    ));
                }
            }
        }
    }

    /// Scrolls so that content coordinate `x` ends up in the middle of the view.
    pub fn center_on(&mut self, x: f64, behavior: ScrollBehavior) {
        self.scroll_to(scroll_offset(x, self.visible_width), behavior);
    }

    /// Advances a smooth scroll by `dt`. Returns `true` while still animating.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        animation.advance(dt);
        self.offset = animation.value();
        if animation.is_finished() {
            self.animation = None;
        }
        self.animation.is_some()
    }

    /// Runs any animation in flight to completion.
    pub fn finish(&mut self) {
        if let Some(animation) = self.animation.take() {
            self.offset = animation.to();
        }
    }

    /// Whether a smooth scroll is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// The offset the viewport is heading to: the animation target if one is
    /// in flight, otherwise the current offset.
    #[must_use]
    pub fn target_offset(&self) -> f64 {
        self.animation.map_or(self.offset, |a| a.to())
    }

    /// Drags the content by `dx` view units, as with a grab-and-drag gesture.
    ///
    /// Dragging right (positive `dx`) reveals content to the left. Any
    /// animation in flight is cancelled.
    pub fn drag_by(&mut self, dx: f64) {
        self.animation = None;
        if dx == 0.0 {
            return;
        }
        self.offset = self.clamp(self.offset - dx);
    }

    /// Content-space range currently visible.
    #[must_use]
    pub fn visible_range(&self) -> Range<f64> {
        self.offset..self.offset + self.visible_width
    }

    /// Content coordinate at the middle of the view.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.offset + self.visible_width / 2.0
    }

    /// Converts a content-space X coordinate into view coordinates.
    #[must_use]
    pub fn world_to_view_x(&self, x: f64) -> f64 {
        x - self.offset
    }

    /// Converts a view-space X coordinate into content coordinates.
    #[must_use]
    pub fn view_to_world_x(&self, x: f64) -> f64 {
        x + self.offset
    }

    /// Convenience conversion from a pointer position, using its X coordinate.
    #[must_use]
    pub fn view_to_world_point_x(&self, pt: Point) -> f64 {
        self.view_to_world_x(pt.x)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ScrollViewportDebugInfo {
        ScrollViewportDebugInfo {
            visible_width: self.visible_width,
            content_width: self.content_width,
            offset: self.offset,
            target_offset: self.target_offset(),
            visible_range: self.visible_range(),
            animating: self.is_animating(),
            clamp_mode: self.clamp_mode,
        }
    }

    fn clamp(&self, offset: f64) -> f64 {
        match self.clamp_mode {
            ClampMode::None => offset,
            ClampMode::ContentBounds => offset.clamp(0.0, self.max_offset()),
        }
    }

    fn reclamp(&mut self) {
        self.offset = self.clamp(self.offset);
        if let Some(animation) = self.animation {
            let to = self.clamp(animation.to());
            if to != animation.to() {
                self.animation = Some(ScrollAnimation::new(self.offset, to, self.smooth_duration));
            }
        }
    }
}

/// Debug snapshot of a [`ScrollViewport`].
#[derive(Clone, Debug)]
pub struct ScrollViewportDebugInfo {
    /// Visible width.
    pub visible_width: f64,
    /// Content width.
    pub content_width: f64,
    /// Current left offset.
    pub offset: f64,
    /// Offset being animated toward (equal to `offset` when idle).
    pub target_offset: f64,
    /// Content range currently visible.
    pub visible_range: Range<f64>,
    /// Whether a smooth scroll is in flight.
    pub animating: bool,
    /// Clamp mode.
    pub clamp_mode: ClampMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_center_on() {
        let mut vp = ScrollViewport::new(1000.0, 16120.0);
        vp.center_on(8060.0, ScrollBehavior::Instant);
        assert_eq!(vp.offset(), 7560.0);
        assert_eq!(vp.center(), 8060.0);
        assert!(!vp.is_animating());
    }

    #[test]
    fn content_bounds_clamp() {
        let mut vp = ScrollViewport::new(1000.0, 16120.0);
        vp.center_on(60.0, ScrollBehavior::Instant);
        assert_eq!(vp.offset(), 0.0);
        vp.center_on(16060.0, ScrollBehavior::Instant);
        assert_eq!(vp.offset(), 15120.0);

        vp.set_clamp_mode(ClampMode::None);
        vp.center_on(60.0, ScrollBehavior::Instant);
        assert_eq!(vp.offset(), -440.0);
    }

    #[test]
    fn narrow_content_pins_offset_to_zero() {
        let mut vp = ScrollViewport::new(1000.0, 300.0);
        vp.center_on(150.0, ScrollBehavior::Smooth);
        assert_eq!(vp.offset(), 0.0);
        assert!(!vp.is_animating());
    }

    #[test]
    fn smooth_scroll_animates_then_settles() {
        let mut vp = ScrollViewport::new(1000.0, 16120.0);
        vp.scroll_to(2000.0, ScrollBehavior::Smooth);
        assert!(vp.is_animating());
        assert_eq!(vp.offset(), 0.0);
        assert_eq!(vp.target_offset(), 2000.0);

        assert!(vp.advance(Duration::from_millis(200)));
        assert_eq!(vp.offset(), 1000.0);

        assert!(!vp.advance(Duration::from_millis(200)));
        assert_eq!(vp.offset(), 2000.0);
        assert!(!vp.advance(Duration::from_millis(16)));
    }

    #[test]
    fn newer_request_supersedes_animation() {
        let mut vp = ScrollViewport::new(1000.0, 16120.0);
        vp.scroll_to(4000.0, ScrollBehavior::Smooth);
        vp.advance(Duration::from_millis(100));
        let mid = vp.offset();

        vp.scroll_to(1000.0, ScrollBehavior::Smooth);
        assert_eq!(vp.target_offset(), 1000.0);
        assert_eq!(vp.offset(), mid);
        vp.finish();
        assert_eq!(vp.offset(), 1000.0);

        vp.scroll_to(3000.0, ScrollBehavior::Smooth);
        vp.scroll_to(500.0, ScrollBehavior::Instant);
        assert!(!vp.is_animating());
        assert_eq!(vp.offset(), 500.0);
    }

    #[test]
    fn drag_cancels_animation_and_clamps() {
        let mut vp = ScrollViewport::new(1000.0, 16120.0);
        vp.scroll_to(500.0, ScrollBehavior::Instant);
        vp.scroll_to(5000.0, ScrollBehavior::Smooth);
        vp.drag_by(200.0);
        assert!(!vp.is_animating());
        assert_eq!(vp.offset(), 300.0);
        vp.drag_by(10_000.0);
        assert_eq!(vp.offset(), 0.0);
    }

    #[test]
    fn resize_reclamps() {
        let mut vp = ScrollViewport::new(1000.0, 16120.0);
        vp.scroll_to(15120.0, ScrollBehavior::Instant);
        vp.set_visible_width(2000.0);
        assert_eq!(vp.offset(), 14120.0);
        assert_eq!(vp.visible_range(), 14120.0..16120.0);
    }

    #[test]
    fn coordinate_conversions_roundtrip() {
        let mut vp = ScrollViewport::new(800.0, 16120.0);
        vp.scroll_to(1234.5, ScrollBehavior::Instant);
        let x = 4321.0;
        assert_eq!(vp.view_to_world_x(vp.world_to_view_x(x)), x);
        assert_eq!(vp.view_to_world_point_x(Point::new(10.0, 999.0)), 1244.5);

        let info = vp.debug_info();
        assert_eq!(info.offset, 1234.5);
        assert!(!info.animating);
        assert_eq!(info.clamp_mode, ClampMode::ContentBounds);
    }
}
