// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// A time-driven scroll from one offset to another.
///
/// The animation does not own a clock. Callers advance it by the elapsed
/// frame time and read back the current offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    elapsed: Duration,
    duration: Duration,
}

impl ScrollAnimation {
    /// Creates an animation from `from` to `to` lasting `duration`.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Offset the animation started from.
    #[must_use]
    pub fn from(&self) -> f64 {
        self.from
    }

    /// Offset the animation ends on.
    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Advances the clock by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Whether the animation has reached its target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current offset.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out_cubic(self.progress())
    }
}

/// Cubic ease-in-out on `[0, 1]`.
fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
