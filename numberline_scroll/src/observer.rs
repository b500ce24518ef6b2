// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use numberline_core::center::{ViewportTarget, scroll_target};
use numberline_core::input::Inputs;
use numberline_core::ruler::RulerConfig;

use crate::modes::ScrollBehavior;
use crate::viewport::ScrollViewport;

/// What the centering effect depends on.
///
/// Two renders with equal keys must not scroll, however else they differ.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CenteringKey {
    /// Parsed start.
    pub start: Option<i64>,
    /// Parsed movement.
    pub delta: Option<i64>,
    /// Whether the pair forms a complete addition.
    pub valid: bool,
}

impl CenteringKey {
    /// Key for a pair of parsed values.
    #[must_use]
    pub fn of(inputs: &Inputs) -> Self {
        Self {
            start: inputs.start,
            delta: inputs.delta,
            valid: inputs.is_valid(),
        }
    }
}

/// A request to center the viewport on a target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollRequest {
    /// Where to center and which rule picked it.
    pub target: ViewportTarget,
    /// Jump or animate.
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    /// Applies the request to a viewport.
    pub fn apply(&self, viewport: &mut ScrollViewport) {
        viewport.center_on(self.target.x, self.behavior);
    }
}

/// Change observer that drives the viewport scroll.
///
/// Feed it the parsed inputs on every render. The first call is the mount: it
/// always yields an instant request. After that a smooth request is yielded
/// only when the [`CenteringKey`] changes, so re-renders that leave start,
/// delta and validity alone never scroll.
#[derive(Clone, Debug, Default)]
pub struct CenteringObserver {
    last: Option<CenteringKey>,
    issued: u64,
}

impl CenteringObserver {
    /// Creates an observer that has not seen a render yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the mount request has been issued.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.last.is_some()
    }

    /// Number of requests issued so far, the mount included.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Observes one render. Returns the scroll request to apply, if any.
    pub fn observe(&mut self, config: &RulerConfig, inputs: &Inputs) -> Option<ScrollRequest> {
        let key = CenteringKey::of(inputs);
        let behavior = match self.last {
            None => ScrollBehavior::Instant,
            Some(last) if last == key => return None,
            Some(_) => ScrollBehavior::Smooth,
        };
        self.last = Some(key);
        self.issued += 1;

        let request = ScrollRequest {
            target: scroll_target(config, inputs),
            behavior,
        };
        log::debug!(
            "centering on x={} ({:?}, {:?}) for {:?}",
            request.target.x,
            request.target.rule,
            request.behavior,
            key
        );
        Some(request)
    }

    /// Observes a render and applies any resulting request to `viewport`.
    ///
    /// Returns the request that was applied.
    pub fn observe_and_apply(
        &mut self,
        config: &RulerConfig,
        inputs: &Inputs,
        viewport: &mut ScrollViewport,
    ) -> Option<ScrollRequest> {
        let request = self.observe(config, inputs)?;
        request.apply(viewport);
        Some(request)
    }
}
