// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numberline Scroll: the scroll side effect of the number line view.
//!
//! All of the number line's logic is pure except one thing: keeping the wide
//! ruler scrolled so the action is in view. This crate holds that one
//! imperative boundary:
//! - [`ScrollViewport`]: a headless horizontal scroll container (offset,
//!   clamping, instant and smooth scrolls, grab-and-drag).
//! - [`CenteringObserver`]: a change observer that turns the parsed inputs of
//!   each render into at most one [`ScrollRequest`]. The first render (mount)
//!   jumps instantly; later changes animate; unrelated re-renders do nothing.
//!
//! It does **not** own a clock. Callers advance smooth scrolls with the frame
//! time via [`ScrollViewport::advance`].
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use numberline_core::input::Inputs;
//! use numberline_core::ruler::RulerConfig;
//! use numberline_scroll::{CenteringObserver, ScrollViewport};
//!
//! let config = RulerConfig::default();
//! let mut viewport = ScrollViewport::new(1000.0, config.canvas_width());
//! let mut observer = CenteringObserver::new();
//!
//! // Mount: centered on zero, no animation.
//! observer.observe_and_apply(&config, &Inputs::default(), &mut viewport);
//! assert_eq!(viewport.center(), config.to_coordinate(0));
//!
//! // The user types a start value: the view glides over.
//! observer.observe_and_apply(&config, &Inputs::new(Some(30), None), &mut viewport);
//! while viewport.advance(Duration::from_millis(16)) {}
//! assert_eq!(viewport.center(), config.to_coordinate(30));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod modes;
mod observer;
mod viewport;

pub use animation::ScrollAnimation;
pub use modes::{ClampMode, ScrollBehavior};
pub use observer::{CenteringKey, CenteringObserver, ScrollRequest};
pub use viewport::{DEFAULT_SMOOTH_DURATION, ScrollViewport, ScrollViewportDebugInfo};
