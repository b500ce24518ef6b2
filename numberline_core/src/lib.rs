// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numberline Core: headless logic for teaching integer addition on a number line.
//!
//! A user types a starting integer and a movement integer. This crate turns
//! those two text fields into everything a view needs to draw the addition
//! as a jump along a ruler:
//! - [`input`]: keystroke filtering and parsing of the two fields.
//! - [`ruler`]: the linear value → coordinate mapping and fixed layout.
//! - [`tick`]: the zero / major / medium / minor tick classifier.
//! - [`path`]: the rectilinear jump path, its style and its label.
//! - [`center`]: where the viewport should be centered.
//! - [`explain`]: the three-step narrative.
//! - [`transcript`]: all of the above derived at once.
//!
//! Everything here is a pure function of the two raw strings. The only
//! imperative piece of the system, the viewport scroll, lives in
//! `numberline_scroll`.
//!
//! ## Example
//!
//! ```rust
//! use numberline_core::input::RawInput;
//! use numberline_core::path::Direction;
//! use numberline_core::ruler::RulerConfig;
//! use numberline_core::transcript::Transcript;
//!
//! let raw = RawInput::from_texts("3", "-5").unwrap();
//! let transcript = Transcript::derive(&RulerConfig::default(), &raw);
//!
//! assert_eq!(transcript.result_text(), "-2");
//! let path = transcript.path.as_ref().unwrap();
//! assert_eq!(path.direction, Direction::Left);
//! assert!(!transcript.out_of_range);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod center;
pub mod explain;
pub mod input;
pub mod path;
pub mod ruler;
pub mod tick;
pub mod transcript;

pub use center::{CenterRule, ViewportTarget};
pub use explain::{Narrative, StepDirection};
pub use input::{Addition, Field, FieldId, Inputs, RawInput, RejectedEdit};
pub use path::{Direction, JumpStyle, PathPlan};
pub use ruler::{ConfigError, RulerConfig};
pub use tick::{LabelPolicy, Tick, Tier};
pub use transcript::{Guides, Transcript};
