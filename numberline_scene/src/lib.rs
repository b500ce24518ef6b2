// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numberline Scene: the renderer of the number line view.
//!
//! This crate consumes a [`Transcript`](numberline_core::transcript::Transcript)
//! and produces a [`Frame`]: a backend-agnostic display list of the ruler
//! ([`Canvas`]) plus the surrounding panels (equation, warning banner,
//! explanation).
//!
//! Geometry uses Kurbo types and colors use Peniko, so a backend only has to
//! walk [`Canvas::items`] in order. `numberline_svg` is one such backend.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod palette;
mod render;
mod scene;

pub use render::{RenderOptions, equation_line, render_canvas, render_frame, render_transcript};
pub use scene::{ArrowMarker, Canvas, Equation, Frame, Item, TextAlign};
