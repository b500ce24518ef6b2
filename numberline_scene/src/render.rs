// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turns a transcript into a frame.

use alloc::string::{String, ToString};
use alloc::vec;

use kurbo::{Cap, Circle, Line, Point, RoundedRect, Stroke};
use numberline_core::input::RawInput;
use numberline_core::path::{JumpStyle, PathPlan};
use numberline_core::ruler::{RulerConfig, layout};
use numberline_core::tick::{LabelPolicy, Tick};
use numberline_core::transcript::{Guides, Transcript};

use crate::palette;
use crate::scene::{ArrowMarker, Canvas, Equation, Frame, Item, TextAlign};

/// Size of the delta label over a jump.
const JUMP_LABEL_SIZE: f64 = 28.0;
const JUMP_STROKE_WIDTH: f64 = 6.0;
const JUMP_DASHES: [f64; 2] = [10.0, 8.0];
const GUIDE_STROKE_WIDTH: f64 = 4.0;
const GUIDE_DASHES: [f64; 2] = [6.0, 4.0];
const GUIDE_OPACITY: f32 = 0.4;
const START_RADIUS: f64 = 10.0;
const END_RADIUS: f64 = 12.0;
const POINT_OUTLINE: f64 = 4.0;

/// Rendering choices that are not part of the ruler geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Which ticks get numeric labels.
    pub labels: LabelPolicy,
}

/// Derives the transcript for `raw` and renders the full frame.
#[must_use]
pub fn render_frame(config: &RulerConfig, raw: &RawInput, options: &RenderOptions) -> Frame {
    let transcript = Transcript::derive(config, raw);
    render_transcript(config, raw, &transcript, options)
}

/// Renders a frame from an already derived transcript.
#[must_use]
pub fn render_transcript(
    config: &RulerConfig,
    raw: &RawInput,
    transcript: &Transcript,
    options: &RenderOptions,
) -> Frame {
    let warning = transcript.warning(config);
    if let Some(text) = &warning {
        log::debug!("out of range: {text}");
    }
    Frame {
        canvas: render_canvas(config, transcript, options),
        equation: Equation {
            start: raw.start.text().into(),
            delta: raw.delta.text().into(),
            result: transcript.result_text(),
        },
        warning,
        explanation: transcript.narrative.map(|n| n.steps()),
    }
}

/// Renders the number line canvas.
///
/// Paint order: ruler body, baseline, guides, ticks and labels, the jump and
/// its label, then the start and end points on top.
#[must_use]
pub fn render_canvas(config: &RulerConfig, transcript: &Transcript, options: &RenderOptions) -> Canvas {
    let mut canvas = Canvas::new(config.canvas_width(), config.canvas_height());
    canvas.markers = vec![
        arrow_marker(JumpStyle::Positive),
        arrow_marker(JumpStyle::Negative),
    ];

    push_ruler_body(&mut canvas);
    if let Some(guides) = &transcript.guides {
        push_guides(&mut canvas, guides);
    }
    for tick in config.ticks() {
        push_tick(&mut canvas, &tick, options.labels);
    }
    if let Some(plan) = &transcript.path {
        push_jump(&mut canvas, plan);
    }
    if let Some(guides) = &transcript.guides {
        push_points(&mut canvas, guides);
    }

    log::trace!(
        "rendered {} items on a {}x{} canvas",
        canvas.items.len(),
        canvas.width,
        canvas.height
    );
    canvas
}

fn arrow_marker(style: JumpStyle) -> ArrowMarker {
    ArrowMarker {
        id: palette::marker_id(style),
        color: palette::jump_color(style),
    }
}

fn push_ruler_body(canvas: &mut Canvas) {
    let inset = layout::BODY_INSET;
    let top = layout::BASELINE_Y;
    let right = canvas.width - inset;
    canvas.push(Item::Panel {
        shape: RoundedRect::new(
            inset,
            top,
            right,
            top + layout::BODY_HEIGHT,
            layout::BODY_RADIUS,
        ),
        fill: palette::BODY_FILL,
        outline: palette::BODY_OUTLINE,
        outline_width: 3.0,
        shadow: true,
    });
    canvas.push(Item::Line {
        line: Line::new((inset, top), (right, top)),
        color: palette::RULE,
        stroke: Stroke::new(2.0),
        opacity: 1.0,
    });
}

fn push_guides(canvas: &mut Canvas, guides: &Guides) {
    let stroke = Stroke::new(GUIDE_STROKE_WIDTH).with_dashes(0.0, GUIDE_DASHES);
    let bottom = layout::BASELINE_Y + layout::BODY_HEIGHT;
    for (x, color) in [
        (guides.start_x, palette::BLUE),
        (guides.end_x, palette::GREEN),
    ] {
        canvas.push(Item::Line {
            line: Line::new((x, layout::BASELINE_Y), (x, bottom)),
            color,
            stroke: stroke.clone(),
            opacity: GUIDE_OPACITY,
        });
    }
}

fn push_tick(canvas: &mut Canvas, tick: &Tick, labels: LabelPolicy) {
    let tier = tick.tier;
    canvas.push(Item::Line {
        line: Line::new(
            (tick.x, layout::BASELINE_Y),
            (tick.x, layout::BASELINE_Y + tier.length()),
        ),
        color: palette::tick_color(tier),
        stroke: Stroke::new(tier.stroke_width()).with_caps(Cap::Round),
        opacity: 1.0,
    });
    if tier.is_labeled(labels) {
        canvas.push(Item::Text {
            text: tick.value.to_string(),
            anchor: Point::new(tick.x, layout::LABEL_Y),
            align: TextAlign::Middle,
            size: tier.font_size(),
            weight: tier.font_weight(),
            color: palette::label_color(tier),
        });
    }
}

fn push_jump(canvas: &mut Canvas, plan: &PathPlan) {
    let color = palette::jump_color(plan.style);
    canvas.push(Item::Path {
        path: plan.to_bez_path(),
        color,
        stroke: Stroke::new(JUMP_STROKE_WIDTH).with_dashes(0.0, JUMP_DASHES),
        marker_end: Some(palette::marker_id(plan.style)),
        animated: true,
    });
    canvas.push(Item::Text {
        text: plan.label(),
        anchor: plan.label_anchor(),
        align: TextAlign::Middle,
        size: JUMP_LABEL_SIZE,
        weight: 700,
        color,
    });
}

fn push_points(canvas: &mut Canvas, guides: &Guides) {
    for (x, radius, fill) in [
        (guides.start_x, START_RADIUS, palette::BLUE),
        (guides.end_x, END_RADIUS, palette::GREEN),
    ] {
        canvas.push(Item::Dot {
            circle: Circle::new((x, layout::BASELINE_Y), radius),
            fill,
            outline: palette::WHITE,
            outline_width: POINT_OUTLINE,
        });
    }
}

/// Plain-text rendering of the equation row, e.g. `3 + -5 = -2`.
///
/// Empty fields show their `0` placeholder.
#[must_use]
pub fn equation_line(equation: &Equation) -> String {
    let field = |text: &str| if text.is_empty() { "0".to_string() } else { text.to_string() };
    alloc::format!(
        "{} + {} = {}",
        field(&equation.start),
        field(&equation.delta),
        equation.result
    )
}
