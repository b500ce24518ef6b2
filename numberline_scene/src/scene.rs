// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene types: a flat display list plus the panels around it.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Line, Point, RoundedRect, Stroke};
use peniko::Color;

/// Horizontal alignment of a text item relative to its anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    /// Anchor at the text start.
    Start,
    /// Anchor at the text center.
    #[default]
    Middle,
    /// Anchor at the text end.
    End,
}

/// An arrowhead definition that paths can reference by id.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrowMarker {
    /// Id paths use to refer to this marker.
    pub id: &'static str,
    /// Fill color of the arrowhead.
    pub color: Color,
}

/// One drawable item. Items are painted in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    /// A filled and outlined rounded rectangle.
    Panel {
        /// Geometry.
        shape: RoundedRect,
        /// Fill color.
        fill: Color,
        /// Outline color.
        outline: Color,
        /// Outline width.
        outline_width: f64,
        /// Whether the panel casts a soft drop shadow.
        shadow: bool,
    },
    /// A stroked line segment.
    Line {
        /// Geometry.
        line: Line,
        /// Stroke color.
        color: Color,
        /// Stroke style (width, caps, dashes).
        stroke: Stroke,
        /// Group opacity in `[0, 1]`.
        opacity: f32,
    },
    /// A stroked, unfilled path.
    Path {
        /// Geometry.
        path: BezPath,
        /// Stroke color.
        color: Color,
        /// Stroke style (width, caps, dashes).
        stroke: Stroke,
        /// Id of an [`ArrowMarker`] drawn at the path's end.
        marker_end: Option<&'static str>,
        /// Whether the dashes should flow along the path.
        animated: bool,
    },
    /// A filled circle with an outline.
    Dot {
        /// Geometry.
        circle: Circle,
        /// Fill color.
        fill: Color,
        /// Outline color.
        outline: Color,
        /// Outline width.
        outline_width: f64,
    },
    /// A single line of text.
    Text {
        /// Content.
        text: String,
        /// Baseline anchor.
        anchor: Point,
        /// Alignment around the anchor.
        align: TextAlign,
        /// Font size.
        size: f64,
        /// Font weight (CSS numeric scale).
        weight: u16,
        /// Fill color.
        color: Color,
    },
}

/// The drawn number line: a fixed-size canvas with an ordered item list.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Arrowhead definitions available to paths.
    pub markers: Vec<ArrowMarker>,
    /// Items in paint order.
    pub items: Vec<Item>,
}

impl Canvas {
    /// Creates an empty canvas.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            markers: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Appends an item on top of everything drawn so far.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Looks up a marker definition by id.
    #[must_use]
    pub fn marker(&self, id: &str) -> Option<&ArrowMarker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// All text items' contents, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().filter_map(|item| match item {
            Item::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of path items.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, Item::Path { .. }))
            .count()
    }
}

/// The three operand boxes: start, movement and result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    /// Start field text as typed.
    pub start: String,
    /// Movement field text as typed.
    pub delta: String,
    /// The sum, or the placeholder glyph.
    pub result: String,
}

/// Everything the view shows for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// The number line itself.
    pub canvas: Canvas,
    /// The operand boxes.
    pub equation: Equation,
    /// Out-of-range banner, when it applies.
    pub warning: Option<String>,
    /// The three explanation steps; omitted while inputs are incomplete.
    pub explanation: Option<[String; 3]>,
}
