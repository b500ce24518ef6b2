// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export backend for the number line scene.
//!
//! [`to_svg`] walks a [`Canvas`] in paint order and writes a standalone SVG
//! document:
//! - Arrowhead markers go into `<defs>` and are referenced with `marker-end`.
//! - Panels with a shadow share one `feDropShadow` filter.
//! - Animated paths get a CSS keyframe animation on `stroke-dashoffset`, so
//!   their dashes flow along the jump.
//!
//! Text is emitted as `<text>` elements and left to the viewer's fonts.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use kurbo::{BezPath, Cap, Stroke};
use numberline_scene::{ArrowMarker, Canvas, Item, TextAlign};
use peniko::Color;

const SHADOW_FILTER_ID: &str = "ruler-shadow";
const FLOW_CLASS: &str = "flow";

/// Export a canvas as an SVG document.
///
/// The canvas size is used both as the SVG `width`/`height` attributes and for
/// `viewBox="0 0 width height"`.
#[must_use]
pub fn to_svg(canvas: &Canvas) -> String {
    let mut defs = String::new();
    let mut body = String::new();

    let has_shadow = canvas
        .items
        .iter()
        .any(|item| matches!(item, Item::Panel { shadow: true, .. }));
    let flow_dash = canvas.items.iter().find_map(|item| match item {
        Item::Path {
            stroke,
            animated: true,
            ..
        } => Some(dash_period(stroke)),
        _ => None,
    });

    if let Some(period) = flow_dash {
        let _ = write!(
            defs,
            "<style>@keyframes dash{{to{{stroke-dashoffset:-{}}}}}.{FLOW_CLASS}{{animation:dash 1s linear infinite}}</style>",
            fmt_f64(period)
        );
    }
    for marker in &canvas.markers {
        write_marker_def(&mut defs, marker);
    }
    if has_shadow {
        let _ = write!(
            defs,
            "<filter id=\"{SHADOW_FILTER_ID}\" x=\"-1%\" y=\"-10%\" width=\"102%\" height=\"130%\"><feDropShadow dx=\"0\" dy=\"4\" stdDeviation=\"4\" flood-opacity=\"0.05\"/></filter>"
        );
    }

    for item in &canvas.items {
        write_item(&mut body, item);
    }

    let (width, height) = (fmt_f64(canvas.width), fmt_f64(canvas.height));
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    if !defs.is_empty() {
        svg.push_str("<defs>");
        svg.push_str(&defs);
        svg.push_str("</defs>");
    }
    svg.push_str(&body);
    svg.push_str("</svg>");
    svg
}

fn write_marker_def(defs: &mut String, marker: &ArrowMarker) {
    let (rgb, a) = color_to_svg(marker.color);
    let _ = write!(
        defs,
        "<marker id=\"{}\" markerWidth=\"12\" markerHeight=\"12\" refX=\"10\" refY=\"6\" orient=\"auto\"><path d=\"M0 0L12 6L0 12Z\" fill=\"{rgb}\"{}/></marker>",
        escape_xml(marker.id),
        opacity_attr("fill-opacity", a)
    );
}

fn write_item(out: &mut String, item: &Item) {
    match item {
        Item::Panel {
            shape,
            fill,
            outline,
            outline_width,
            shadow,
        } => {
            let rect = shape.rect();
            let radius = shape.radii().top_left;
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\"{}{}",
                fmt_f64(rect.x0),
                fmt_f64(rect.y0),
                fmt_f64(rect.width()),
                fmt_f64(rect.height()),
                fmt_f64(radius),
                paint_attrs("fill", *fill),
                paint_attrs("stroke", *outline),
            );
            let _ = write!(out, " stroke-width=\"{}\"", fmt_f64(*outline_width));
            if *shadow {
                let _ = write!(out, " filter=\"url(#{SHADOW_FILTER_ID})\"");
            }
            out.push_str("/>");
        }
        Item::Line {
            line,
            color,
            stroke,
            opacity,
        } => {
            let _ = write!(
                out,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}{}",
                fmt_f64(line.p0.x),
                fmt_f64(line.p0.y),
                fmt_f64(line.p1.x),
                fmt_f64(line.p1.y),
                paint_attrs("stroke", *color),
                stroke_attrs(stroke),
            );
            out.push_str(&opacity_attr("opacity", *opacity));
            out.push_str("/>");
        }
        Item::Path {
            path,
            color,
            stroke,
            marker_end,
            animated,
        } => {
            let _ = write!(
                out,
                "<path d=\"{}\" fill=\"none\"{}{}",
                bez_path_to_svg_d(path),
                paint_attrs("stroke", *color),
                stroke_attrs(stroke),
            );
            if let Some(id) = marker_end {
                let _ = write!(out, " marker-end=\"url(#{})\"", escape_xml(id));
            }
            if *animated {
                let _ = write!(out, " class=\"{FLOW_CLASS}\"");
            }
            out.push_str("/>");
        }
        Item::Dot {
            circle,
            fill,
            outline,
            outline_width,
        } => {
            let _ = write!(
                out,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}{} stroke-width=\"{}\"/>",
                fmt_f64(circle.center.x),
                fmt_f64(circle.center.y),
                fmt_f64(circle.radius),
                paint_attrs("fill", *fill),
                paint_attrs("stroke", *outline),
                fmt_f64(*outline_width),
            );
        }
        Item::Text {
            text,
            anchor,
            align,
            size,
            weight,
            color,
        } => {
            let _ = write!(
                out,
                "<text x=\"{}\" y=\"{}\" text-anchor=\"{}\" font-size=\"{}\" font-weight=\"{weight}\"{}>{}</text>",
                fmt_f64(anchor.x),
                fmt_f64(anchor.y),
                text_anchor_svg(*align),
                fmt_f64(*size),
                paint_attrs("fill", *color),
                escape_xml(text),
            );
        }
    }
}

/// Length of one dash cycle; the flow animation shifts by exactly this much.
fn dash_period(stroke: &Stroke) -> f64 {
    stroke.dash_pattern.iter().sum()
}

fn paint_attrs(attr: &str, color: Color) -> String {
    let (rgb, a) = color_to_svg(color);
    format!(" {attr}=\"{rgb}\"{}", opacity_attr(&format!("{attr}-opacity"), a))
}

fn opacity_attr(attr: &str, opacity: f32) -> String {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity < 1.0 {
        format!(" {attr}=\"{}\"", fmt_f32(opacity))
    } else {
        String::new()
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut out = String::new();
    let _ = write!(out, " stroke-width=\"{}\"", fmt_f64(stroke.width));
    // SVG has a single linecap, while kurbo can specify start/end caps.
    // Use the start cap when they differ.
    if stroke.start_cap != Cap::Butt {
        let _ = write!(
            out,
            " stroke-linecap=\"{}\"",
            stroke_cap_svg(stroke.start_cap)
        );
    }
    if !stroke.dash_pattern.is_empty() {
        out.push_str(" stroke-dasharray=\"");
        for (i, v) in stroke.dash_pattern.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&fmt_f64(*v));
        }
        out.push('"');
    }
    if stroke.dash_offset != 0.0 {
        let _ = write!(
            out,
            " stroke-dashoffset=\"{}\"",
            fmt_f64(stroke.dash_offset)
        );
    }
    out
}

fn stroke_cap_svg(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Square => "square",
        Cap::Round => "round",
    }
}

fn text_anchor_svg(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Start => "start",
        TextAlign::Middle => "middle",
        TextAlign::End => "end",
    }
}

fn bez_path_to_svg_d(path: &BezPath) -> String {
    use kurbo::PathEl;

    let mut d = String::new();
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", fmt_f64(p.x), fmt_f64(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", fmt_f64(p.x), fmt_f64(p.y));
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(
                    d,
                    "Q{} {} {} {}",
                    fmt_f64(p1.x),
                    fmt_f64(p1.y),
                    fmt_f64(p2.x),
                    fmt_f64(p2.y)
                );
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    fmt_f64(p1.x),
                    fmt_f64(p1.y),
                    fmt_f64(p2.x),
                    fmt_f64(p2.y),
                    fmt_f64(p3.x),
                    fmt_f64(p3.y)
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats a coordinate: integers without a fraction, otherwise up to three
/// decimals with trailing zeros trimmed.
fn fmt_f64(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

fn fmt_f32(v: f32) -> String {
    fmt_f64(f64::from(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Circle, Line, Point, RoundedRect};
    use numberline_scene::palette;

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_f64(16120.0), "16120");
        assert_eq!(fmt_f64(-20.0), "-20");
        assert_eq!(fmt_f64(0.5), "0.5");
        assert_eq!(fmt_f64(1.0 / 3.0), "0.333");
        assert_eq!(fmt_f64(-0.0001), "0");
        assert_eq!(fmt_f32(0.4), "0.4");
    }

    #[test]
    fn exports_basic_items() {
        let mut canvas = Canvas::new(100.0, 80.0);
        canvas.push(Item::Panel {
            shape: RoundedRect::new(10.0, 20.0, 90.0, 60.0, 4.0),
            fill: palette::BODY_FILL,
            outline: palette::BODY_OUTLINE,
            outline_width: 3.0,
            shadow: true,
        });
        canvas.push(Item::Line {
            line: Line::new((10.0, 20.0), (10.0, 40.0)),
            color: palette::GREEN,
            stroke: Stroke::new(4.0).with_dashes(0.0, [6.0, 4.0]),
            opacity: 0.4,
        });
        canvas.push(Item::Dot {
            circle: Circle::new((50.0, 20.0), 10.0),
            fill: palette::BLUE,
            outline: palette::WHITE,
            outline_width: 4.0,
        });
        let svg = to_svg(&canvas);
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"80\" viewBox=\"0 0 100 80\">"));
        assert!(svg.contains("<rect x=\"10\" y=\"20\" width=\"80\" height=\"40\" rx=\"4\" fill=\"#f8fafc\" stroke=\"#cbd5e1\" stroke-width=\"3\" filter=\"url(#ruler-shadow)\"/>"));
        assert!(svg.contains("<filter id=\"ruler-shadow\""));
        assert!(svg.contains("stroke-dasharray=\"6 4\""));
        assert!(svg.contains("opacity=\"0.4\""));
        assert!(svg.contains("<circle cx=\"50\" cy=\"20\" r=\"10\" fill=\"#3b82f6\" stroke=\"#ffffff\" stroke-width=\"4\"/>"));
        assert!(!svg.contains("@keyframes"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn animated_path_with_marker() {
        let mut canvas = Canvas::new(200.0, 200.0);
        canvas.markers.push(ArrowMarker {
            id: "arrowhead-red",
            color: palette::RED,
        });
        let mut path = BezPath::new();
        path.move_to((100.0, 180.0));
        path.line_to((100.0, 100.0));
        path.quad_to((100.0, 80.0), (80.0, 80.0));
        canvas.push(Item::Path {
            path,
            color: palette::RED,
            stroke: Stroke::new(6.0).with_dashes(0.0, [10.0, 8.0]),
            marker_end: Some("arrowhead-red"),
            animated: true,
        });
        let svg = to_svg(&canvas);
        assert!(svg.contains("<marker id=\"arrowhead-red\""));
        assert!(svg.contains("d=\"M100 180L100 100Q100 80 80 80\""));
        assert!(svg.contains("marker-end=\"url(#arrowhead-red)\""));
        assert!(svg.contains("class=\"flow\""));
        assert!(svg.contains("stroke-dashoffset:-18"));
    }

    #[test]
    fn text_is_escaped() {
        let mut canvas = Canvas::new(10.0, 10.0);
        canvas.push(Item::Text {
            text: "<a & b>".into(),
            anchor: Point::new(5.0, 5.0),
            align: TextAlign::Middle,
            size: 20.0,
            weight: 600,
            color: palette::INK,
        });
        let svg = to_svg(&canvas);
        assert!(svg.contains(">&lt;a &amp; b&gt;</text>"));
        assert!(svg.contains("font-weight=\"600\""));
        assert!(svg.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn rendered_jump_references_its_style_marker() {
        use numberline_core::input::RawInput;
        use numberline_core::ruler::RulerConfig;
        use numberline_scene::{RenderOptions, render_frame};

        let render = |start: &str, delta: &str| {
            let raw = RawInput::from_texts(start, delta).unwrap();
            to_svg(&render_frame(&RulerConfig::default(), &raw, &RenderOptions::default()).canvas)
        };

        let negative = render("3", "-5");
        assert!(negative.contains("marker-end=\"url(#arrowhead-red)\""));
        assert!(negative.contains("class=\"flow\""));
        assert!(!negative.contains("url(#arrowhead-blue)"));

        let positive = render("-20", "7");
        assert!(positive.contains("marker-end=\"url(#arrowhead-blue)\""));

        let idle = render("", "4");
        assert!(!idle.contains("marker-end"));
        assert!(!idle.contains("@keyframes"));
        assert!(idle.contains("width=\"16120\""));
    }
}
