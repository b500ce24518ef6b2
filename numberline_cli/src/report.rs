// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text and file output for frames.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context as _;
use numberline_core::transcript::Transcript;
use numberline_scene::{Frame, equation_line};

/// Prints the panels around the ruler: equation, warning and explanation.
pub(crate) fn print_frame(out: &mut impl Write, frame: &Frame) -> io::Result<()> {
    writeln!(out, "{}", equation_line(&frame.equation))?;
    if let Some(warning) = &frame.warning {
        writeln!(out, "warning: {warning}")?;
    }
    if let Some(steps) = &frame.explanation {
        for (i, step) in steps.iter().enumerate() {
            writeln!(out, "  {}. {step}", i + 1)?;
        }
    }
    Ok(())
}

/// Prints the transcript as pretty JSON followed by a newline.
pub(crate) fn print_json(out: &mut impl Write, transcript: &Transcript) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, transcript).context("failed to serialize transcript")?;
    writeln!(out)?;
    Ok(())
}

/// Writes the frame's canvas as an SVG document.
pub(crate) fn write_svg(path: &Path, frame: &Frame) -> anyhow::Result<()> {
    let svg = numberline_svg::to_svg(&frame.canvas);
    std::fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Pixel values rounded to a tenth, without a trailing `.0`.
pub(crate) fn fmt_px(v: f64) -> String {
    let rounded = (v * 10.0).round() / 10.0;
    if rounded == rounded.trunc() {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numberline_core::input::RawInput;
    use numberline_core::ruler::RulerConfig;
    use numberline_scene::{RenderOptions, render_frame};

    fn printed(start: &str, delta: &str) -> String {
        let raw = RawInput::from_texts(start, delta).unwrap();
        let frame = render_frame(&RulerConfig::default(), &raw, &RenderOptions::default());
        let mut out = Vec::new();
        print_frame(&mut out, &frame).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn incomplete_inputs_print_only_the_equation() {
        assert_eq!(printed("", "4"), "0 + 4 = ?\n");
    }

    #[test]
    fn complete_inputs_print_three_steps() {
        let text = printed("3", "-5");
        assert!(text.starts_with("3 + -5 = -2\n"));
        assert!(text.contains("  1. "));
        assert!(text.contains("  3. "));
        assert!(!text.contains("warning"));
    }

    #[test]
    fn out_of_range_prints_the_warning() {
        assert!(printed("150", "-10").contains("warning: "));
    }

    #[test]
    fn transcript_serializes_to_json() {
        let raw = RawInput::from_texts("3", "-5").unwrap();
        let transcript = Transcript::derive(&RulerConfig::default(), &raw);
        let value = serde_json::to_value(&transcript).unwrap();
        assert_eq!(value["path"]["direction"], "Left");
        assert_eq!(value["path"]["style"], "Negative");
        assert_eq!(value["addition"]["sum"], -2);
        assert_eq!(value["inputs"]["start"], 3);
        assert_eq!(value["out_of_range"], false);

        let mut out = Vec::new();
        print_json(&mut out, &transcript).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        let reparsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, value);
    }

    #[test]
    fn incomplete_transcript_serializes_nulls() {
        let raw = RawInput::from_texts("", "4").unwrap();
        let transcript = Transcript::derive(&RulerConfig::default(), &raw);
        let value = serde_json::to_value(&transcript).unwrap();
        assert!(value["path"].is_null());
        assert!(value["addition"].is_null());
        assert!(value["narrative"].is_null());
        assert_eq!(value["target"]["rule"], "Origin");
    }

    #[test]
    fn pixel_formatting() {
        assert_eq!(fmt_px(7548.0), "7548");
        assert_eq!(fmt_px(12.25), "12.3");
    }
}
