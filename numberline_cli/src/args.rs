// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command line arguments and the configuration they map onto.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use numberline_core::ruler::RulerConfig;
use numberline_core::tick::LabelPolicy;
use numberline_scene::RenderOptions;
use numberline_scroll::{DEFAULT_SMOOTH_DURATION, ScrollViewport};

/// Visual aid for adding signed integers on a number line.
#[derive(Parser, Debug)]
#[command(name = "numberline", version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Render one addition and print its equation, warning and explanation.
    Render(RenderArgs),
    /// Read edit commands from stdin and print a frame after every change.
    Interactive(InteractiveArgs),
}

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Starting value, as typed into the start field.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) start: String,
    /// Movement, as typed into the movement field.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) delta: String,
    /// Write the number line as SVG to this path.
    #[arg(long)]
    pub(crate) svg: Option<PathBuf>,
    /// Print the derived transcript as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) view: ViewArgs,
    #[command(flatten)]
    pub(crate) ruler: RulerArgs,
}

#[derive(Args, Debug)]
pub(crate) struct InteractiveArgs {
    /// Rewrite the number line as SVG to this path after every change.
    #[arg(long)]
    pub(crate) svg: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) view: ViewArgs,
    #[command(flatten)]
    pub(crate) ruler: RulerArgs,
}

/// Viewport and labeling flags.
#[derive(Args, Debug)]
pub(crate) struct ViewArgs {
    /// Width of the visible part of the ruler, in pixels.
    #[arg(long, default_value_t = ViewportConfig::DEFAULT_VISIBLE_WIDTH)]
    pub(crate) viewport_width: f64,
    /// Duration of a smooth scroll, in milliseconds.
    #[arg(long, default_value_t = ViewportConfig::default().smooth_millis())]
    pub(crate) smooth_ms: u64,
    /// Label every tick instead of only zero and the multiples of ten.
    #[arg(long)]
    pub(crate) all_labels: bool,
}

impl ViewArgs {
    pub(crate) fn viewport_config(&self) -> ViewportConfig {
        ViewportConfig {
            visible_width: self.viewport_width,
            smooth_duration: Duration::from_millis(self.smooth_ms),
        }
    }

    pub(crate) fn render_options(&self) -> RenderOptions {
        RenderOptions {
            labels: if self.all_labels {
                LabelPolicy::All
            } else {
                LabelPolicy::MajorAndZero
            },
        }
    }
}

/// Ruler geometry flags. Defaults are the reference layout.
#[derive(Args, Debug)]
pub(crate) struct RulerArgs {
    /// Horizontal padding before the first and after the last tick.
    #[arg(long, default_value_t = RulerConfig::REFERENCE.margin())]
    pub(crate) margin: f64,
    /// Distance between consecutive integers.
    #[arg(long, default_value_t = RulerConfig::REFERENCE.spacing())]
    pub(crate) spacing: f64,
    /// Lowest integer drawn on the ruler.
    #[arg(long, default_value_t = RulerConfig::REFERENCE.domain_min(), allow_hyphen_values = true)]
    pub(crate) domain_min: i64,
    /// Highest integer drawn on the ruler.
    #[arg(long, default_value_t = RulerConfig::REFERENCE.domain_max(), allow_hyphen_values = true)]
    pub(crate) domain_max: i64,
}

impl RulerArgs {
    pub(crate) fn ruler_config(&self) -> anyhow::Result<RulerConfig> {
        RulerConfig::new(self.margin, self.spacing, self.domain_min, self.domain_max)
            .context("invalid ruler configuration")
    }
}

/// How the scroll container around the ruler behaves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct ViewportConfig {
    /// Width of the visible area.
    pub(crate) visible_width: f64,
    /// Duration of smooth scrolls.
    pub(crate) smooth_duration: Duration,
}

impl ViewportConfig {
    pub(crate) const DEFAULT_VISIBLE_WIDTH: f64 = 1024.0;

    fn smooth_millis(&self) -> u64 {
        u64::try_from(self.smooth_duration.as_millis()).unwrap_or(u64::MAX)
    }

    /// A viewport over a ruler `content_width` wide.
    pub(crate) fn viewport(&self, content_width: f64) -> ScrollViewport {
        let mut viewport = ScrollViewport::new(self.visible_width, content_width);
        viewport.set_smooth_duration(self.smooth_duration);
        viewport
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            visible_width: Self::DEFAULT_VISIBLE_WIDTH,
            smooth_duration: DEFAULT_SMOOTH_DURATION,
        }
    }
}
