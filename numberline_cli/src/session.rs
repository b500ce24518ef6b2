// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive loop: edit commands in, frames and scroll requests out.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use numberline_core::input::{FieldId, RawInput};
use numberline_core::ruler::RulerConfig;
use numberline_core::transcript::Transcript;
use numberline_scene::{Frame, RenderOptions, render_transcript};
use numberline_scroll::{CenteringObserver, ScrollBehavior, ScrollRequest, ScrollViewport};

use crate::args::ViewportConfig;
use crate::report;

/// One line of interactive input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Edit {
    /// Replace a field's whole text.
    Set(FieldId, String),
    /// Type characters one keystroke at a time.
    Type(FieldId, String),
    /// Delete the last character of a field.
    Backspace(FieldId),
    /// Empty both fields.
    Clear,
    /// End the session.
    Quit,
}

/// A line that is not a known command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct UnknownCommand(pub(crate) String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown command {:?} (expected start/delta <text>, type start|delta <chars>, backspace start|delta, clear, quit)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCommand {}

fn field_id(word: &str) -> Option<FieldId> {
    match word {
        "start" => Some(FieldId::Start),
        "delta" => Some(FieldId::Delta),
        _ => None,
    }
}

impl Edit {
    /// Parses one command line. Blank lines parse to `None`.
    pub(crate) fn parse(line: &str) -> Result<Option<Self>, UnknownCommand> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        let unknown = || UnknownCommand(line.to_string());
        let edit = match head {
            "clear" if rest.is_empty() => Self::Clear,
            "quit" | "exit" if rest.is_empty() => Self::Quit,
            "backspace" => Self::Backspace(field_id(rest).ok_or_else(unknown)?),
            "type" => {
                let (field, chars) = rest.split_once(' ').unwrap_or((rest, ""));
                Self::Type(field_id(field).ok_or_else(unknown)?, chars.trim().to_string())
            }
            _ => match field_id(head) {
                Some(id) => Self::Set(id, rest.to_string()),
                None => return Err(unknown()),
            },
        };
        Ok(Some(edit))
    }
}

/// State carried across interactive edits.
#[derive(Debug)]
pub(crate) struct Session {
    config: RulerConfig,
    options: RenderOptions,
    raw: RawInput,
    observer: CenteringObserver,
    viewport: ScrollViewport,
    svg: Option<PathBuf>,
}

/// What one applied edit produced.
#[derive(Debug)]
pub(crate) struct Step {
    pub(crate) frame: Frame,
    pub(crate) transcript: Transcript,
    pub(crate) request: Option<ScrollRequest>,
}

impl Session {
    pub(crate) fn new(
        config: RulerConfig,
        viewport: ViewportConfig,
        options: RenderOptions,
        svg: Option<PathBuf>,
    ) -> Self {
        Self {
            viewport: viewport.viewport(config.canvas_width()),
            config,
            options,
            raw: RawInput::new(),
            observer: CenteringObserver::new(),
            svg,
        }
    }

    /// Renders the current inputs and lets the observer decide on a scroll.
    pub(crate) fn render(&mut self) -> anyhow::Result<Step> {
        let transcript = Transcript::derive(&self.config, &self.raw);
        let frame = render_transcript(&self.config, &self.raw, &transcript, &self.options);
        let request =
            self.observer
                .observe_and_apply(&self.config, &transcript.inputs, &mut self.viewport);
        if let Some(path) = &self.svg {
            report::write_svg(path, &frame)?;
        }
        Ok(Step {
            frame,
            transcript,
            request,
        })
    }

    /// Applies an edit. Returns `true` if either field changed.
    ///
    /// Rejected keystrokes leave the field alone.
    pub(crate) fn apply(&mut self, edit: &Edit) -> bool {
        match edit {
            Edit::Set(id, text) => self.edit(*id, text),
            Edit::Type(id, chars) => {
                let mut changed = false;
                for c in chars.chars() {
                    match self.raw.field_mut(*id).push_char(c) {
                        Ok(edited) => changed |= edited,
                        Err(err) => log::debug!("{err}"),
                    }
                }
                changed
            }
            Edit::Backspace(id) => self.raw.field_mut(*id).backspace(),
            Edit::Clear => {
                let start = self.raw.start.clear();
                let delta = self.raw.delta.clear();
                start || delta
            }
            Edit::Quit => false,
        }
    }

    fn edit(&mut self, id: FieldId, text: &str) -> bool {
        match self.raw.edit(id, text) {
            Ok(changed) => changed,
            Err(err) => {
                log::debug!("{err}");
                false
            }
        }
    }

    pub(crate) fn viewport(&self) -> &ScrollViewport {
        &self.viewport
    }

    /// Reads commands until `quit` or end of input, printing a frame after
    /// the mount and after every change.
    pub(crate) fn run(&mut self, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
        let step = self.render()?;
        self.print_step(&mut out, &step)?;

        for line in input.lines() {
            let line = line.context("failed to read command")?;
            let edit = match Edit::parse(&line) {
                Ok(Some(edit)) => edit,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            };
            if edit == Edit::Quit {
                break;
            }
            if !self.apply(&edit) {
                writeln!(out, "(no change)")?;
                continue;
            }
            let step = self.render()?;
            self.print_step(&mut out, &step)?;
        }
        Ok(())
    }

    fn print_step(&mut self, out: &mut impl Write, step: &Step) -> io::Result<()> {
        report::print_frame(out, &step.frame)?;
        match &step.request {
            Some(request) => writeln!(
                out,
                "scroll: {} to offset {} (centered on x={}, {:?})",
                match request.behavior {
                    ScrollBehavior::Instant => "instant",
                    ScrollBehavior::Smooth => "smooth",
                },
                report::fmt_px(self.viewport.target_offset()),
                report::fmt_px(request.target.x),
                request.target.rule,
            )?,
            None => writeln!(out, "scroll: none")?,
        }
        // The terminal has no frame clock; settle the animation so the next
        // smooth scroll starts from where this one lands.
        self.viewport.finish();
        writeln!(out)
    }
}
