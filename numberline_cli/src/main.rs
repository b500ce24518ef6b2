// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `numberline`: render signed integer additions as jumps on a number line.
//!
//! - `numberline render --start 3 --delta -5 [--svg out.svg] [--json]`
//! - `numberline interactive [--svg live.svg]`, then type commands such as
//!   `start 3`, `type delta -5`, `backspace delta`, `clear` or `quit`.
//!
//! Set `RUST_LOG=debug` to see rejected keystrokes and scroll decisions.

mod args;
mod report;
mod session;

use std::io::{self, Write as _};

use clap::Parser as _;
use numberline_core::input::FieldId;

use crate::args::{Cli, Command, InteractiveArgs, RenderArgs};
use crate::session::{Edit, Session};

fn main() -> anyhow::Result<()> {
    // Keep logging setup in the binary so the libraries stay unopinionated.
    env_logger::init();

    match Cli::parse().command {
        Command::Render(args) => render(args),
        Command::Interactive(args) => interactive(args),
    }
}

fn render(args: RenderArgs) -> anyhow::Result<()> {
    let config = args.ruler.ruler_config()?;
    let viewport = args.view.viewport_config();
    let mut session = Session::new(config, viewport, args.view.render_options(), args.svg);

    // Fields are filled the same way typing would fill them.
    session.apply(&Edit::Set(FieldId::Start, args.start));
    session.apply(&Edit::Set(FieldId::Delta, args.delta));
    let step = session.render()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        report::print_json(&mut out, &step.transcript)?;
    } else {
        report::print_frame(&mut out, &step.frame)?;
        writeln!(
            out,
            "scroll offset: {} (viewport {} wide, centered on x={})",
            report::fmt_px(session.viewport().offset()),
            report::fmt_px(viewport.visible_width),
            report::fmt_px(step.transcript.target.x),
        )?;
    }
    Ok(())
}

fn interactive(args: InteractiveArgs) -> anyhow::Result<()> {
    let config = args.ruler.ruler_config()?;
    let mut session = Session::new(
        config,
        args.view.viewport_config(),
        args.view.render_options(),
        args.svg,
    );
    session.run(io::stdin().lock(), io::stdout().lock())
}
