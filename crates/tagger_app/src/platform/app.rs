use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use tagger_core::{update, AppState, Msg};
use tagger_logging::{tagger_info, tagger_warn};

use super::config::{self, ShellConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{self, Command, HELP};
use super::ui::render;

pub fn run_app() -> anyhow::Result<()> {
    let (config, config_error) = match config::load(Path::new(CONFIG_FILENAME)) {
        Ok(config) => (config, None),
        Err(err) => (ShellConfig::default(), Some(err)),
    };
    logging::initialize(config.log_destination, config.log_level.into());
    if let Some(err) = config_error {
        tagger_warn!("Using default settings: {}", err);
    }
    tagger_info!("tagger_app starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(config, stdout.lock()).run(stdin.lock())
}

/// Line-oriented front end: each input line is one user action.
struct Shell<W> {
    config: ShellConfig,
    state: AppState,
    effects: EffectRunner,
    out: W,
}

impl<W: Write> Shell<W> {
    fn new(config: ShellConfig, out: W) -> Self {
        Self {
            config,
            state: AppState::new(),
            effects: EffectRunner::new(),
            out,
        }
    }

    fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
        writeln!(self.out, "Tag Extractor. Type `help` for commands.")?;
        self.prompt()?;
        for line in input.lines() {
            let line = line.context("failed to read command")?;
            match commands::parse(&line) {
                Command::Quit => break,
                Command::Empty => {}
                Command::Help => writeln!(self.out, "{HELP}")?,
                Command::MissingPath(name) => writeln!(self.out, "`{name}` needs a file path.")?,
                Command::Unknown(name) => {
                    writeln!(self.out, "Unknown command `{name}`. Type `help`.")?
                }
                Command::Msg(msg) => self.dispatch_msg(msg)?,
            }
            self.prompt()?;
        }
        tagger_info!("tagger_app exiting");
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", self.config.prompt)?;
        self.out.flush()
    }

    /// Feed `msg` through `update`, running effects until no follow-up
    /// messages remain, then redraw once if anything changed.
    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        let show_listing =
            self.config.show_listing_after_scan || matches!(msg, Msg::ShowRequested);

        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            inbox.extend(self.effects.run(effects));
        }

        if self.state.consume_dirty() {
            let view = self.state.view();
            render::render(&mut self.out, &view, show_listing)?;
        }
        Ok(())
    }
}
