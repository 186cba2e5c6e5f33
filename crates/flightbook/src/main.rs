//! `flightbook` - CLI for managing a JSON list of flights
//!
//! Provides the `add`, `display` and `find` commands over a flight file.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use flightbook::cli::Cli;
use flightbook::prompt::{NoPrompt, Prompter, TerminalPrompter};
use flightbook::{app, init_logging, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    let mut terminal = TerminalPrompter;
    let mut disabled = NoPrompt;
    let prompter: &mut dyn Prompter = if config.prompt.enabled {
        &mut terminal
    } else {
        &mut disabled
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run(cli.command, &config, prompter, &mut out)?;
    Ok(())
}
