//! Command dispatch.
//!
//! Resolves omitted options through a [`Prompter`], runs the store operation
//! and renders its result. The store itself never prompts or prints.

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::cli::{AddCommand, Command, DisplayCommand, FindCommand};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::flight::{Flight, FlightRecord};
use crate::prompt::{self, Prompter};
use crate::render;
use crate::store::{self, FlightStore};

/// Run one command, writing user-facing output to `out`.
///
/// # Errors
///
/// Returns any store, prompt or output error.
pub fn run<W: Write>(
    command: Command,
    config: &Config,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Add(cmd) => add(cmd, config, prompter, out),
        Command::Display(cmd) => display(cmd, config, out),
        Command::Find(cmd) => find(cmd, config, prompter, out),
    }
}

fn open(file: Option<PathBuf>, config: &Config) -> Result<FlightStore> {
    let path = config.flight_file(file)?;
    debug!("Using flight file {}", path.display());
    Ok(FlightStore::new(path).with_pretty(config.store.pretty))
}

/// Load the store and report schema violations, failing on them only in
/// strict mode.
fn load_reported<W: Write>(
    store: &FlightStore,
    config: &Config,
    out: &mut W,
) -> Result<Vec<FlightRecord>> {
    let loaded = store.load()?;
    render::write_violations(out, &loaded.violations)?;
    if config.validation.strict && !loaded.is_valid() {
        return Err(Error::SchemaRejected {
            path: store.path().to_path_buf(),
            count: loaded.violations.len(),
        });
    }
    Ok(loaded.flights)
}

fn add<W: Write>(
    cmd: AddCommand,
    config: &Config,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<()> {
    let store = open(cmd.file, config)?;
    let flight = Flight {
        destination: prompt::resolve(cmd.destination, "destination", "Destination", prompter)?,
        flight_number: prompt::resolve(cmd.number, "number", "Flight number", prompter)?,
        plane_type: prompt::resolve(cmd.plane_type, "plane-type", "Type of plane", prompter)?,
    };

    let flights = load_reported(&store, config, out)?;
    store.append(flights, flight)?;
    writeln!(out, "{}", render::ADDED)?;
    Ok(())
}

fn display<W: Write>(cmd: DisplayCommand, config: &Config, out: &mut W) -> Result<()> {
    let store = open(cmd.file, config)?;
    let flights = load_reported(&store, config, out)?;
    render::write_table(out, &flights)?;
    Ok(())
}

fn find<W: Write>(
    cmd: FindCommand,
    config: &Config,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<()> {
    let store = open(cmd.file, config)?;
    let plane_type = prompt::resolve(cmd.plane_type, "plane-type", "Type of plane", prompter)?;

    let flights = load_reported(&store, config, out)?;
    let found = store::find_matches(&flights, &plane_type)?;
    render::write_matches(out, &plane_type, &found)?;
    Ok(())
}
