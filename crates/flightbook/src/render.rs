//! Console output for flight commands.
//!
//! All functions write to any [`Write`] so they can be checked against a
//! buffer in tests.

use std::io::{self, Write};

use crate::flight::{Flight, FlightRecord, DESTINATION, FLIGHT_NUMBER, PLANE_TYPE};
use crate::schema::SchemaViolation;

const NUMBER_WIDTH: usize = 4;
const DESTINATION_WIDTH: usize = 30;
const FLIGHT_NUMBER_WIDTH: usize = 20;
const PLANE_TYPE_WIDTH: usize = 20;

/// Printed after a successful `add`.
pub const ADDED: &str = "Flight added successfully.";

/// Printed by `display` for an empty store.
pub const NO_FLIGHTS: &str = "No flights available.";

fn border() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(NUMBER_WIDTH),
        "-".repeat(DESTINATION_WIDTH),
        "-".repeat(FLIGHT_NUMBER_WIDTH),
        "-".repeat(PLANE_TYPE_WIDTH)
    )
}

/// Write all flights as a numbered table, or a notice if there are none.
///
/// Missing fields are shown as blanks.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_table<W: Write>(out: &mut W, flights: &[FlightRecord]) -> io::Result<()> {
    if flights.is_empty() {
        return writeln!(out, "{NO_FLIGHTS}");
    }

    let line = border();
    writeln!(out, "{line}")?;
    writeln!(
        out,
        "| {:^NUMBER_WIDTH$} | {:^DESTINATION_WIDTH$} | {:^FLIGHT_NUMBER_WIDTH$} | {:^PLANE_TYPE_WIDTH$} |",
        "No", "Destination", "Flight Number", "Plane Type"
    )?;
    writeln!(out, "{line}")?;

    for (idx, flight) in flights.iter().enumerate() {
        writeln!(
            out,
            "| {:>NUMBER_WIDTH$} | {:<DESTINATION_WIDTH$} | {:<FLIGHT_NUMBER_WIDTH$} | {:>PLANE_TYPE_WIDTH$} |",
            idx + 1,
            flight.field_or_default(DESTINATION),
            flight.field_or_default(FLIGHT_NUMBER),
            flight.field_or_default(PLANE_TYPE)
        )?;
    }
    Ok(())
}

/// Write one line per match, or a notice naming `plane_type` if none.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_matches<W: Write>(out: &mut W, plane_type: &str, found: &[Flight]) -> io::Result<()> {
    if found.is_empty() {
        return writeln!(out, "No flights found for plane type '{plane_type}'.");
    }
    for flight in found {
        writeln!(out, "{flight}")?;
    }
    Ok(())
}

/// Write the schema diagnostic block. Writes nothing if `violations` is empty.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_violations<W: Write>(out: &mut W, violations: &[SchemaViolation]) -> io::Result<()> {
    if violations.is_empty() {
        return Ok(());
    }
    writeln!(out, ">>> Error:")?;
    for violation in violations {
        writeln!(out, "{violation}")?;
    }
    Ok(())
}
