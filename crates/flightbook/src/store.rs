//! File-backed flight store.
//!
//! A [`FlightStore`] is one JSON file holding an array of flight records.
//! Every operation is a full read or a full overwrite of that file; there is
//! no locking and no atomic replace.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::flight::{Flight, FlightRecord, DESTINATION, FLIGHT_NUMBER};
use crate::schema::{self, SchemaViolation};

/// Contents of a flight file together with its schema violations.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    /// Records in file order, exactly as parsed.
    pub flights: Vec<FlightRecord>,
    /// Schema violations found while loading. Empty for a valid file.
    pub violations: Vec<SchemaViolation>,
}

impl Loaded {
    /// Whether the file satisfied the schema.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A flight list stored as JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct FlightStore {
    /// Path to the flight file.
    path: PathBuf,
    /// Pretty-print JSON on save.
    pretty: bool,
}

impl FlightStore {
    /// Create a store for the file at `path`. Nothing is read yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: false,
        }
    }

    /// Set whether saved JSON is pretty-printed.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Get the path to the flight file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the flight file.
    ///
    /// Schema violations do not fail the load; they are returned alongside
    /// the records.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or its
    /// top-level value is not an array.
    pub fn load(&self) -> Result<Loaded> {
        debug!("Loading flights from {}", self.path.display());
        let text = std::fs::read_to_string(&self.path).map_err(|source| Error::FileRead {
            path: self.path.clone(),
            source,
        })?;

        let document: Value = serde_json::from_str(&text).map_err(|source| Error::Parse {
            path: self.path.clone(),
            source,
        })?;

        let Value::Array(items) = document else {
            return Err(Error::NotAFlightList {
                path: self.path.clone(),
            });
        };

        let violations = schema::validate_records(&items)?;
        let flights: Vec<FlightRecord> = items.into_iter().map(FlightRecord::from_value).collect();
        debug!("Loaded {} flight(s)", flights.len());
        Ok(Loaded {
            flights,
            violations,
        })
    }

    /// Overwrite the flight file with `flights`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, flights: &[FlightRecord]) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(flights)?
        } else {
            serde_json::to_string(flights)?
        };

        std::fs::write(&self.path, json).map_err(|source| Error::FileWrite {
            path: self.path.clone(),
            source,
        })?;
        debug!("Saved {} flight(s) to {}", flights.len(), self.path.display());
        Ok(())
    }

    /// Append `flight` to already loaded records and save the result.
    ///
    /// Returns the records as written.
    ///
    /// # Errors
    ///
    /// Returns an error if the save fails.
    pub fn append(
        &self,
        mut flights: Vec<FlightRecord>,
        flight: Flight,
    ) -> Result<Vec<FlightRecord>> {
        debug!(
            "Adding flight {} to {}",
            flight.flight_number, flight.destination
        );
        flights.push(FlightRecord::from(flight));
        self.save(&flights)?;
        Ok(flights)
    }

    /// Load the file, append `flight` and save.
    ///
    /// The returned [`Loaded`] holds the records as written and the
    /// violations found in the file before the append.
    ///
    /// # Errors
    ///
    /// Returns an error if the load or the save fails.
    pub fn add(&self, flight: Flight) -> Result<Loaded> {
        let Loaded {
            flights,
            violations,
        } = self.load()?;
        let flights = self.append(flights, flight)?;
        Ok(Loaded {
            flights,
            violations,
        })
    }

    /// Load the file and return the flights whose plane type equals
    /// `plane_type`.
    ///
    /// # Errors
    ///
    /// Returns an error if the load fails or a record lacks a field needed
    /// for matching.
    pub fn find(&self, plane_type: &str) -> Result<Vec<Flight>> {
        find_matches(&self.load()?.flights, plane_type)
    }
}

/// Flights among `flights` whose plane type is exactly `plane_type`, in file
/// order.
///
/// Every record must have a plane type, and matching records must also have
/// a destination and flight number.
///
/// # Errors
///
/// Returns [`Error::MissingField`] for the first record lacking a needed
/// field.
pub fn find_matches(flights: &[FlightRecord], plane_type: &str) -> Result<Vec<Flight>> {
    let mut matched = Vec::new();
    for (index, record) in flights.iter().enumerate() {
        if record.has_plane_type(index, plane_type)? {
            matched.push((index, record));
        }
    }

    let found = matched
        .into_iter()
        .map(|(index, record)| {
            Ok(Flight {
                destination: record.required_field(index, DESTINATION)?,
                flight_number: record.required_field(index, FLIGHT_NUMBER)?,
                plane_type: plane_type.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "{} flight(s) with plane type '{}'",
        found.len(),
        plane_type
    );
    Ok(found)
}
