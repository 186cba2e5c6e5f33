//! Flight records.
//!
//! [`Flight`] is the typed form used when creating entries. [`FlightRecord`]
//! is an entry exactly as it was read from disk, which may not satisfy the
//! schema; callers choose between required and defaulted field lookups.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Field holding the flight's destination.
pub const DESTINATION: &str = "destination";

/// Field holding the flight number.
pub const FLIGHT_NUMBER: &str = "flight_number";

/// Field holding the plane type.
pub const PLANE_TYPE: &str = "plane_type";

/// A well-formed flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Where the flight goes.
    pub destination: String,
    /// Flight number, e.g. `AF100`.
    pub flight_number: String,
    /// Type of plane, e.g. `Boeing 777`.
    pub plane_type: String,
}

impl Flight {
    /// Create a new flight.
    #[must_use]
    pub fn new(
        destination: impl Into<String>,
        flight_number: impl Into<String>,
        plane_type: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            flight_number: flight_number.into(),
            plane_type: plane_type.into(),
        }
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Destination: {}, Flight number: {}, Plane type: {}",
            self.destination, self.flight_number, self.plane_type
        )
    }
}

/// A flight entry as stored in the file, before any schema guarantees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightRecord(Value);

impl FlightRecord {
    /// Wrap a raw JSON value.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// The raw JSON value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Look up a field, if this record is an object that has it.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(name))
    }

    /// Render a field, substituting the empty string when it is missing.
    #[must_use]
    pub fn field_or_default(&self, name: &str) -> String {
        self.field(name).map(render_value).unwrap_or_default()
    }

    /// Render a field that must be present.
    ///
    /// `index` is the record's zero-based position, used in the error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if the field is absent.
    pub fn required_field(&self, index: usize, name: &'static str) -> Result<String> {
        self.field(name)
            .map(render_value)
            .ok_or_else(|| Error::missing_field(index, name))
    }

    /// Whether the plane type is exactly `plane_type`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if the record has no plane type.
    pub fn has_plane_type(&self, index: usize, plane_type: &str) -> Result<bool> {
        match self.field(PLANE_TYPE) {
            Some(Value::String(s)) => Ok(s == plane_type),
            Some(_) => Ok(false),
            None => Err(Error::missing_field(index, PLANE_TYPE)),
        }
    }

    /// Convert to a typed flight, if the record is well-formed.
    #[must_use]
    pub fn to_flight(&self) -> Option<Flight> {
        serde_json::from_value(self.0.clone()).ok()
    }
}

impl From<Flight> for FlightRecord {
    fn from(flight: Flight) -> Self {
        let mut map = serde_json::Map::new();
        map.insert(DESTINATION.to_string(), Value::String(flight.destination));
        map.insert(FLIGHT_NUMBER.to_string(), Value::String(flight.flight_number));
        map.insert(PLANE_TYPE.to_string(), Value::String(flight.plane_type));
        Self(Value::Object(map))
    }
}

/// Strings render bare; anything else renders as its JSON text.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
