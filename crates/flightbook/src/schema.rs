//! Schema of a flight file and the advisory validation step.
//!
//! Validation never rejects data by itself: it returns the list of
//! violations and leaves the decision to the caller.

use std::fmt;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::flight::{DESTINATION, FLIGHT_NUMBER, PLANE_TYPE};

/// A single way in which a flight file breaks the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// Zero-based position of the offending record.
    pub index: usize,
    /// Human-readable description.
    pub message: String,
}

impl SchemaViolation {
    fn record(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flight #{}: {}", self.index + 1, self.message)
    }
}

/// JSON schema that each record of the file must satisfy.
#[must_use]
pub fn record_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            DESTINATION: {"type": "string", "minLength": 1},
            FLIGHT_NUMBER: {"type": "string", "minLength": 1},
            PLANE_TYPE: {"type": "string", "minLength": 1}
        },
        "required": [DESTINATION, FLIGHT_NUMBER, PLANE_TYPE]
    })
}

/// Check each record of a flight list against [`record_schema`].
///
/// # Errors
///
/// Returns an internal error only if the built-in schema fails to compile.
pub fn validate_records(records: &[Value]) -> Result<Vec<SchemaViolation>> {
    let schema = record_schema();
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| Error::internal(format!("flight schema does not compile: {e}")))?;

    let violations: Vec<SchemaViolation> = records
        .iter()
        .enumerate()
        .flat_map(|(index, record)| {
            validator
                .iter_errors(record)
                .map(move |err| SchemaViolation::record(index, err.to_string()))
                .collect::<Vec<_>>()
        })
        .collect();

    debug!(
        "{} schema violation(s) in {} flight(s)",
        violations.len(),
        records.len()
    );
    Ok(violations)
}
