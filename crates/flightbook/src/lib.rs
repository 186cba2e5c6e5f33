//! `flightbook` - Keep a small list of flights in a JSON file
//!
//! This library provides the flight store, its schema validation and the
//! command layer behind the `flightbook` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod flight;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod schema;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use flight::{Flight, FlightRecord};
pub use logging::init_logging;
pub use schema::SchemaViolation;
pub use store::{FlightStore, Loaded};
