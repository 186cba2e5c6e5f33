//! Logging for flightbook.
//!
//! Logs go to stderr so that tables and match lines on stdout stay clean. At
//! normal verbosity nothing is logged unless something goes wrong; file I/O
//! and validation details appear with `-v`.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How much the binary logs, chosen by `-q` / `-v` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// `-q`: errors only.
    Quiet,
    /// No flags: warnings and errors.
    #[default]
    Normal,
    /// `-v`: file I/O, record counts and schema checks.
    Verbose,
    /// `-vv` and up.
    Trace,
}

impl Verbosity {
    /// Map the CLI flags to a verbosity; `quiet` wins over `verbose`.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// Most detailed level logged.
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive scoping the level to this crate.
    #[must_use]
    pub fn directive(self) -> String {
        format!("flightbook={}", self.level())
    }
}

/// Install the stderr subscriber. `RUST_LOG`, when set, replaces the
/// directive derived from `verbosity`. Later calls are no-ops.
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Capture logs through the test harness.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("flightbook=debug")
        .with_test_writer()
        .try_init();
}
