//! CLI command definitions.
//!
//! Options that a command needs but the user left off are `None` here and
//! get resolved by prompting in [`crate::app`].

use std::path::PathBuf;

use clap::Args;

/// Arguments of `add`.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Flight file (defaults to store.default_file)
    #[arg(value_name = "FILENAME")]
    pub file: Option<PathBuf>,

    /// The destination of the flight
    #[arg(short, long)]
    pub destination: Option<String>,

    /// The flight number
    #[arg(short, long)]
    pub number: Option<String>,

    /// The type of plane
    #[arg(short = 't', long, alias = "plane_type")]
    pub plane_type: Option<String>,
}

/// Arguments of `display`.
#[derive(Debug, Args)]
pub struct DisplayCommand {
    /// Flight file (defaults to store.default_file)
    #[arg(value_name = "FILENAME")]
    pub file: Option<PathBuf>,
}

/// Arguments of `find`.
#[derive(Debug, Args)]
pub struct FindCommand {
    /// Flight file (defaults to store.default_file)
    #[arg(value_name = "FILENAME")]
    pub file: Option<PathBuf>,

    /// The type of plane to search for
    #[arg(short = 'f', long, alias = "plane_type")]
    pub plane_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_command_debug() {
        let cmd = AddCommand {
            file: Some(PathBuf::from("flights.json")),
            destination: Some("Paris".to_string()),
            number: None,
            plane_type: None,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("destination"));
        assert!(debug_str.contains("Paris"));
    }

    #[test]
    fn test_find_command_debug() {
        let cmd = FindCommand {
            file: None,
            plane_type: Some("Boeing 777".to_string()),
        };
        assert!(format!("{cmd:?}").contains("Boeing 777"));
    }
}
