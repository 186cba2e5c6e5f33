//! Interactive prompts for options left off the command line.

use std::io::{self, BufRead, Write};

use console::Term;
use dialoguer::Input;
use tracing::debug;

use crate::error::{Error, Result};

/// Source of answers for omitted options.
pub trait Prompter {
    /// Ask for the option `name`, showing `label` to the user.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be obtained.
    fn ask(&mut self, name: &'static str, label: &str) -> Result<String>;
}

/// Prompts with `dialoguer` on a terminal, or reads one line per option from
/// stdin when input is piped. Empty answers are re-asked either way.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, name: &'static str, label: &str) -> Result<String> {
        if Term::stderr().is_term() {
            debug!("Prompting for {} on the terminal", name);
            let answer: String = Input::new().with_prompt(label).interact_text()?;
            return Ok(answer);
        }

        debug!("Reading {} from stdin", name);
        let stdin = io::stdin();
        read_answer(&mut stdin.lock(), &mut io::stderr(), label)
    }
}

/// Read the first non-empty line from `input`, writing `label: ` to `echo`
/// before each attempt.
///
/// # Errors
///
/// Returns a prompt error if `input` ends before a non-empty line.
pub fn read_answer<R: BufRead, W: Write>(input: &mut R, echo: &mut W, label: &str) -> Result<String> {
    let mut line = String::new();
    loop {
        write!(echo, "{label}: ")?;
        echo.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(echo)?;
            return Err(Error::prompt(format!("no answer for '{label}' before end of input")));
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
    }
}

/// Refuses to prompt; every omitted option is an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPrompt;

impl Prompter for NoPrompt {
    fn ask(&mut self, name: &'static str, _label: &str) -> Result<String> {
        Err(Error::MissingArgument { name })
    }
}

/// Use `given` if present, otherwise ask `prompter`.
///
/// # Errors
///
/// Returns the prompter's error if it has to ask and fails.
pub fn resolve(
    given: Option<String>,
    name: &'static str,
    label: &str,
    prompter: &mut dyn Prompter,
) -> Result<String> {
    match given {
        Some(value) => Ok(value),
        None => prompter.ask(name, label),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[derive(Debug, Default)]
    struct Recording {
        asked: Vec<String>,
    }

    impl Prompter for Recording {
        fn ask(&mut self, _name: &'static str, label: &str) -> Result<String> {
            self.asked.push(label.to_string());
            Ok(format!("answer to {label}"))
        }
    }

    #[test]
    fn test_resolve_uses_given_value() {
        let mut prompter = Recording::default();
        let value = resolve(Some("Paris".into()), "destination", "Destination", &mut prompter).unwrap();

        assert_eq!(value, "Paris");
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_resolve_prompts_when_missing() {
        let mut prompter = Recording::default();
        let value = resolve(None, "destination", "Destination", &mut prompter).unwrap();

        assert_eq!(value, "answer to Destination");
        assert_eq!(prompter.asked, vec!["Destination"]);
    }

    #[test]
    fn test_no_prompt_reports_option_name() {
        let err = resolve(None, "plane-type", "Type of plane", &mut NoPrompt).unwrap_err();
        assert!(matches!(err, Error::MissingArgument { name: "plane-type" }));
    }

    #[test]
    fn test_read_answer_takes_lines_in_order() {
        let mut input = Cursor::new("Paris\r\nAF100\n");
        let mut echo = Vec::new();

        assert_eq!(read_answer(&mut input, &mut echo, "Destination").unwrap(), "Paris");
        assert_eq!(read_answer(&mut input, &mut echo, "Flight number").unwrap(), "AF100");
        assert_eq!(
            String::from_utf8(echo).unwrap(),
            "Destination: Flight number: "
        );
    }

    #[test]
    fn test_read_answer_skips_blank_lines() {
        let mut input = Cursor::new("\n\nBoeing 777\n");
        let mut echo = Vec::new();

        let answer = read_answer(&mut input, &mut echo, "Type of plane").unwrap();
        assert_eq!(answer, "Boeing 777");
        assert_eq!(String::from_utf8(echo).unwrap().matches("Type of plane: ").count(), 3);
    }

    #[test]
    fn test_read_answer_without_trailing_newline() {
        let mut input = Cursor::new("Rome");
        assert_eq!(read_answer(&mut input, &mut Vec::new(), "Destination").unwrap(), "Rome");
    }

    #[test]
    fn test_read_answer_end_of_input() {
        let mut input = Cursor::new("");
        let err = read_answer(&mut input, &mut Vec::new(), "Flight number").unwrap_err();

        assert!(matches!(err, Error::Prompt(_)));
        assert!(err.to_string().contains("Flight number"));
    }
}
