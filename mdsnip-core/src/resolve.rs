//! Value resolution
//!
//! Asks the user for a value per placeholder, one at a time, in the order the scanner reported
//! them. Two backends exist: a line prompt on the terminal and a popup prompt (`rofi -dmenu`).

use crate::error::SnipError;
use crate::materialize::AssignedValues;
use crate::process::{first_line, run_with_input};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;

/// Selector program name that switches value prompts to the popup backend.
pub const POPUP_PROGRAM: &str = "rofi";

/// Moves the cursor to the previous line and erases it.
const CLEAR_PREVIOUS_LINE: &str = "\x1b[1A\x1b[2K";

/// Produces a value for every requested name.
pub trait Resolver {
    fn resolve(&mut self, names: &[String]) -> Result<AssignedValues, SnipError>;
}

/// Prompts `name: ` on `output` and reads one line per name from `input`.
///
/// The prompt line is erased after each answer. End of input yields an empty value.
pub struct TerminalResolver<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalResolver<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalResolver { input, output }
    }

    fn prompt(&mut self, name: &str) -> Result<String, SnipError> {
        let io_err = |e: std::io::Error| SnipError::Io(format!("Prompt for '{name}' failed: {e}"));

        write!(self.output, "{name}: ").map_err(io_err)?;
        self.output.flush().map_err(io_err)?;

        let mut line = String::new();
        self.input.read_line(&mut line).map_err(io_err)?;

        write!(self.output, "{CLEAR_PREVIOUS_LINE}").map_err(io_err)?;
        self.output.flush().map_err(io_err)?;

        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

impl<R: BufRead, W: Write> Resolver for TerminalResolver<R, W> {
    fn resolve(&mut self, names: &[String]) -> Result<AssignedValues, SnipError> {
        let mut values = AssignedValues::new();
        for name in names {
            let value = self.prompt(name)?;
            values.insert(name.as_str(), value);
        }
        Ok(values)
    }
}

/// Opens one popup prompt per name via `<program> -dmenu -p <name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupResolver {
    program: String,
}

impl PopupResolver {
    pub fn new(program: impl Into<String>) -> Self {
        PopupResolver {
            program: program.into(),
        }
    }
}

impl Default for PopupResolver {
    fn default() -> Self {
        Self::new(POPUP_PROGRAM)
    }
}

impl Resolver for PopupResolver {
    fn resolve(&mut self, names: &[String]) -> Result<AssignedValues, SnipError> {
        let mut values = AssignedValues::new();
        for name in names {
            let output = run_with_input(&self.program, ["-dmenu", "-p", name.as_str()], "")?;
            if !output.status.success() {
                debug!(name = %name, status = %output.status, "popup prompt dismissed");
                return Err(SnipError::Cancelled);
            }
            values.insert(name.as_str(), first_line(&output.stdout));
        }
        Ok(values)
    }
}

/// Whether `selector` names the popup program, by file name so `/usr/bin/rofi` also counts.
pub fn uses_popup(selector: &str) -> bool {
    Path::new(selector)
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == POPUP_PROGRAM)
}

/// Pick the value prompt matching the configured selector.
pub fn resolver_for(selector: &str) -> Box<dyn Resolver> {
    if uses_popup(selector) {
        Box::new(PopupResolver::new(selector))
    } else {
        Box::new(TerminalResolver::new(
            std::io::stdin().lock(),
            std::io::stderr(),
        ))
    }
}
