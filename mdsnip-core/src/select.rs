//! Selection surface
//!
//! Labels go to an external picker one per line on stdin; the chosen label comes back as the
//! first line of its stdout.

use crate::error::SnipError;
use crate::process::{first_line, run_with_input};
use tracing::debug;

/// Program used when none is configured.
pub const DEFAULT_SELECTOR: &str = "fzf";

/// Picks one label out of a candidate list.
pub trait Selector {
    /// Returns the chosen label, or [`SnipError::Cancelled`] if the user backed out.
    fn select(&self, labels: &[String]) -> Result<String, SnipError>;
}

/// Selector backed by an external interactive program such as `fzf` or `rofi -dmenu`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSelector {
    program: String,
    args: Vec<String>,
}

impl ProcessSelector {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        ProcessSelector {
            program: program.into(),
            args,
        }
    }

    /// Build a selector from a program name and a single argument string.
    ///
    /// The string is split with shell quoting rules, so `--prompt "pick one> "` stays two
    /// arguments.
    pub fn from_arg_string(program: impl Into<String>, args: &str) -> Result<Self, SnipError> {
        let args = shlex::split(args).ok_or_else(|| {
            SnipError::Config(format!("Unbalanced quotes in selector arguments: {args}"))
        })?;
        Ok(Self::new(program, args))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for ProcessSelector {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTOR, Vec::new())
    }
}

impl Selector for ProcessSelector {
    fn select(&self, labels: &[String]) -> Result<String, SnipError> {
        let mut input = labels.join("\n");
        input.push('\n');

        let output = run_with_input(&self.program, &self.args, &input)?;
        if !output.status.success() {
            debug!(program = %self.program, status = %output.status, "selector exited without a choice");
            return Err(SnipError::Cancelled);
        }

        let choice = first_line(&output.stdout);
        if choice.is_empty() {
            return Err(SnipError::Cancelled);
        }

        debug!(choice = %choice, "selected");
        Ok(choice)
    }
}
