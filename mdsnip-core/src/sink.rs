//! Output sinks: the system clipboard and plain echo.

use crate::error::SnipError;
use crate::process::pipe_to;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};
use which::which;

/// Destination for the final command.
pub trait Sink {
    fn write(&mut self, text: &str) -> Result<(), SnipError>;
}

/// Writes the command, terminated by exactly one newline.
pub struct EchoSink<W> {
    output: W,
}

impl<W: Write> EchoSink<W> {
    pub fn new(output: W) -> Self {
        EchoSink { output }
    }
}

impl EchoSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Sink for EchoSink<W> {
    fn write(&mut self, text: &str) -> Result<(), SnipError> {
        let result = if text.ends_with('\n') {
            write!(self.output, "{text}")
        } else {
            writeln!(self.output, "{text}")
        };
        result
            .and_then(|_| self.output.flush())
            .map_err(|e| SnipError::Io(format!("Failed to write output: {e}")))
    }
}

/// One clipboard tool invocation that reads the text on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    pub fn new(program: PathBuf, args: &[&str]) -> Self {
        ClipboardCommand {
            program,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Copies text into every selection buffer a clipboard tool on `PATH` can reach.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSink {
    commands: Vec<ClipboardCommand>,
}

impl ClipboardSink {
    pub fn new(commands: Vec<ClipboardCommand>) -> Self {
        ClipboardSink { commands }
    }

    /// Locate clipboard tools.
    ///
    /// Preference: `xclip` (primary, secondary and clipboard selections), then `wl-copy`
    /// (regular and primary), then `pbcopy`.
    pub fn detect() -> Self {
        let commands = if let Ok(xclip) = which("xclip") {
            ["primary", "secondary", "clipboard"]
                .into_iter()
                .map(|selection| ClipboardCommand::new(xclip.clone(), &["-selection", selection]))
                .collect()
        } else if let Ok(wl_copy) = which("wl-copy") {
            vec![
                ClipboardCommand::new(wl_copy.clone(), &[]),
                ClipboardCommand::new(wl_copy, &["--primary"]),
            ]
        } else if let Ok(pbcopy) = which("pbcopy") {
            vec![ClipboardCommand::new(pbcopy, &[])]
        } else {
            Vec::new()
        };

        debug!(tools = commands.len(), "clipboard detection finished");
        Self::new(commands)
    }
}

impl Sink for ClipboardSink {
    fn write(&mut self, text: &str) -> Result<(), SnipError> {
        if self.commands.is_empty() {
            warn!("no clipboard tool found (tried xclip, wl-copy, pbcopy); skipping clipboard");
            return Ok(());
        }

        // A tool that cannot reach its display (no DISPLAY over ssh, say) is skipped like a
        // missing one; the command still reaches the other sinks.
        let mut copied = 0;
        for command in &self.commands {
            let tool = command.program.display();
            match pipe_to(&command.program, &command.args, text) {
                Ok(status) if status.success() => copied += 1,
                Ok(status) => {
                    warn!(%tool, args = ?command.args, %status, "clipboard tool failed; skipping")
                }
                Err(err) => {
                    warn!(%tool, args = ?command.args, error = %err, "clipboard tool failed; skipping")
                }
            }
        }
        debug!(copied, attempted = self.commands.len(), "clipboard write finished");
        Ok(())
    }
}
