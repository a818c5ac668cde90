//! Blocking helpers for the external programs mdsnip talks to (selector, prompt, clipboard).

use crate::error::SnipError;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::process::{ChildStdin, Command, ExitStatus, Output, Stdio};
use std::thread::{self, JoinHandle};
use tracing::trace;

/// Run `program` with `args`, feed `input` on stdin and collect stdout.
///
/// stderr is inherited: interactive selectors draw their UI on the terminal through it.
pub(crate) fn run_with_input<P, A, S>(program: P, args: A, input: &str) -> Result<Output, SnipError>
where
    P: AsRef<OsStr>,
    A: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    trace!(program = ?program, "spawning");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| {
            SnipError::Io(format!(
                "Failed to launch '{}': {e}",
                program.to_string_lossy()
            ))
        })?;

    // Fed from its own thread: a program may emit output before it has read all of its input.
    let writer = child.stdin.take().map(|stdin| {
        let input = input.to_owned();
        thread::spawn(move || feed(stdin, &input))
    });

    let output = child.wait_with_output().map_err(|e| {
        SnipError::Io(format!(
            "Failed to read from '{}': {e}",
            program.to_string_lossy()
        ))
    })?;

    if let Some(writer) = writer {
        join_writer(writer, program)?;
    }
    Ok(output)
}

/// Run `program` with `args` and `input` on stdin, ignoring its output.
///
/// Only the exit status of the direct child is awaited. Clipboard tools fork a daemon that holds
/// the selection, so stdout and stderr are never piped here.
pub(crate) fn pipe_to<P, A, S>(program: P, args: A, input: &str) -> Result<ExitStatus, SnipError>
where
    P: AsRef<OsStr>,
    A: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    trace!(program = ?program, "spawning detached");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            SnipError::Io(format!(
                "Failed to launch '{}': {e}",
                program.to_string_lossy()
            ))
        })?;

    if let Some(stdin) = child.stdin.take() {
        feed(stdin, input).map_err(|e| {
            SnipError::Io(format!(
                "Failed to write to '{}': {e}",
                program.to_string_lossy()
            ))
        })?;
    }

    child.wait().map_err(|e| {
        SnipError::Io(format!(
            "Failed to wait for '{}': {e}",
            program.to_string_lossy()
        ))
    })
}

/// Write `input` and close the pipe. A program may exit before reading everything, so a broken
/// pipe is not an error.
fn feed(mut stdin: ChildStdin, input: &str) -> io::Result<()> {
    match stdin.write_all(input.as_bytes()) {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
        _ => Ok(()),
    }
}

fn join_writer(writer: JoinHandle<io::Result<()>>, program: &OsStr) -> Result<(), SnipError> {
    let program = program.to_string_lossy();
    match writer.join() {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(SnipError::Io(format!("Failed to write to '{program}': {e}"))),
        Err(_) => Err(SnipError::Io(format!("Input writer for '{program}' panicked"))),
    }
}

/// First line of a program's stdout without its line terminator.
pub(crate) fn first_line(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    text.lines().next().unwrap_or_default().to_string()
}
