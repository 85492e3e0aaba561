//! One-shot external command execution.
//!
//! Probes treat process failure as a value: a spawn error comes back as an
//! [`ExecError`], a nonzero exit comes back as a [`CommandOutput`] with
//! `success == false`. Checks convert either case into a `CheckResult`
//! instead of propagating.

use std::io;
use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Captured output of a completed command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether the command exited with code 0.
    pub success: bool,
}

/// The command could not be invoked at all (not installed, not on PATH,
/// or the working directory does not exist).
#[derive(Debug, Error)]
#[error("failed to run {command}: {source}")]
pub struct ExecError {
    /// The full command line that failed to spawn.
    pub command: String,

    #[source]
    pub source: io::Error,
}

/// Run `program` with `args` and capture its output.
///
/// `cwd` scopes the command to a subdirectory of the project; a missing
/// directory surfaces as an [`ExecError`] like any other spawn failure.
pub fn run_version_command(
    program: &str,
    args: &[&str],
    cwd: Option<&Path>,
) -> Result<CommandOutput, ExecError> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().map_err(|source| ExecError {
        command: format!("{} {}", program, args.join(" ")),
        source,
    })?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code(),
        success: output.status.success(),
    })
}
