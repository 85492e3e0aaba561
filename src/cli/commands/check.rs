//! Check command implementation.
//!
//! Runs the full battery against the project root, renders the report,
//! and maps the aggregate outcome to the process exit code.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::checks::{battery, CheckContext};
use crate::cli::args::CheckArgs;
use crate::config::load_config;
use crate::error::{CairnError, Result};
use crate::report::{json, render, ValidationRun};
use crate::shell::is_ci;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Run every check in order, collecting all results.
    ///
    /// Checks are independent; an earlier failure never skips a later
    /// probe, and every result is kept.
    fn run_battery(&self, ctx: &CheckContext) -> ValidationRun {
        let mut run = ValidationRun::new();
        for check in battery() {
            tracing::debug!("running check: {}", check.name());
            run.record_all(check.run(ctx));
        }
        run
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        let config = load_config(&self.project_root)?;
        let ctx = CheckContext {
            project_root: self.project_root.clone(),
            ci: self.args.ci || is_ci(),
            config,
        };

        let run = self.run_battery(&ctx);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if self.args.json {
            json::write_json(&run, &mut out).map_err(|e| CairnError::Io(e.into()))?;
            writeln!(out)?;
        } else {
            render::render(&run, &mut out)?;
        }

        Ok(if run.has_errors() {
            CommandResult::failure(run.exit_code())
        } else {
            CommandResult::success()
        })
    }
}
