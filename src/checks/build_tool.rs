//! npm availability check for the functions workspace.

use crate::report::CheckResult;
use crate::shell::{run_version_command, CommandOutput, ExecError};

use super::{Check, CheckContext};

/// Verifies npm works inside the functions subdirectory.
///
/// Cloud Functions carry their own package tree, so a working npm at the
/// repo root says nothing about the deploy actually building.
pub struct FunctionsNpmCheck;

impl Check for FunctionsNpmCheck {
    fn name(&self) -> &'static str {
        "npm toolchain"
    }

    fn run(&self, ctx: &CheckContext) -> Vec<CheckResult> {
        let dir = ctx.project_root.join(&ctx.config.functions_dir);
        let probe = run_version_command("npm", &["--version"], Some(&dir));
        vec![evaluate(probe, &ctx.config.functions_dir)]
    }
}

/// Any invocation trouble, including a missing subdirectory, is the same
/// failure: npm is not usable where the build needs it.
fn evaluate(probe: Result<CommandOutput, ExecError>, subdir: &str) -> CheckResult {
    let name = format!("npm ({})", subdir);
    match probe {
        Ok(output) if output.success => {
            let version = output.stdout.trim().to_string();
            CheckResult::pass(name).with_version(version)
        }
        _ => CheckResult::fail(name).with_message(format!("npm not available in {}/", subdir)),
    }
}
