//! Node.js runtime version check.

use crate::report::CheckResult;
use crate::shell::{run_version_command, CommandOutput, ExecError};
use crate::version::parse_major;

use super::{Check, CheckContext};

const NAME: &str = "Node.js runtime";

/// Verifies the Node.js runtime meets the minimum major version.
pub struct NodeVersionCheck;

impl Check for NodeVersionCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn run(&self, ctx: &CheckContext) -> Vec<CheckResult> {
        let probe = run_version_command("node", &["--version"], None);
        vec![evaluate(probe, ctx.config.node_min_major)]
    }
}

/// Turn a `node --version` probe into a result.
///
/// Anything short of parsable output with a high enough major is a
/// failure; parse trouble gets the generic detection message rather than
/// a partial version.
fn evaluate(probe: Result<CommandOutput, ExecError>, min_major: u32) -> CheckResult {
    let output = match probe {
        Ok(output) if output.success => output,
        _ => return could_not_detect(),
    };

    let version = output.stdout.trim().to_string();
    match parse_major(&version) {
        Some(major) if major >= min_major => CheckResult::pass(NAME).with_version(version),
        Some(_) => CheckResult::fail(NAME)
            .with_version(version)
            .with_message(format!("Version {}+ required", min_major)),
        None => could_not_detect(),
    }
}

fn could_not_detect() -> CheckResult {
    CheckResult::fail(NAME).with_message("could not detect version")
}
