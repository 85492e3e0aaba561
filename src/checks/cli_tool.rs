//! Firebase CLI version check.

use crate::report::CheckResult;
use crate::shell::{run_version_command, CommandOutput, ExecError};
use crate::version::extract_semver;

use super::{Check, CheckContext};

const NAME: &str = "Firebase CLI";
const INSTALL_HINT: &str = "not found on PATH. Install with: npm install -g firebase-tools";

/// Verifies the Firebase CLI is installed and recent enough to deploy.
pub struct FirebaseCliCheck;

impl Check for FirebaseCliCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn run(&self, ctx: &CheckContext) -> Vec<CheckResult> {
        let probe = run_version_command("firebase", &["--version"], None);
        vec![evaluate(probe, ctx.config.firebase_min_major)]
    }
}

/// Turn a `firebase --version` probe into a result.
///
/// Output that carries no `major.minor.patch` triple (dev builds, odd
/// wrappers) is a warning, not a failure; only a missing binary or a
/// too-old major blocks CI.
fn evaluate(probe: Result<CommandOutput, ExecError>, min_major: u32) -> CheckResult {
    let output = match probe {
        Ok(output) => output,
        Err(_) => return CheckResult::fail(NAME).with_message(INSTALL_HINT),
    };

    match extract_semver(&output.stdout) {
        None => CheckResult::warn(NAME).with_message("could not parse version output"),
        Some(version) if version.major < min_major => CheckResult::fail(NAME)
            .with_version(version.to_string())
            .with_message(format!(
                "Firebase CLI {}+ required (found {})",
                min_major, version
            )),
        Some(version) => CheckResult::pass(NAME).with_version(version.to_string()),
    }
}
