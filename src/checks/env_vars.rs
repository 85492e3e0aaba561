//! CI secret presence checks.

use std::env;

use crate::report::CheckResult;

use super::{Check, CheckContext};

const NAME: &str = "CI environment variables";

/// Reports which expected CI variables are defined.
///
/// Missing variables warn rather than fail: not every pipeline job needs
/// every secret. Outside CI the whole check collapses to a single skip
/// notice.
pub struct CiEnvVarsCheck;

impl Check for CiEnvVarsCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn run(&self, ctx: &CheckContext) -> Vec<CheckResult> {
        check_vars(ctx.ci, &ctx.config.ci_env_vars, |name| {
            env::var_os(name).is_some()
        })
    }
}

/// Presence means defined; an empty value still counts as set.
fn check_vars(ci: bool, names: &[String], is_set: impl Fn(&str) -> bool) -> Vec<CheckResult> {
    if !ci {
        return vec![CheckResult::info(NAME).with_message("skipped (not running in CI)")];
    }

    names
        .iter()
        .map(|name| {
            let entry = format!("Env: {}", name);
            if is_set(name) {
                CheckResult::pass(entry)
            } else {
                CheckResult::warn(entry).with_message("not set")
            }
        })
        .collect()
}
