//! Build script presence check.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::report::CheckResult;

use super::{Check, CheckContext};

const NAME: &str = "Build script";
const MANIFEST: &str = "package.json";

/// The slice of package.json the check cares about.
#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    scripts: HashMap<String, String>,
}

/// Verifies package.json defines a non-empty build script.
pub struct BuildScriptCheck;

impl Check for BuildScriptCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn run(&self, ctx: &CheckContext) -> Vec<CheckResult> {
        vec![check_manifest(&ctx.project_root, &ctx.config.build_script)]
    }
}

/// An unreadable and an unparsable manifest report the same way; a
/// readable manifest without the script gets its own message.
fn check_manifest(root: &Path, script: &str) -> CheckResult {
    let path = root.join(MANIFEST);
    let manifest: PackageManifest = match fs::read_to_string(&path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
    {
        Some(manifest) => manifest,
        None => {
            return CheckResult::fail(NAME).with_message(format!("could not read {}", MANIFEST))
        }
    };

    match manifest.scripts.get(script) {
        Some(command) if !command.trim().is_empty() => CheckResult::pass(NAME),
        _ => CheckResult::fail(NAME).with_message(format!(
            "no \"{}\" script defined in {}",
            script, MANIFEST
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CheckStatus;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(temp: &TempDir, contents: &str) {
        fs::write(temp.path().join(MANIFEST), contents).unwrap();
    }

    #[test]
    fn present_build_script_passes() {
        let temp = TempDir::new().unwrap();
        write_manifest(&temp, r#"{"scripts": {"build": "vite build"}}"#);

        let result = check_manifest(temp.path(), "build");
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.name, NAME);
    }

    #[test]
    fn missing_script_fails_and_names_the_manifest() {
        let temp = TempDir::new().unwrap();
        write_manifest(&temp, r#"{"scripts": {"test": "vitest"}}"#);

        let result = check_manifest(temp.path(), "build");
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(
            result.message.as_deref(),
            Some("no \"build\" script defined in package.json")
        );
    }

    #[test]
    fn empty_script_counts_as_missing() {
        let temp = TempDir::new().unwrap();
        write_manifest(&temp, r#"{"scripts": {"build": "   "}}"#);

        let result = check_manifest(temp.path(), "build");
        assert_eq!(result.status, CheckStatus::Fail);
    }

    #[test]
    fn absent_manifest_is_a_read_failure() {
        let temp = TempDir::new().unwrap();

        let result = check_manifest(temp.path(), "build");
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(
            result.message.as_deref(),
            Some("could not read package.json")
        );
    }

    #[test]
    fn invalid_json_is_a_read_failure() {
        let temp = TempDir::new().unwrap();
        write_manifest(&temp, "{not json");

        let result = check_manifest(temp.path(), "build");
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(
            result.message.as_deref(),
            Some("could not read package.json")
        );
    }

    #[test]
    fn manifest_without_scripts_section_fails_as_missing_script() {
        let temp = TempDir::new().unwrap();
        write_manifest(&temp, r#"{"name": "app"}"#);

        let result = check_manifest(temp.path(), "build");
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.message.unwrap().contains("no \"build\" script"));
    }

    #[test]
    fn both_failure_branches_share_one_name() {
        let temp = TempDir::new().unwrap();
        let unreadable = check_manifest(temp.path(), "build");

        write_manifest(&temp, r#"{"scripts": {}}"#);
        let missing = check_manifest(temp.path(), "build");

        assert_eq!(unreadable.name, missing.name);
    }
}
