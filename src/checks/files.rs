//! Required file existence checks.

use std::path::Path;

use crate::report::CheckResult;

use super::{Check, CheckContext};

/// Verifies every file the pipeline depends on exists under the root.
pub struct RequiredFilesCheck;

impl Check for RequiredFilesCheck {
    fn name(&self) -> &'static str {
        "Required files"
    }

    fn run(&self, ctx: &CheckContext) -> Vec<CheckResult> {
        check_paths(&ctx.project_root, &ctx.config.required_files)
    }
}

/// One result per path; a missing entry never stops the scan.
fn check_paths(root: &Path, paths: &[String]) -> Vec<CheckResult> {
    paths
        .iter()
        .map(|rel| {
            let name = format!("File: {}", rel);
            if root.join(rel).exists() {
                CheckResult::pass(name)
            } else {
                CheckResult::fail(name).with_message("Missing")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CheckStatus;
    use std::fs;
    use tempfile::TempDir;

    fn paths(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn present_files_pass_missing_files_fail() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        fs::write(temp.path().join("firebase.json"), "{}").unwrap();

        let results = check_paths(
            temp.path(),
            &paths(&["package.json", "firebase.json", ".firebaserc"]),
        );

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].status, CheckStatus::Pass);
        assert_eq!(results[1].status, CheckStatus::Pass);
        assert_eq!(results[2].status, CheckStatus::Fail);
        assert_eq!(results[2].name, "File: .firebaserc");
        assert_eq!(results[2].message.as_deref(), Some("Missing"));
    }

    #[test]
    fn missing_entries_do_not_short_circuit() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("last.yml"), "").unwrap();

        let results = check_paths(temp.path(), &paths(&["gone-a", "gone-b", "last.yml"]));

        // the scan continued past both misses
        assert_eq!(results.len(), 3);
        assert_eq!(results[2].status, CheckStatus::Pass);
    }

    #[test]
    fn failure_count_matches_missing_count() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a"), "").unwrap();
        fs::write(temp.path().join("c"), "").unwrap();

        let results = check_paths(temp.path(), &paths(&["a", "b", "c", "d", "e"]));

        let failed = results
            .iter()
            .filter(|r| r.status == CheckStatus::Fail)
            .count();
        let passed = results
            .iter()
            .filter(|r| r.status == CheckStatus::Pass)
            .count();
        assert_eq!(failed, 3);
        assert_eq!(passed, 2);
    }

    #[test]
    fn nested_paths_resolve_against_the_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".github/workflows")).unwrap();
        fs::write(temp.path().join(".github/workflows/deploy.yml"), "").unwrap();

        let results = check_paths(temp.path(), &paths(&[".github/workflows/deploy.yml"]));
        assert_eq!(results[0].status, CheckStatus::Pass);
        assert_eq!(results[0].name, "File: .github/workflows/deploy.yml");
    }

    #[test]
    fn empty_list_records_nothing() {
        let temp = TempDir::new().unwrap();
        assert!(check_paths(temp.path(), &[]).is_empty());
    }
}
