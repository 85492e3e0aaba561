//! Machine-readable report output.
//!
//! Mirrors the console report: every recorded result in execution order,
//! plus the aggregate error bit that drives the exit code.

use std::io::Write;

use serde::Serialize;

use super::{CheckResult, ValidationRun};

#[derive(Serialize)]
struct JsonReport<'a> {
    results: &'a [CheckResult],
    has_errors: bool,
}

/// Write the run as pretty-printed JSON.
pub fn write_json<W: Write>(run: &ValidationRun, writer: &mut W) -> serde_json::Result<()> {
    let report = JsonReport {
        results: run.results(),
        has_errors: run.has_errors(),
    };
    serde_json::to_writer_pretty(writer, &report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CheckResult;

    fn report_value(run: &ValidationRun) -> serde_json::Value {
        let mut out = Vec::new();
        write_json(run, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn report_includes_every_result() {
        let mut run = ValidationRun::new();
        run.record(CheckResult::pass("Node.js runtime").with_version("v20.11.1"));
        run.record(CheckResult::warn("Env: FIREBASE_TOKEN").with_message("not set"));

        let value = report_value(&run);
        let results = value["results"].as_array().unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["name"], "Node.js runtime");
        assert_eq!(results[0]["status"], "pass");
        assert_eq!(results[0]["version"], "v20.11.1");
        assert_eq!(results[1]["status"], "warn");
        assert_eq!(results[1]["message"], "not set");
    }

    #[test]
    fn has_errors_tracks_failures() {
        let mut run = ValidationRun::new();
        run.record(CheckResult::warn("a"));
        assert_eq!(report_value(&run)["has_errors"], false);

        run.record(CheckResult::fail("b"));
        assert_eq!(report_value(&run)["has_errors"], true);
    }
}
