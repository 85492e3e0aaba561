//! Check result recording and aggregation.
//!
//! Every probe in the battery produces one or more [`CheckResult`] records,
//! collected in execution order by a [`ValidationRun`]. The run holds no
//! mutable aggregate flag; [`ValidationRun::has_errors`] is computed from
//! the recorded results, so a check can never flip the outcome except by
//! recording a `Fail`.

pub mod json;
pub mod render;

use serde::Serialize;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Requirement satisfied.
    Pass,
    /// Requirement violated; blocks CI.
    Fail,
    /// Worth surfacing but never blocking.
    Warn,
    /// Status only (e.g. a skipped check).
    Info,
}

impl CheckStatus {
    /// Report glyph for this status.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Pass => "✅",
            Self::Fail => "❌",
            Self::Warn => "⚠️",
            Self::Info => "ℹ️",
        }
    }
}

/// A single recorded probe outcome.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// What was checked (may be parameterized, e.g. `File: package.json`).
    pub name: String,

    /// Outcome of the probe.
    pub status: CheckStatus,

    /// Detected version, shown alongside the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Detail or remediation hint, shown indented under the result line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckResult {
    fn new(name: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            name: name.into(),
            status,
            version: None,
            message: None,
        }
    }

    /// Create a passing result.
    pub fn pass(name: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Pass)
    }

    /// Create a failing result.
    pub fn fail(name: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Fail)
    }

    /// Create a warning result.
    pub fn warn(name: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Warn)
    }

    /// Create an informational result.
    pub fn info(name: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Info)
    }

    /// Attach a detected version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Attach a detail or remediation message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// The append-only record of one validation pass.
///
/// Insertion order is execution order and is preserved for rendering.
#[derive(Debug, Default)]
pub struct ValidationRun {
    results: Vec<CheckResult>,
}

impl ValidationRun {
    /// Create an empty run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one result.
    pub fn record(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Append every result from one check, preserving order.
    pub fn record_all(&mut self, results: Vec<CheckResult>) {
        self.results.extend(results);
    }

    /// All recorded results, in execution order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// True iff at least one recorded result failed.
    ///
    /// `Warn` and `Info` never contribute.
    pub fn has_errors(&self) -> bool {
        self.results
            .iter()
            .any(|result| result.status == CheckStatus::Fail)
    }

    /// Process exit code for this run: 0 when clean, 1 on any failure.
    pub fn exit_code(&self) -> i32 {
        if self.has_errors() {
            1
        } else {
            0
        }
    }
}
