//! cairn - Pre-flight CI environment validation.
//!
//! cairn runs a fixed battery of independent environment checks (tool
//! versions, required files, build scripts, CI secrets) before a build or
//! deploy proceeds, prints a single report, and signals the aggregate
//! outcome through its exit code: 0 when nothing failed, 1 otherwise.
//!
//! # Modules
//!
//! - [`checks`] - The preflight check battery
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading and defaults
//! - [`error`] - Error types and result alias
//! - [`report`] - Result recording, aggregation, and rendering
//! - [`shell`] - External process probing and CI detection
//! - [`version`] - Version string parsing
//!
//! # Example
//!
//! ```
//! use cairn::report::{CheckResult, ValidationRun};
//!
//! let mut run = ValidationRun::new();
//! run.record(CheckResult::pass("Node.js runtime").with_version("v20.11.1"));
//! run.record(CheckResult::warn("Env: FIREBASE_TOKEN").with_message("not set"));
//! assert!(!run.has_errors());
//! assert_eq!(run.exit_code(), 0);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod shell;
pub mod version;

pub use error::{CairnError, Result};
