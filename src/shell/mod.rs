//! External process probing and host environment detection.

pub mod command;
pub mod platform;

pub use command::{run_version_command, CommandOutput, ExecError};
pub use platform::is_ci;
