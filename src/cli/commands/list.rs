//! List command implementation.
//!
//! Prints the check battery in execution order without probing anything.

use crate::checks::battery;
use crate::cli::args::ListArgs;
use crate::error::{CairnError, Result};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    fn names() -> Vec<&'static str> {
        battery().iter().map(|check| check.name()).collect()
    }
}

impl Command for ListCommand {
    fn execute(&self) -> Result<CommandResult> {
        let names = Self::names();

        if self.args.json {
            let rendered =
                serde_json::to_string_pretty(&names).map_err(|e| CairnError::Io(e.into()))?;
            println!("{}", rendered);
        } else {
            println!("Checks, in execution order:");
            for (idx, name) in names.iter().enumerate() {
                println!("  {}. {}", idx + 1, name);
            }
        }

        Ok(CommandResult::success())
    }
}
