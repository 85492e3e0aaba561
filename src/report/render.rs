//! Human-readable report rendering.
//!
//! The report prints one line per recorded result, in execution order,
//! framed by a banner and closed with a single pass/fail summary line.

use std::io::{self, Write};

use console::style;

use super::{CheckStatus, ValidationRun};

const BANNER: &str = "============================================";

/// Render the full report for a completed run.
pub fn render<W: Write>(run: &ValidationRun, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", style(BANNER).dim())?;
    writeln!(writer, "  {}", style("cairn: CI preflight validation").bold())?;
    writeln!(writer, "{}", style(BANNER).dim())?;
    writeln!(writer, "Running preflight checks...")?;
    writeln!(writer)?;

    for result in run.results() {
        match &result.version {
            Some(version) => writeln!(
                writer,
                "{} {} ({})",
                result.status.glyph(),
                result.name,
                version
            )?,
            None => writeln!(writer, "{} {}", result.status.glyph(), result.name)?,
        }
        if let Some(message) = &result.message {
            writeln!(writer, "   {}", style(message).dim())?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "{}", style(BANNER).dim())?;
    if run.has_errors() {
        writeln!(
            writer,
            "{} Preflight failed. Fix the issues above before pushing.",
            CheckStatus::Fail.glyph()
        )?;
    } else {
        writeln!(
            writer,
            "{} All preflight checks passed. Ready to build.",
            CheckStatus::Pass.glyph()
        )?;
    }

    Ok(())
}
