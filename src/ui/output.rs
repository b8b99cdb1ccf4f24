//! Output formatting and display logic for headerstrip

use std::io::Write;
use std::path::Path;

use crate::core::constants::{messages, output_formats};
use crate::core::error::Result;
use crate::reporting::RunSummary;
use crate::rewrite::ChangeReporter;

/// Format the notice printed for a rewritten file
pub fn removed_header_line(path: &Path) -> String {
    format!("{} {}", messages::REMOVED_HEADER, path.display())
}

/// Prints one notice line per rewritten file.
///
/// Lines are flushed immediately so a run aborted by a later error still
/// shows every file already changed.
pub struct ConsoleReporter<W: Write> {
    out: W,
    enabled: bool,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout(enabled: bool) -> Self {
        Self::new(std::io::stdout(), enabled)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChangeReporter for ConsoleReporter<W> {
    fn file_rewritten(&mut self, path: &Path) {
        if !self.enabled {
            return;
        }
        // A closed stdout must not stop the rewrite itself
        let written = writeln!(self.out, "{}", removed_header_line(path))
            .and_then(|()| self.out.flush());
        if let Err(err) = written {
            log::warn!("Could not print notice for {}: {err}", path.display());
        }
    }
}

/// Render the end-of-run summary in the requested format
pub fn format_summary(summary: &RunSummary, output_format: &str) -> Result<String> {
    if output_format == output_formats::JSON {
        return Ok(serde_json::to_string_pretty(summary)?);
    }

    let mut text = format!(
        "Scanned {} file(s), rewrote {}",
        summary.candidates,
        summary.rewritten.len()
    );
    if summary.has_failures() {
        text.push_str(&format!("\n\n> Failures ({})", summary.failures.len()));
        for (i, failure) in summary.failures.iter().enumerate() {
            text.push_str(&format!("\n{:4}. {}", i + 1, failure.error));
        }
    }
    Ok(text)
}

/// Print the end-of-run summary unless quiet
pub fn display_summary(summary: &RunSummary, output_format: &str, quiet: bool) -> Result<()> {
    if quiet {
        return Ok(());
    }
    println!("{}", format_summary(summary, output_format)?);
    Ok(())
}
