//! Progress output for user-facing status updates.
//!
//! In verbose mode, output is suppressed since tracing handles everything.
//! In normal mode, output is shown on stderr with colors when stderr is a
//! terminal, leaving stdout for the final report.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::rename::MovePhase;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stderr
    pub fn new() -> Self {
        Self {
            writer: Box::new(io::stderr()),
            silent: false,
            colors_enabled: should_use_colors(),
        }
    }

    /// When verbose=true, output is suppressed (tracing handles it)
    pub fn new_with_verbosity(verbose: bool) -> Self {
        Self {
            silent: verbose,
            ..Self::new()
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
        }
    }

    /// Report that the editor is about to open
    pub fn editor_start(&mut self, count: usize, path: &Path) {
        if self.silent {
            return;
        }
        let message = format!("Editing {} names in {}", count, path.display());
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", message.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", message);
        }
    }

    /// Report the staging directory in use
    pub fn staging_created(&mut self, name: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                "Staging directory:".dimmed(),
                name.cyan()
            );
        } else {
            let _ = writeln!(self.writer, "Staging directory: {}", name);
        }
    }

    /// Report the start of a move phase
    pub fn phase_start(&mut self, phase: MovePhase, total: usize) {
        if self.silent {
            return;
        }
        let message = format!("{} ({} entries)", phase.description(), total);
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", message.bold());
        } else {
            let _ = writeln!(self.writer, "{}", message);
        }
    }

    /// Report progress on a single move
    pub fn move_progress(&mut self, current: usize, total: usize, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                counter.cyan(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "[{}/{}] {} -> {}", current, total, from, to);
        }
    }

    /// Report an error during operation (non-fatal)
    pub fn warn(&mut self, message: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), message.yellow());
        } else {
            let _ = writeln!(self.writer, "Warning: {}", message);
        }
    }
}
