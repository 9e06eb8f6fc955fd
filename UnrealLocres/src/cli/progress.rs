//! CLI progress display utilities
//!
//! Numbered step lines with emojis, a spinner for work that runs between
//! steps, and a closing `Done in ...` line. Everything is silent in quiet mode.

use std::time::{Duration, Instant};

use console::{Emoji, style};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Magnifying glass - for reading/scanning operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Floppy disk - for writing/saving operations
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Gear - for processing/conversion operations
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
/// Document - for translation sheet operations
pub static DOCUMENT: Emoji<'_, '_> = Emoji("📄 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

// =============================================================================
// Step-Based Progress
// =============================================================================

/// Print a step indicator: `[1/3] 🔍 Message...`
pub fn print_step(current: usize, total: usize, emoji: &Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

/// Create a simple spinner
///
/// # Panics
/// Panics if the template string is invalid (this is a compile-time constant).
#[must_use]
pub fn simple_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("valid template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

// =============================================================================
// Command Progress
// =============================================================================

/// Step counter for one command run.
pub struct Progress {
    quiet: bool,
    total: usize,
    current: usize,
    started: Instant,
}

impl Progress {
    #[must_use]
    pub fn new(total: usize, quiet: bool) -> Self {
        Self {
            quiet,
            total,
            current: 0,
            started: Instant::now(),
        }
    }

    /// Advance to the next step and print it.
    pub fn step(&mut self, emoji: &Emoji, msg: &str) {
        self.current += 1;
        if !self.quiet {
            print_step(self.current, self.total, emoji, msg);
        }
    }

    /// Run `work` behind a spinner (hidden in quiet mode).
    pub fn spin<T>(&self, msg: &str, work: impl FnOnce() -> T) -> T {
        if self.quiet {
            return work();
        }
        let spinner = simple_spinner(msg);
        let result = work();
        spinner.finish_and_clear();
        result
    }

    /// Print an informational line unless quiet.
    pub fn note(&self, msg: &str) {
        if !self.quiet {
            println!("      {msg}");
        }
    }

    pub fn finish(self) {
        if !self.quiet {
            print_done(self.started.elapsed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_counted_when_quiet() {
        let mut progress = Progress::new(2, true);
        progress.step(&LOOKING_GLASS, "Reading");
        progress.step(&DISK, "Writing");
        assert_eq!(progress.current, 2);
        assert_eq!(progress.spin("Working", || 7), 7);
        progress.finish();
    }
}
