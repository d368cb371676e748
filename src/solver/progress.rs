//! Progress and status plumbing for long-running engine calls
//!
//! Matrix builds and large ranking passes report coarse progress so a caller
//! can render it. There is no cancellation; progress is the only feedback.

use indicatif::{ProgressBar, ProgressStyle};

/// Matrix build progress after a block of guess rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildProgress {
    /// Rows finished so far
    pub current: usize,
    /// Total rows (dictionary size)
    pub total: usize,
}

impl BuildProgress {
    /// Percent complete, 0-100
    #[must_use]
    pub fn percent(self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.current as f64 / self.total as f64 * 100.0
        }
    }

    #[must_use]
    pub const fn is_done(self) -> bool {
        self.current >= self.total
    }
}

/// Receiver of engine progress events
///
/// Every method defaults to a no-op, so implementors pick what they render.
pub trait ProgressReporter {
    /// Called after each block of matrix rows and always after the last row
    fn matrix_progress(&mut self, _progress: BuildProgress) {}

    /// Called periodically while ranking a large search space
    fn compute_progress(&mut self, _percent: f64) {}

    /// Advisory, human-readable status text
    fn status(&mut self, _message: &str) {}
}

/// Silent reporter
impl ProgressReporter for () {}

/// Adapts a closure over `ProgressEvent` into a reporter
pub struct FnReporter<F>(pub F);

/// Single event type for closure-based reporting
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    Matrix(BuildProgress),
    Compute(f64),
    Status(String),
}

impl<F: FnMut(ProgressEvent)> ProgressReporter for FnReporter<F> {
    fn matrix_progress(&mut self, progress: BuildProgress) {
        (self.0)(ProgressEvent::Matrix(progress));
    }

    fn compute_progress(&mut self, percent: f64) {
        (self.0)(ProgressEvent::Compute(percent));
    }

    fn status(&mut self, message: &str) {
        (self.0)(ProgressEvent::Status(message.to_string()));
    }
}

/// Terminal progress bar for CLI commands
pub struct BarReporter {
    bar: ProgressBar,
}

impl BarReporter {
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos:>3}% | {msg}")
        {
            bar.set_style(style.progress_chars("█▓▒░"));
        }
        Self { bar }
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for BarReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for BarReporter {
    fn matrix_progress(&mut self, progress: BuildProgress) {
        self.bar.set_position(progress.percent() as u64);
        self.bar
            .set_message(format!("{}/{} rows", progress.current, progress.total));
    }

    fn compute_progress(&mut self, percent: f64) {
        self.bar.set_position(percent as u64);
    }

    fn status(&mut self, message: &str) {
        self.bar.set_message(message.to_string());
    }
}
