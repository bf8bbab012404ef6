use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::{Cell, RefCell};

const BAR_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files {prefix:.red} {wide_msg}";

/// StderrProgressReporter adapter for reporting upload progress on stderr
///
/// Status lines and failure warnings are printed above an indicatif bar
/// that tracks finished uploads. The bar is created lazily on the first
/// progress update, so runs with nothing to upload never draw one.
/// Stdout is left untouched for the JSON report.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    failures: Cell<usize>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            failures: Cell::new(0),
        }
    }

    fn bar_for(&self, total: usize) -> ProgressBar {
        self.progress_bar
            .borrow_mut()
            .get_or_insert_with(|| {
                let pb = ProgressBar::with_draw_target(
                    Some(total as u64),
                    ProgressDrawTarget::stderr(),
                );
                if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
                    pb.set_style(style.progress_chars("=>-"));
                }
                pb
            })
            .clone()
    }

    /// Prints a line without tearing an active progress bar
    fn print_line(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) if !pb.is_finished() => pb.suspend(|| eprintln!("{}", message)),
            _ => eprintln!("{}", message),
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.print_line(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.bar_for(total);
        pb.set_position(current as u64);
        if let Some(file_name) = message {
            pb.set_message(file_name.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        let failures = self.failures.get() + 1;
        self.failures.set(failures);
        if let Some(pb) = self.progress_bar.borrow().as_ref() {
            pb.set_prefix(format!("({} failed)", failures));
        }
        self.print_line(message);
    }

    fn report_completion(&self, message: &str) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_run_does_not_panic() {
        let reporter = StderrProgressReporter::new();
        reporter.report("🔍 Looking for SBOMs in: /tmp/sboms");
        reporter.report_progress(1, 2, Some("file1.json"));
        reporter.report_error("⚠️  Warning: Failed to upload /tmp/sboms/file2.json");
        reporter.report_progress(2, 2, Some("file2.json"));
        reporter.report_completion("❌ Upload finished with failures");
    }

    #[test]
    fn test_failures_are_counted() {
        let reporter = StderrProgressReporter::new();
        reporter.report_error("first");
        reporter.report_progress(1, 3, None);
        reporter.report_error("second");
        assert_eq!(reporter.failures.get(), 2);
    }

    #[test]
    fn test_completion_drops_bar() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(1, 1, Some("only.json"));
        reporter.report_completion("✅ Upload complete");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_completion_without_bar() {
        let reporter = StderrProgressReporter::default();
        reporter.report("📦 Found 0 file(s) to upload");
        reporter.report_completion("✅ Upload complete");
    }
}
