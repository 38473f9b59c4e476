use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so progress never mixes with the report on stdout.
/// Per-record progress is drawn with an indicatif bar, which hides itself
/// when stderr is not a terminal.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        match slot.as_ref() {
            Some(pb) if pb.length() == Some(total as u64) => pb.clone(),
            _ => {
                let style = ProgressStyle::with_template(BAR_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=>-");
                let pb = ProgressBar::new(total as u64).with_style(style);
                *slot = Some(pb.clone());
                pb
            }
        }
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
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
        self.finish_progress_bar();
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_is_reused_for_same_total() {
        let reporter = StderrProgressReporter::new();
        reporter.report_progress(1, 7, Some("1386437700013020252229"));
        reporter.report_progress(2, 7, None);
        let pb = reporter.progress_bar.borrow().clone().unwrap();
        assert_eq!(pb.position(), 2);
        assert_eq!(pb.length(), Some(7));
    }

    #[test]
    fn test_messages_finish_the_progress_bar() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(3, 7, None);
        reporter.report_error("⚠️  Integrity check found 1 error(s) and 0 warning(s)");
        assert!(reporter.progress_bar.borrow().is_none());

        reporter.report_progress(1, 2, None);
        reporter.report_completion("✅ done");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_new_total_starts_a_new_bar() {
        let reporter = StderrProgressReporter::new();
        reporter.report_progress(1, 7, None);
        reporter.report_progress(1, 3, None);
        assert_eq!(
            reporter.progress_bar.borrow().as_ref().and_then(|pb| pb.length()),
            Some(3)
        );
    }
}
