/// Console adapters for terminal feedback
mod finding_summary;
mod progress_reporter;

pub use finding_summary::FindingSummaryPrinter;
pub use progress_reporter::StderrProgressReporter;
