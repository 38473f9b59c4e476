mod closing_cutoff;
mod integrity_checker;
mod payload_loader;
mod relevance_filter;

pub use closing_cutoff::ClosingCutoff;
pub use integrity_checker::{Finding, FindingKind, IntegrityChecker, IntegrityReport, Severity};
pub use payload_loader::{PayloadError, PayloadLoader};
pub use relevance_filter::{RelevanceFilter, ScreeningOutcome, Verdict};
