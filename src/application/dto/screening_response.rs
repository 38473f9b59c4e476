use super::ReportMetadata;
use crate::procurement::domain::Opportunity;
use crate::procurement::services::IntegrityReport;
use chrono::NaiveDateTime;

/// What the closing cutoff removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutoffStats {
    pub cutoff: NaiveDateTime,
    pub excluded: usize,
}

/// What relevance screening removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningStats {
    pub rejected_items: usize,
    pub dropped_opportunities: usize,
    pub unmatched_keywords: Vec<String>,
}

/// ScreeningResponse - Result of the screening use case
///
/// `integrity` always covers the full loaded collection; `opportunities`
/// holds what survived the cutoff and relevance screening.
#[derive(Debug, Clone)]
pub struct ScreeningResponse {
    pub opportunities: Vec<Opportunity>,
    pub integrity: IntegrityReport,
    pub loaded_count: usize,
    pub cutoff: Option<CutoffStats>,
    pub screening: Option<ScreeningStats>,
    pub strict: bool,
    pub metadata: ReportMetadata,
}

impl ScreeningResponse {
    /// Whether the loaded dataset passed its integrity checks
    pub fn passes(&self) -> bool {
        self.integrity.passes(self.strict)
    }
}
