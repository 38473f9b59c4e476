//! Report read model for the formatters
//!
//! Aggregates a screening run into a single query-optimized structure.

use super::opportunity_view::OpportunityView;
use crate::procurement::domain::Opportunity;
use crate::procurement::services::{FindingKind, Severity};
use serde::Serialize;

/// Main read model for a screening report
#[derive(Debug, Clone, Serialize)]
pub struct ReportReadModel {
    pub metadata: ReportMetadataView,
    pub summary: SummaryView,
    pub cutoff: Option<CutoffView>,
    pub screening: Option<ScreeningView>,
    pub opportunities: Vec<OpportunityView>,
    pub findings: Vec<FindingView>,
    /// Retained records in wire shape, for re-serialization
    #[serde(skip)]
    pub records: Vec<Opportunity>,
}

/// View representation of report metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadataView {
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
    pub run_id: String,
    pub source: String,
}

/// Aggregate figures over the retained opportunities
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub loaded_opportunities: usize,
    pub opportunities: usize,
    pub items: usize,
    pub awarded_items: usize,
    pub pending_items: usize,
    pub unsuccessful_items: usize,
    /// Sum of the known estimates; unknown (0.0) estimates are skipped
    pub estimated_total: f64,
    pub awarded_total: f64,
    pub error_count: usize,
    pub warning_count: usize,
    pub strict: bool,
    pub passed: bool,
}

/// What the closing cutoff removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CutoffView {
    pub closing_after: String,
    pub excluded: usize,
}

/// What relevance screening removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreeningView {
    pub rejected_items: usize,
    pub dropped_opportunities: usize,
    pub unmatched_keywords: Vec<String>,
}

/// View representation of an integrity finding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindingView {
    pub severity: Severity,
    pub kind: FindingKind,
    pub record: String,
    pub item: Option<u32>,
    pub message: String,
}

impl ReportReadModel {
    pub fn errors(&self) -> impl Iterator<Item = &FindingView> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &FindingView> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }
}
