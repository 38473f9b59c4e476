use crate::procurement::domain::Opportunity;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Tolerance when comparing a supplied total with quantity × unit price.
const TOTAL_TOLERANCE: f64 = 0.01;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Rule a finding was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    EmptyId,
    DuplicateId,
    DuplicateItemNumber,
    NegativeQuantity,
    PendingItemWon,
    NegativeTotal,
    NegativeEstimatedValue,
    InvalidUf,
    ItemCountMismatch,
    TotalMismatch,
    LinkMismatch,
    ClosingBeforePublication,
}

impl FindingKind {
    /// Stable snake_case name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            FindingKind::EmptyId => "empty_id",
            FindingKind::DuplicateId => "duplicate_id",
            FindingKind::DuplicateItemNumber => "duplicate_item_number",
            FindingKind::NegativeQuantity => "negative_quantity",
            FindingKind::PendingItemWon => "pending_item_won",
            FindingKind::NegativeTotal => "negative_total",
            FindingKind::NegativeEstimatedValue => "negative_estimated_value",
            FindingKind::InvalidUf => "invalid_uf",
            FindingKind::ItemCountMismatch => "item_count_mismatch",
            FindingKind::TotalMismatch => "total_mismatch",
            FindingKind::LinkMismatch => "link_mismatch",
            FindingKind::ClosingBeforePublication => "closing_before_publication",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            FindingKind::ItemCountMismatch
            | FindingKind::TotalMismatch
            | FindingKind::LinkMismatch
            | FindingKind::ClosingBeforePublication => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// One violated invariant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub kind: FindingKind,
    /// Opportunity id, or `#<index>` when the id is empty
    pub record: String,
    /// Item number, for item-level findings
    pub item: Option<u32>,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.item {
            Some(item) => write!(
                f,
                "[{}] record {} item {}: {}",
                self.severity, self.record, item, self.message
            ),
            None => write!(
                f,
                "[{}] record {}: {}",
                self.severity, self.record, self.message
            ),
        }
    }
}

/// Findings of one integrity check run, in record order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntegrityReport {
    findings: Vec<Finding>,
}

impl IntegrityReport {
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Whether the dataset is acceptable. Strict mode also fails on warnings.
    pub fn passes(&self, strict: bool) -> bool {
        if strict {
            self.findings.is_empty()
        } else {
            !self.has_errors()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    fn push(&mut self, kind: FindingKind, record: &str, item: Option<u32>, message: String) {
        self.findings.push(Finding {
            severity: kind.severity(),
            kind,
            record: record.to_string(),
            item,
            message,
        });
    }
}

/// IntegrityChecker - Evaluates record invariants over a loaded collection
pub struct IntegrityChecker;

impl IntegrityChecker {
    /// Checks every opportunity and the collection-wide id uniqueness.
    pub fn check(opportunities: &[Opportunity]) -> IntegrityReport {
        Self::check_with_progress(opportunities, |_, _| {})
    }

    /// Same as [`IntegrityChecker::check`], calling `on_record` with the
    /// 1-based position of each record before it is checked.
    pub fn check_with_progress<F>(opportunities: &[Opportunity], mut on_record: F) -> IntegrityReport
    where
        F: FnMut(usize, &Opportunity),
    {
        let mut report = IntegrityReport::default();
        let mut seen_ids = HashSet::new();

        for (index, opportunity) in opportunities.iter().enumerate() {
            on_record(index + 1, opportunity);
            let label = Self::label(index, opportunity);

            if opportunity.id().is_empty() {
                report.push(
                    FindingKind::EmptyId,
                    &label,
                    None,
                    "identifier is empty".to_string(),
                );
            } else if !seen_ids.insert(opportunity.id().as_str()) {
                report.push(
                    FindingKind::DuplicateId,
                    &label,
                    None,
                    "identifier appears more than once in the collection".to_string(),
                );
            }

            Self::check_record(&mut report, &label, opportunity);
        }

        report
    }

    fn label(index: usize, opportunity: &Opportunity) -> String {
        if opportunity.id().is_empty() {
            format!("#{}", index)
        } else {
            opportunity.id().to_string()
        }
    }

    fn check_record(report: &mut IntegrityReport, label: &str, opportunity: &Opportunity) {
        let uf = opportunity.uf();
        if uf.len() != 2 || !uf.bytes().all(|b| b.is_ascii_uppercase()) {
            report.push(
                FindingKind::InvalidUf,
                label,
                None,
                format!("state code '{}' is not two uppercase letters", uf),
            );
        }

        if opportunity.estimated_total() < 0.0 {
            report.push(
                FindingKind::NegativeEstimatedValue,
                label,
                None,
                format!(
                    "estimated total {} is negative",
                    opportunity.estimated_total()
                ),
            );
        }

        let actual = opportunity.items().len();
        if opportunity.declared_item_count() as usize != actual {
            report.push(
                FindingKind::ItemCountMismatch,
                label,
                None,
                format!(
                    "declares {} item(s) but lists {}",
                    opportunity.declared_item_count(),
                    actual
                ),
            );
        }

        if opportunity.proposals_close_at() < opportunity.published_at() {
            report.push(
                FindingKind::ClosingBeforePublication,
                label,
                None,
                format!(
                    "proposals close at {} before publication at {}",
                    opportunity.proposals_close_at(),
                    opportunity.published_at()
                ),
            );
        }

        if let Some(reference) = opportunity.id().reference() {
            let expected = reference.notice_link();
            if opportunity.pncp_link().trim_end_matches('/') != expected {
                report.push(
                    FindingKind::LinkMismatch,
                    label,
                    None,
                    format!(
                        "link '{}' does not point at {}",
                        opportunity.pncp_link(),
                        expected
                    ),
                );
            }
        }

        Self::check_items(report, label, opportunity);
    }

    fn check_items(report: &mut IntegrityReport, label: &str, opportunity: &Opportunity) {
        let mut seen_numbers = HashSet::new();

        for item in opportunity.items() {
            let number = Some(item.number());

            if !seen_numbers.insert(item.number()) {
                report.push(
                    FindingKind::DuplicateItemNumber,
                    label,
                    number,
                    "item number is repeated within the opportunity".to_string(),
                );
            }

            if item.quantity() < 0.0 {
                report.push(
                    FindingKind::NegativeQuantity,
                    label,
                    number,
                    format!("quantity {} is negative", item.quantity()),
                );
            }

            if item.supplier().is_pending_sentinel() && item.won() {
                report.push(
                    FindingKind::PendingItemWon,
                    label,
                    number,
                    "marked as won while no result has been published".to_string(),
                );
            }

            if let Some(total) = item.total() {
                if total < 0.0 {
                    report.push(
                        FindingKind::NegativeTotal,
                        label,
                        number,
                        format!("total {} is negative", total),
                    );
                } else if let Some(computed) = item.computed_total() {
                    if (computed - total).abs() > TOTAL_TOLERANCE {
                        report.push(
                            FindingKind::TotalMismatch,
                            label,
                            number,
                            format!(
                                "total {} differs from quantity × unit price {}",
                                total, computed
                            ),
                        );
                    }
                }
            }
        }
    }
}
