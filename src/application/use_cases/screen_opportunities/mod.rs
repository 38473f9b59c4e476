use crate::application::dto::{
    CutoffStats, ReportMetadata, ScreeningRequest, ScreeningResponse, ScreeningStats,
};
use crate::ports::outbound::{PayloadReader, ProgressReporter};
use crate::procurement::domain::Opportunity;
use crate::procurement::services::{
    ClosingCutoff, IntegrityChecker, IntegrityReport, PayloadLoader, RelevanceFilter,
};
use crate::procurement::policies::RelevanceRules;
use crate::shared::error::RadarError;
use crate::shared::Result;

/// ScreenOpportunitiesUseCase - Loads, checks and screens an opportunity payload
///
/// # Type Parameters
/// * `R` - PayloadReader implementation
/// * `P` - ProgressReporter implementation
pub struct ScreenOpportunitiesUseCase<R, P> {
    payload_reader: R,
    progress_reporter: P,
}

impl<R, P> ScreenOpportunitiesUseCase<R, P>
where
    R: PayloadReader,
    P: ProgressReporter,
{
    /// Creates a new ScreenOpportunitiesUseCase with injected dependencies
    pub fn new(payload_reader: R, progress_reporter: P) -> Self {
        Self {
            payload_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Returns an error if the payload cannot be read, does not match the
    /// schema, or the screening rules are invalid. Integrity findings are
    /// not errors; they travel in the response.
    pub fn execute(&self, request: ScreeningRequest) -> Result<ScreeningResponse> {
        // Step 1: Read and decode the payload
        let source_label = self.payload_reader.source_label();
        let opportunities = self.load(&source_label)?;
        let loaded_count = opportunities.len();

        // Step 2: Integrity check over everything that was loaded
        let integrity = self.check_integrity(&opportunities);

        // Step 3: Closing cutoff
        let (opportunities, cutoff) = self.apply_cutoff(opportunities, request.closing_cutoff);

        // Step 4: Relevance screening
        let (opportunities, screening) = self.apply_relevance(opportunities, request.relevance)?;

        self.progress_reporter.report_completion(&format!(
            "✅ {} of {} opportunit(ies) retained",
            opportunities.len(),
            loaded_count
        ));

        Ok(ScreeningResponse {
            opportunities,
            integrity,
            loaded_count,
            cutoff,
            screening,
            strict: request.strict,
            metadata: ReportMetadata::for_source(source_label),
        })
    }

    fn load(&self, source_label: &str) -> Result<Vec<Opportunity>> {
        self.progress_reporter
            .report(&format!("📖 Loading opportunities from: {}", source_label));

        let content = self.payload_reader.read_payload()?;
        let opportunities =
            PayloadLoader::parse(&content).map_err(|e| RadarError::PayloadSchema {
                source_label: source_label.to_string(),
                details: e.to_string(),
            })?;

        let item_count: usize = opportunities.iter().map(|o| o.items().len()).sum();
        self.progress_reporter.report(&format!(
            "✅ Loaded {} opportunit(ies) with {} item(s)",
            opportunities.len(),
            item_count
        ));

        Ok(opportunities)
    }

    fn check_integrity(&self, opportunities: &[Opportunity]) -> IntegrityReport {
        self.progress_reporter.report("🔍 Checking record integrity...");

        let total = opportunities.len();
        let report = IntegrityChecker::check_with_progress(opportunities, |position, opportunity| {
            self.progress_reporter
                .report_progress(position, total, Some(opportunity.id().as_str()));
        });

        let errors = report.errors().count();
        let warnings = report.warnings().count();
        if errors > 0 || warnings > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Integrity check found {} error(s) and {} warning(s)",
                errors, warnings
            ));
        } else {
            self.progress_reporter
                .report("✅ All records passed the integrity check");
        }

        report
    }

    fn apply_cutoff(
        &self,
        opportunities: Vec<Opportunity>,
        cutoff: Option<ClosingCutoff>,
    ) -> (Vec<Opportunity>, Option<CutoffStats>) {
        let Some(cutoff) = cutoff else {
            return (opportunities, None);
        };

        let (kept, excluded) = cutoff.retain(opportunities);
        if excluded > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} opportunit(ies) closing before {}",
                excluded,
                cutoff.cutoff()
            ));
        }

        (
            kept,
            Some(CutoffStats {
                cutoff: cutoff.cutoff(),
                excluded,
            }),
        )
    }

    fn apply_relevance(
        &self,
        opportunities: Vec<Opportunity>,
        rules: Option<RelevanceRules>,
    ) -> Result<(Vec<Opportunity>, Option<ScreeningStats>)> {
        let Some(rules) = rules else {
            return Ok((opportunities, None));
        };

        self.progress_reporter.report("🧹 Screening items by relevance...");
        let filter = RelevanceFilter::new(rules)?;
        let outcome = filter.screen(opportunities);

        if outcome.rejected_items > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Rejected {} item(s); {} opportunit(ies) left without relevant items",
                outcome.rejected_items, outcome.dropped_opportunities
            ));
        }

        let unmatched_keywords = filter.unmatched_keywords();
        for keyword in &unmatched_keywords {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Keyword '{}' did not match any item.",
                keyword
            ));
        }

        Ok((
            outcome.retained,
            Some(ScreeningStats {
                rejected_items: outcome.rejected_items,
                dropped_opportunities: outcome.dropped_opportunities,
                unmatched_keywords,
            }),
        ))
    }
}
