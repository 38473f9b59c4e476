//! Builder for constructing ReportReadModel from a screening response

use super::opportunity_view::{ItemView, OpportunityView};
use super::report_read_model::{
    CutoffView, FindingView, ReportMetadataView, ReportReadModel, ScreeningView, SummaryView,
};
use crate::application::dto::{ReportMetadata, ScreeningResponse};
use crate::procurement::domain::{AwardStatus, Item, Opportunity};
use crate::procurement::services::Finding;

const VIEW_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Builder for constructing ReportReadModel from a screening response
pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    /// Builds the read model. Summary figures cover the retained
    /// opportunities; findings cover everything that was loaded.
    pub fn build(response: &ScreeningResponse) -> ReportReadModel {
        let opportunities: Vec<OpportunityView> = response
            .opportunities
            .iter()
            .map(Self::build_opportunity)
            .collect();
        let findings: Vec<FindingView> = response
            .integrity
            .findings()
            .iter()
            .map(Self::build_finding)
            .collect();

        ReportReadModel {
            metadata: Self::build_metadata(&response.metadata),
            summary: Self::build_summary(response),
            cutoff: response.cutoff.as_ref().map(|stats| CutoffView {
                closing_after: stats.cutoff.format(VIEW_TIMESTAMP_FORMAT).to_string(),
                excluded: stats.excluded,
            }),
            screening: response.screening.as_ref().map(|stats| ScreeningView {
                rejected_items: stats.rejected_items,
                dropped_opportunities: stats.dropped_opportunities,
                unmatched_keywords: stats.unmatched_keywords.clone(),
            }),
            opportunities,
            findings,
            records: response.opportunities.clone(),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            generated_at: metadata.generated_at().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            run_id: metadata.run_id().to_string(),
            source: metadata.source().to_string(),
        }
    }

    fn build_summary(response: &ScreeningResponse) -> SummaryView {
        let opportunities = &response.opportunities;
        let count = |status| -> usize {
            opportunities
                .iter()
                .map(|o| o.count_by_status(status))
                .sum()
        };

        SummaryView {
            loaded_opportunities: response.loaded_count,
            opportunities: opportunities.len(),
            items: opportunities.iter().map(|o| o.items().len()).sum(),
            awarded_items: count(AwardStatus::Awarded),
            pending_items: count(AwardStatus::Pending),
            unsuccessful_items: count(AwardStatus::Unsuccessful),
            estimated_total: opportunities.iter().filter_map(Opportunity::estimated_value).sum(),
            awarded_total: opportunities.iter().map(Opportunity::awarded_value).sum(),
            error_count: response.integrity.errors().count(),
            warning_count: response.integrity.warnings().count(),
            strict: response.strict,
            passed: response.passes(),
        }
    }

    fn build_opportunity(opportunity: &Opportunity) -> OpportunityView {
        OpportunityView {
            id: opportunity.id().to_string(),
            uf: opportunity.uf().to_string(),
            city: opportunity.city().to_string(),
            unit: opportunity.unit().to_string(),
            agency: opportunity.agency().to_string(),
            object: opportunity.object().trim().to_string(),
            notice: opportunity.notice().to_string(),
            uasg: opportunity.uasg().to_string(),
            published_at: opportunity
                .published_at()
                .format(VIEW_TIMESTAMP_FORMAT)
                .to_string(),
            proposals_close_at: opportunity
                .proposals_close_at()
                .format(VIEW_TIMESTAMP_FORMAT)
                .to_string(),
            estimated_value: opportunity.estimated_value(),
            confidential: opportunity.is_confidential(),
            declared_item_count: opportunity.declared_item_count(),
            pncp_link: opportunity.pncp_link().to_string(),
            notice_link: opportunity.id().reference().map(|r| r.notice_link()),
            awarded_value: opportunity.awarded_value(),
            items: opportunity.items().iter().map(Self::build_item).collect(),
        }
    }

    fn build_item(item: &Item) -> ItemView {
        ItemView {
            number: item.number(),
            description: item.description().to_string(),
            quantity: item.quantity(),
            unit_price: item.unit_price(),
            total: item.total(),
            computed_total: item.computed_total(),
            supplier: item.supplier().as_str().to_string(),
            awarded_supplier: item.supplier().awarded_name().map(str::to_string),
            status: item.award_status(),
            won: item.won(),
        }
    }

    fn build_finding(finding: &Finding) -> FindingView {
        FindingView {
            severity: finding.severity,
            kind: finding.kind,
            record: finding.record.clone(),
            item: finding.item,
            message: finding.message.clone(),
        }
    }
}
