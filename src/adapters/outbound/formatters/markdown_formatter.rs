use crate::application::read_models::{
    CutoffView, FindingView, ItemView, OpportunityView, ReportReadModel, ScreeningView,
    SummaryView,
};
use crate::ports::outbound::ReportFormatter;
use crate::procurement::domain::AwardStatus;
use crate::shared::Result;

/// Markdown table header for items
const ITEM_TABLE_HEADER: &str =
    "| Item | Description | Qty | Unit price | Total | Supplier | Status |\n";

/// Markdown table separator line for items
const ITEM_TABLE_SEPARATOR: &str =
    "|-----:|-------------|----:|-----------:|------:|----------|--------|\n";

/// Markdown table header for integrity findings
const FINDING_TABLE_HEADER: &str = "| Severity | Kind | Record | Item | Message |\n";

/// Markdown table separator line for integrity findings
const FINDING_TABLE_SEPARATOR: &str = "|----------|------|--------|-----:|---------|\n";

/// MarkdownFormatter adapter for a human-readable screening report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace(['\r', '\n'], " ")
    }

    /// Escapes inline Markdown syntax in free text used outside tables
    fn escape_markdown_inline(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '|' => {
                    escaped.push('\\');
                    escaped.push(c);
                }
                '\r' | '\n' => escaped.push(' '),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    /// Formats a value in reais with Brazilian separators (`R$ 1.234,56`).
    fn format_brl(value: f64) -> String {
        let cents = (value.abs() * 100.0).round() as u64;
        let whole = (cents / 100).to_string();

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }

        let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
        format!("{}R$ {},{:02}", sign, grouped, cents % 100)
    }

    /// Formats a quantity without a trailing `.0` for whole numbers.
    fn format_quantity(value: f64) -> String {
        if value.fract() == 0.0 && value.abs() < 1e15 {
            format!("{}", value as i64)
        } else {
            format!("{}", value)
        }
    }

    fn status_label(status: AwardStatus) -> &'static str {
        match status {
            AwardStatus::Awarded => "✅ awarded",
            AwardStatus::Pending => "⏳ pending",
            AwardStatus::Unsuccessful => "❌ unsuccessful",
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ReportReadModel) {
        let metadata = &model.metadata;
        output.push_str("# PNCP Opportunity Report\n\n");
        output.push_str(&format!(
            "Generated {} by {} {} from {}.\n\n",
            metadata.generated_at, metadata.tool_name, metadata.tool_version, metadata.source
        ));
        output.push_str(&format!("Run: `{}`\n\n", metadata.run_id));
    }

    fn render_summary(&self, output: &mut String, summary: &SummaryView) {
        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|------:|\n");

        let rows = [
            ("Opportunities loaded", summary.loaded_opportunities.to_string()),
            ("Opportunities reported", summary.opportunities.to_string()),
            ("Items", summary.items.to_string()),
            ("Awarded items", summary.awarded_items.to_string()),
            ("Pending items", summary.pending_items.to_string()),
            ("Unsuccessful items", summary.unsuccessful_items.to_string()),
            ("Known estimated value", Self::format_brl(summary.estimated_total)),
            ("Awarded value", Self::format_brl(summary.awarded_total)),
            ("Integrity errors", summary.error_count.to_string()),
            ("Integrity warnings", summary.warning_count.to_string()),
        ];
        for (metric, value) in rows {
            output.push_str(&format!("| {} | {} |\n", metric, value));
        }
        output.push('\n');
    }

    fn render_screening(
        &self,
        output: &mut String,
        cutoff: Option<&CutoffView>,
        screening: Option<&ScreeningView>,
    ) {
        if cutoff.is_none() && screening.is_none() {
            return;
        }

        output.push_str("## Screening\n\n");
        if let Some(cutoff) = cutoff {
            output.push_str(&format!(
                "- Closing cutoff {}: {} opportunit(ies) excluded\n",
                cutoff.closing_after, cutoff.excluded
            ));
        }
        if let Some(screening) = screening {
            output.push_str(&format!(
                "- Relevance: {} item(s) rejected, {} opportunit(ies) dropped\n",
                screening.rejected_items, screening.dropped_opportunities
            ));
            if !screening.unmatched_keywords.is_empty() {
                output.push_str(&format!(
                    "- Keywords without matches: {}\n",
                    screening.unmatched_keywords.join(", ")
                ));
            }
        }
        output.push('\n');
    }

    fn render_opportunities(&self, output: &mut String, opportunities: &[OpportunityView]) {
        output.push_str("## Opportunities\n\n");
        if opportunities.is_empty() {
            output.push_str("_No opportunities retained._\n\n");
            return;
        }

        for opportunity in opportunities {
            self.render_opportunity(output, opportunity);
        }
    }

    fn render_opportunity(&self, output: &mut String, opportunity: &OpportunityView) {
        output.push_str(&format!(
            "### {}/{}: {}\n\n",
            Self::escape_markdown_inline(&opportunity.city),
            Self::escape_markdown_inline(&opportunity.uf),
            Self::escape_markdown_inline(&opportunity.object)
        ));

        let estimated = opportunity
            .estimated_value
            .map(Self::format_brl)
            .unwrap_or_else(|| "not informed".to_string());
        let link = if opportunity.pncp_link.is_empty() {
            opportunity.notice_link.clone().unwrap_or_default()
        } else {
            opportunity.pncp_link.clone()
        };

        output.push_str(&format!("- **Id**: `{}`\n", opportunity.id));
        output.push_str(&format!(
            "- **Agency**: {} ({})\n",
            Self::escape_markdown_inline(&opportunity.agency),
            Self::escape_markdown_inline(&opportunity.unit)
        ));
        output.push_str(&format!(
            "- **Notice**: {} (UASG {})\n",
            Self::escape_markdown_inline(&opportunity.notice),
            Self::escape_markdown_inline(&opportunity.uasg)
        ));
        output.push_str(&format!("- **Published**: {}\n", opportunity.published_at));
        output.push_str(&format!(
            "- **Proposals close**: {}\n",
            opportunity.proposals_close_at
        ));
        output.push_str(&format!("- **Estimated value**: {}\n", estimated));
        if opportunity.confidential {
            output.push_str("- **Confidential estimate**: yes\n");
        }
        if !link.is_empty() {
            output.push_str(&format!("- **PNCP**: {}\n", link));
        }
        output.push('\n');

        output.push_str(ITEM_TABLE_HEADER);
        output.push_str(ITEM_TABLE_SEPARATOR);
        for item in &opportunity.items {
            self.render_item_row(output, item);
        }
        output.push('\n');
    }

    fn render_item_row(&self, output: &mut String, item: &ItemView) {
        let unit_price = if item.unit_price == 0.0 {
            "-".to_string()
        } else {
            Self::format_brl(item.unit_price)
        };
        let total = item
            .total
            .map(Self::format_brl)
            .unwrap_or_else(|| "-".to_string());
        let supplier = item.awarded_supplier.as_deref().unwrap_or(&item.supplier);

        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            item.number,
            Self::escape_markdown_table_cell(&item.description),
            Self::format_quantity(item.quantity),
            unit_price,
            total,
            Self::escape_markdown_table_cell(supplier),
            Self::status_label(item.status)
        ));
    }

    fn render_findings(&self, output: &mut String, findings: &[FindingView]) {
        output.push_str("## Integrity Findings\n\n");
        if findings.is_empty() {
            output.push_str("✅ All records passed the integrity check.\n");
            return;
        }

        output.push_str(FINDING_TABLE_HEADER);
        output.push_str(FINDING_TABLE_SEPARATOR);
        for finding in findings {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                finding.severity,
                finding.kind.as_str(),
                Self::escape_markdown_table_cell(&finding.record),
                finding.item.map(|n| n.to_string()).unwrap_or_default(),
                Self::escape_markdown_table_cell(&finding.message)
            ));
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_summary(&mut output, &model.summary);
        self.render_screening(&mut output, model.cutoff.as_ref(), model.screening.as_ref());
        self.render_opportunities(&mut output, &model.opportunities);
        self.render_findings(&mut output, &model.findings);

        Ok(output)
    }
}
