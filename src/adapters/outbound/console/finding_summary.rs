use crate::application::read_models::{FindingView, ReportReadModel};
use crate::procurement::services::Severity;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Findings listed in full before the summary switches to a count.
const MAX_LISTED_FINDINGS: usize = 20;

/// Prints the integrity verdict of a run to stderr, colored when stderr is a
/// terminal.
pub struct FindingSummaryPrinter {
    colored: bool,
}

impl FindingSummaryPrinter {
    pub fn new() -> Self {
        Self {
            colored: std::io::stderr().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { colored: false }
    }

    pub fn print(&self, model: &ReportReadModel) {
        eprint!("{}", self.render(model));
    }

    pub fn render(&self, model: &ReportReadModel) -> String {
        let summary = &model.summary;
        let mut output = String::new();

        for finding in model.findings.iter().take(MAX_LISTED_FINDINGS) {
            output.push_str(&format!("   {}\n", self.render_finding(finding)));
        }
        if model.findings.len() > MAX_LISTED_FINDINGS {
            output.push_str(&format!(
                "   ... and {} more (see the report)\n",
                model.findings.len() - MAX_LISTED_FINDINGS
            ));
        }

        let verdict = if summary.passed {
            let text = format!(
                "✅ Integrity: passed ({} error(s), {} warning(s){})",
                summary.error_count,
                summary.warning_count,
                if summary.strict { ", strict" } else { "" }
            );
            self.paint_ok(&text)
        } else {
            let text = format!(
                "❌ Integrity: failed ({} error(s), {} warning(s){})",
                summary.error_count,
                summary.warning_count,
                if summary.strict { ", strict" } else { "" }
            );
            self.paint_error(&text)
        };
        output.push_str(&verdict);
        output.push('\n');
        output
    }

    fn render_finding(&self, finding: &FindingView) -> String {
        let label = match finding.severity {
            Severity::Error => self.paint_error("error"),
            Severity::Warning => self.paint_warning("warning"),
        };
        match finding.item {
            Some(item) => format!(
                "[{}] {} item {}: {}",
                label, finding.record, item, finding.message
            ),
            None => format!("[{}] {}: {}", label, finding.record, finding.message),
        }
    }

    fn paint_ok(&self, text: &str) -> String {
        if self.colored {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_warning(&self, text: &str) -> String {
        if self.colored {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_error(&self, text: &str) -> String {
        if self.colored {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for FindingSummaryPrinter {
    fn default() -> Self {
        Self::new()
    }
}
