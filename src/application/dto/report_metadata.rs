use chrono::Utc;
use uuid::Uuid;

/// Tool name recorded in report metadata
pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// Tool version recorded in report metadata
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// ReportMetadata value object: when, by what, and which run produced a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadata {
    generated_at: String,
    tool_name: String,
    tool_version: String,
    run_id: String,
    source: String,
}

impl ReportMetadata {
    pub fn new(
        generated_at: String,
        tool_name: String,
        tool_version: String,
        run_id: String,
        source: String,
    ) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
            run_id,
            source,
        }
    }

    /// Metadata for a run starting now.
    pub fn for_source(source: impl Into<String>) -> Self {
        Self::new(
            Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            TOOL_NAME.to_string(),
            TOOL_VERSION.to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
            source.into(),
        )
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Label of the payload the report was built from
    pub fn source(&self) -> &str {
        &self.source
    }
}
