use crate::procurement::policies::RelevanceRules;
use crate::procurement::services::ClosingCutoff;
use crate::shared::error::RadarError;
use crate::shared::Result;

/// ScreeningRequest - What to do with a loaded payload
#[derive(Debug, Clone, Default)]
pub struct ScreeningRequest {
    /// Fail on integrity warnings as well as errors
    pub strict: bool,
    /// Keep only opportunities still open at this moment
    pub closing_cutoff: Option<ClosingCutoff>,
    /// Keep only relevant items under these rules
    pub relevance: Option<RelevanceRules>,
}

impl ScreeningRequest {
    pub fn new(
        strict: bool,
        closing_cutoff: Option<ClosingCutoff>,
        relevance: Option<RelevanceRules>,
    ) -> Self {
        Self {
            strict,
            closing_cutoff,
            relevance,
        }
    }

    pub fn builder() -> ScreeningRequestBuilder {
        ScreeningRequestBuilder::default()
    }
}

/// Builder for [`ScreeningRequest`] taking CLI/config shaped inputs
#[derive(Debug, Default)]
pub struct ScreeningRequestBuilder {
    strict: bool,
    closing_after: Option<String>,
    relevance: Option<RelevanceRules>,
}

impl ScreeningRequestBuilder {
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Cutoff as `YYYY-MM-DD` or a full timestamp; parsed in `build`.
    pub fn closing_after(mut self, closing_after: impl Into<String>) -> Self {
        self.closing_after = Some(closing_after.into());
        self
    }

    pub fn relevance(mut self, rules: RelevanceRules) -> Self {
        self.relevance = Some(rules);
        self
    }

    /// # Errors
    /// Returns an error when the closing cutoff cannot be parsed
    pub fn build(self) -> Result<ScreeningRequest> {
        let closing_cutoff = self
            .closing_after
            .as_deref()
            .map(|text| {
                ClosingCutoff::parse(text).map_err(|e| RadarError::Validation {
                    message: format!("{:#}", e),
                })
            })
            .transpose()?;

        Ok(ScreeningRequest::new(
            self.strict,
            closing_cutoff,
            self.relevance,
        ))
    }
}
