use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// PayloadFormatter adapter writing the retained records back in their wire
/// shape, as a JSON array the loader accepts again
pub struct PayloadFormatter;

impl PayloadFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PayloadFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for PayloadFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = serde_json::to_string_pretty(&model.records)
            .map_err(|e| anyhow::anyhow!("Failed to serialize payload: {}", e))?;
        output.push('\n');
        Ok(output)
    }
}
