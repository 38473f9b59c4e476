use crate::application::read_models::ReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering a screening report
pub trait ReportFormatter {
    /// Formats the report read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ReportReadModel) -> Result<String>;
}
