/// Data Transfer Objects for application layer
///
/// DTOs carry data between the use case and the adapters, keeping the
/// domain layer isolated.
mod output_format;
mod report_metadata;
mod screening_request;
mod screening_response;

pub use output_format::OutputFormat;
pub use report_metadata::ReportMetadata;
pub use screening_request::{ScreeningRequest, ScreeningRequestBuilder};
pub use screening_response::{CutoffStats, ScreeningResponse, ScreeningStats};
