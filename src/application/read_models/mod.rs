//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of a screening run for the formatters.

mod opportunity_view;
mod report_read_model;
mod report_read_model_builder;

pub use opportunity_view::{ItemView, OpportunityView};
pub use report_read_model::{
    CutoffView, FindingView, ReportMetadataView, ReportReadModel, ScreeningView, SummaryView,
};
pub use report_read_model_builder::ReportReadModelBuilder;
