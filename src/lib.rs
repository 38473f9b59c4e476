//! pncp-radar - typed catalogue, validator and screener for PNCP opportunities
//!
//! This library loads public-procurement opportunity payloads exported from
//! Brazil's Portal Nacional de Contratações Públicas, checks their integrity,
//! screens them by closing date and item relevance, and renders reports.
//! It follows a hexagonal layout.
//!
//! # Architecture
//!
//! - **Domain Layer** (`procurement`): records, loader, integrity and screening rules
//! - **Application Layer** (`application`): use cases, DTOs, read models, factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Catalog** (`catalog`): the dataset compiled into the crate
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pncp_radar::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = ScreenOpportunitiesUseCase::new(
//!     EmbeddedPayloadReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ScreeningRequest::builder()
//!     .closing_after("2026-01-16")
//!     .relevance(RelevanceRules::default())
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! let model = ReportReadModelBuilder::build(&response);
//! let output = MarkdownFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ports;
pub mod procurement;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{FindingSummaryPrinter, StderrProgressReporter};
    pub use crate::adapters::outbound::embedded::EmbeddedPayloadReader;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, PayloadFormatter,
    };
    pub use crate::application::dto::{OutputFormat, ScreeningRequest, ScreeningResponse};
    pub use crate::application::read_models::{ReportReadModel, ReportReadModelBuilder};
    pub use crate::application::use_cases::ScreenOpportunitiesUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, PayloadReader, ProgressReporter, ReportFormatter,
    };
    pub use crate::procurement::domain::{
        AwardStatus, Item, Opportunity, OpportunityId, Supplier, PENDING_SUPPLIER,
    };
    pub use crate::procurement::policies::RelevanceRules;
    pub use crate::procurement::services::{
        ClosingCutoff, Finding, FindingKind, IntegrityChecker, IntegrityReport, PayloadError,
        PayloadLoader, RelevanceFilter, Severity,
    };
    pub use crate::shared::Result;
}
