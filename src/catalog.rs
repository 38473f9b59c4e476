//! The opportunity collection shipped with the crate.
//!
//! The payload is compiled into the binary and decoded on first access;
//! afterwards every caller shares the same read-only slice.

use crate::procurement::domain::Opportunity;
use crate::procurement::services::PayloadLoader;
use crate::shared::error::RadarError;
use crate::shared::Result;
use std::sync::OnceLock;

/// Raw text of the embedded payload.
pub const EMBEDDED_PAYLOAD: &str = include_str!("../data/oportunidades.json");

/// Label used for the embedded payload in messages and reports.
pub const EMBEDDED_SOURCE_LABEL: &str = "embedded payload";

static CATALOG: OnceLock<Vec<Opportunity>> = OnceLock::new();

/// Returns the whole embedded collection.
pub fn opportunities() -> Result<&'static [Opportunity]> {
    if let Some(catalog) = CATALOG.get() {
        return Ok(catalog);
    }

    let parsed = PayloadLoader::parse(EMBEDDED_PAYLOAD).map_err(|e| RadarError::PayloadSchema {
        source_label: EMBEDDED_SOURCE_LABEL.to_string(),
        details: e.to_string(),
    })?;
    Ok(CATALOG.get_or_init(|| parsed))
}
