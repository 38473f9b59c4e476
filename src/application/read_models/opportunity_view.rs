//! View of one opportunity and its items

use crate::procurement::domain::AwardStatus;
use serde::Serialize;

/// View representation of a procurement opportunity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpportunityView {
    pub id: String,
    pub uf: String,
    pub city: String,
    pub unit: String,
    pub agency: String,
    /// Object text with surrounding whitespace trimmed
    pub object: String,
    pub notice: String,
    pub uasg: String,
    pub published_at: String,
    pub proposals_close_at: String,
    /// `None` when the payload carries the 0.0 "unknown" marker
    pub estimated_value: Option<f64>,
    pub confidential: bool,
    pub declared_item_count: u32,
    pub pncp_link: String,
    /// Notice page derived from the id, when the id has the PNCP layout
    pub notice_link: Option<String>,
    pub awarded_value: f64,
    pub items: Vec<ItemView>,
}

/// View representation of an item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub number: u32,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: Option<f64>,
    pub computed_total: Option<f64>,
    pub supplier: String,
    /// Supplier name, only for awarded items
    pub awarded_supplier: Option<String>,
    pub status: AwardStatus,
    pub won: bool,
}
