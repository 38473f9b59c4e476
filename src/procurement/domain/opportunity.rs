use super::item::Item;
use super::opportunity_id::OpportunityId;
use super::supplier::AwardStatus;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One public-procurement notice with its ordered line items.
///
/// Field order matches the wire layout so a re-serialized payload reads like
/// the original export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opportunity {
    pub(crate) id: OpportunityId,
    pub(crate) uf: String,
    #[serde(rename = "cidade")]
    pub(crate) city: String,
    #[serde(rename = "unidade")]
    pub(crate) unit: String,
    #[serde(rename = "data_pub")]
    pub(crate) published_at: NaiveDateTime,
    #[serde(rename = "data_encerramento_proposta")]
    pub(crate) proposals_close_at: NaiveDateTime,
    #[serde(rename = "orgao")]
    pub(crate) agency: String,
    #[serde(rename = "objeto")]
    pub(crate) object: String,
    #[serde(rename = "edital")]
    pub(crate) notice: String,
    pub(crate) uasg: String,
    #[serde(rename = "valor_total_estimado")]
    pub(crate) estimated_total: f64,
    #[serde(rename = "is_sigiloso")]
    pub(crate) confidential: bool,
    #[serde(rename = "qtd_total_itens")]
    pub(crate) declared_item_count: u32,
    #[serde(rename = "link_pncp")]
    pub(crate) pncp_link: String,
    #[serde(rename = "itens")]
    pub(crate) items: Vec<Item>,
}

impl Opportunity {
    pub fn id(&self) -> &OpportunityId {
        &self.id
    }

    /// Two-letter state code.
    pub fn uf(&self) -> &str {
        &self.uf
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Requesting unit.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Issuing body.
    pub fn agency(&self) -> &str {
        &self.agency
    }

    pub fn published_at(&self) -> NaiveDateTime {
        self.published_at
    }

    pub fn proposals_close_at(&self) -> NaiveDateTime {
        self.proposals_close_at
    }

    /// Object of the purchase, exactly as supplied (trailing spaces included).
    pub fn object(&self) -> &str {
        &self.object
    }

    pub fn notice(&self) -> &str {
        &self.notice
    }

    pub fn uasg(&self) -> &str {
        &self.uasg
    }

    /// Raw estimated total; 0.0 encodes "unknown".
    pub fn estimated_total(&self) -> f64 {
        self.estimated_total
    }

    pub fn estimated_value(&self) -> Option<f64> {
        (self.estimated_total != 0.0).then_some(self.estimated_total)
    }

    pub fn is_confidential(&self) -> bool {
        self.confidential
    }

    /// Item count declared by the source. Not necessarily `items().len()`.
    pub fn declared_item_count(&self) -> u32 {
        self.declared_item_count
    }

    pub fn pncp_link(&self) -> &str {
        &self.pncp_link
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn count_by_status(&self, status: AwardStatus) -> usize {
        self.items
            .iter()
            .filter(|item| item.award_status() == status)
            .count()
    }

    /// Sum of the supplied totals of awarded items.
    pub fn awarded_value(&self) -> f64 {
        self.items
            .iter()
            .filter(|item| item.award_status() == AwardStatus::Awarded)
            .filter_map(Item::total)
            .sum()
    }

    /// Copy of this notice restricted to `items`.
    pub(crate) fn with_items(&self, items: Vec<Item>) -> Self {
        Self {
            id: self.id.clone(),
            uf: self.uf.clone(),
            city: self.city.clone(),
            unit: self.unit.clone(),
            published_at: self.published_at,
            proposals_close_at: self.proposals_close_at,
            agency: self.agency.clone(),
            object: self.object.clone(),
            notice: self.notice.clone(),
            uasg: self.uasg.clone(),
            estimated_total: self.estimated_total,
            confidential: self.confidential,
            declared_item_count: self.declared_item_count,
            pncp_link: self.pncp_link.clone(),
            items,
        }
    }
}
