use super::supplier::{AwardStatus, Supplier};
use serde::Serialize;

/// One line item of a tender notice.
///
/// Owned exclusively by its [`Opportunity`](super::Opportunity). `total` is
/// supplied by the source feed independently of `unit_price`, so it can be
/// null even when a price is known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    #[serde(rename = "item")]
    pub(crate) number: u32,
    #[serde(rename = "desc")]
    pub(crate) description: String,
    #[serde(rename = "qtd")]
    pub(crate) quantity: f64,
    #[serde(rename = "unitario")]
    pub(crate) unit_price: f64,
    pub(crate) total: Option<f64>,
    #[serde(rename = "fornecedor")]
    pub(crate) supplier: Supplier,
    #[serde(rename = "vitoria")]
    pub(crate) won: bool,
}

impl Item {
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Unit price; zero means the award is still pending.
    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Total as supplied by the feed.
    pub fn total(&self) -> Option<f64> {
        self.total
    }

    pub fn supplier(&self) -> &Supplier {
        &self.supplier
    }

    /// Award-won flag as supplied by the feed.
    pub fn won(&self) -> bool {
        self.won
    }

    pub fn is_priced(&self) -> bool {
        self.unit_price != 0.0
    }

    /// Quantity times unit price, when a unit price is known.
    pub fn computed_total(&self) -> Option<f64> {
        self.is_priced().then(|| self.quantity * self.unit_price)
    }

    pub fn award_status(&self) -> AwardStatus {
        self.supplier.status()
    }
}
