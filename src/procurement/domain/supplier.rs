use serde::Serialize;
use std::fmt;

/// Wire value meaning "no award yet" for an item.
pub const PENDING_SUPPLIER: &str = "EM ANDAMENTO / SEM RESULTADO";

/// Status words the portal writes in place of a supplier when an item ends
/// without an award (cancelled, failed, deserted, annulled).
const UNSUCCESSFUL_MARKERS: [&str; 4] = ["CANCELAD", "FRACASSAD", "DESERT", "ANULAD"];

/// Award state of a single item, derived from its supplier field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AwardStatus {
    /// Still open, or closed with no published result yet
    Pending,
    /// A supplier has been named
    Awarded,
    /// Cancelled, failed, deserted or annulled
    Unsuccessful,
}

impl fmt::Display for AwardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwardStatus::Pending => write!(f, "pending"),
            AwardStatus::Awarded => write!(f, "awarded"),
            AwardStatus::Unsuccessful => write!(f, "unsuccessful"),
        }
    }
}

/// Supplier field of an item.
///
/// Keeps the raw wire string untouched so a payload re-serializes exactly as
/// it was read; the award state is derived on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Supplier(String);

impl Supplier {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True only for the exact sentinel string.
    pub fn is_pending_sentinel(&self) -> bool {
        self.0 == PENDING_SUPPLIER
    }

    pub fn status(&self) -> AwardStatus {
        let upper = self.0.trim().to_uppercase();
        if upper.is_empty() || self.is_pending_sentinel() || upper.starts_with("EM ANDAMENTO") {
            AwardStatus::Pending
        } else if UNSUCCESSFUL_MARKERS.iter().any(|m| upper.contains(m)) {
            AwardStatus::Unsuccessful
        } else {
            AwardStatus::Awarded
        }
    }

    /// The supplier's name when the item has been awarded.
    pub fn awarded_name(&self) -> Option<&str> {
        match self.status() {
            AwardStatus::Awarded => Some(self.0.trim()),
            _ => None,
        }
    }
}

impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
