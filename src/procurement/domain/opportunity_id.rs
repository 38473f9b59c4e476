use serde::Serialize;
use std::fmt;

/// Base URL of the public notice pages on the PNCP portal.
pub const PNCP_NOTICE_BASE_URL: &str = "https://pncp.gov.br/app/editais";

const CNPJ_LENGTH: usize = 14;
const YEAR_LENGTH: usize = 4;

/// Identifier of a tender notice.
///
/// Opaque on the wire. PNCP identifiers are the issuing body's CNPJ, the
/// purchase year and the purchase sequence number concatenated, which
/// [`OpportunityId::reference`] recovers when the shape allows it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OpportunityId(String);

impl OpportunityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Splits the identifier into CNPJ, year and sequence.
    ///
    /// Returns `None` for identifiers that are not all digits or too short to
    /// carry a sequence number.
    pub fn reference(&self) -> Option<PncpReference> {
        let id = self.0.as_str();
        if id.len() <= CNPJ_LENGTH + YEAR_LENGTH || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let (cnpj, rest) = id.split_at(CNPJ_LENGTH);
        let (year, sequence) = rest.split_at(YEAR_LENGTH);
        Some(PncpReference {
            cnpj: cnpj.to_string(),
            year: year.to_string(),
            sequence: sequence.to_string(),
        })
    }
}

impl fmt::Display for OpportunityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Location of a purchase in the PNCP registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PncpReference {
    pub cnpj: String,
    pub year: String,
    pub sequence: String,
}

impl PncpReference {
    /// Canonical public link of the notice.
    pub fn notice_link(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            PNCP_NOTICE_BASE_URL, self.cnpj, self.year, self.sequence
        )
    }
}
