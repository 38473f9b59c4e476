use crate::procurement::domain::Opportunity;
use crate::shared::Result;
use chrono::{NaiveDate, NaiveDateTime};

/// ClosingCutoff - Keeps opportunities still accepting proposals at a given moment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosingCutoff {
    cutoff: NaiveDateTime,
}

impl ClosingCutoff {
    pub fn new(cutoff: NaiveDateTime) -> Self {
        Self { cutoff }
    }

    /// Parses `YYYY-MM-DD` (midnight) or `YYYY-MM-DDTHH:MM:SS`.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Ok(Self::new(date.and_time(chrono::NaiveTime::MIN)));
        }
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .map(Self::new)
            .map_err(|_| {
                anyhow::anyhow!(
                    "Invalid closing cutoff '{}'. Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS",
                    text
                )
            })
    }

    pub fn cutoff(&self) -> NaiveDateTime {
        self.cutoff
    }

    /// True when proposals close at or after the cutoff.
    pub fn admits(&self, opportunity: &Opportunity) -> bool {
        opportunity.proposals_close_at() >= self.cutoff
    }

    /// Splits off the admitted opportunities, returning them with the number
    /// of excluded ones.
    pub fn retain(&self, opportunities: Vec<Opportunity>) -> (Vec<Opportunity>, usize) {
        let total = opportunities.len();
        let kept: Vec<Opportunity> = opportunities
            .into_iter()
            .filter(|opportunity| self.admits(opportunity))
            .collect();
        let excluded = total - kept.len();
        (kept, excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procurement::services::PayloadLoader;
    use serde_json::json;

    fn opportunities() -> Vec<Opportunity> {
        let record = |id: &str, closing: &str| {
            json!({"id": id, "uf": "SP", "cidade": "c", "unidade": "u", "orgao": "o",
                   "data_pub": "2026-01-02T07:00:00", "data_encerramento_proposta": closing,
                   "objeto": "x", "edital": "e", "uasg": "1", "valor_total_estimado": 0.0,
                   "is_sigiloso": false, "qtd_total_itens": 0, "link_pncp": "l", "itens": []})
        };
        let payload = json!([
            record("early", "2026-01-14T09:00:00"),
            record("edge", "2026-01-15T00:00:00"),
            record("late", "2026-02-02T08:00:00"),
        ]);
        PayloadLoader::parse(&payload.to_string()).unwrap()
    }

    #[test]
    fn test_parse_date_is_midnight() {
        let cutoff = ClosingCutoff::parse("2026-01-15").unwrap();
        assert_eq!(cutoff.cutoff().to_string(), "2026-01-15 00:00:00");
    }

    #[test]
    fn test_parse_full_timestamp() {
        let cutoff = ClosingCutoff::parse("2025-12-01T23:59:59").unwrap();
        assert_eq!(cutoff.cutoff().to_string(), "2025-12-01 23:59:59");
    }

    #[test]
    fn test_parse_invalid() {
        let err = ClosingCutoff::parse("15/01/2026").unwrap_err();
        assert!(err.to_string().contains("Invalid closing cutoff"));
    }

    #[test]
    fn test_retain_is_inclusive() {
        let cutoff = ClosingCutoff::parse("2026-01-15").unwrap();
        let (kept, excluded) = cutoff.retain(opportunities());
        let ids: Vec<&str> = kept.iter().map(|o| o.id().as_str()).collect();
        assert_eq!(ids, vec!["edge", "late"]);
        assert_eq!(excluded, 1);
    }
}
