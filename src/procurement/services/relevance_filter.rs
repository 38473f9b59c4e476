use crate::procurement::domain::{Item, Opportunity};
use crate::procurement::policies::RelevanceRules;
use crate::shared::Result;
use std::cell::RefCell;

/// Maximum number of terms per list, to keep matching bounded
const MAX_TERMS: usize = 512;

/// Maximum length of a single term
const MAX_TERM_LENGTH: usize = 100;

/// Why an item description was accepted or rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Contains a blacklisted term
    Blacklisted(String),
    /// Regional keyword inside the regional rule's states
    RegionalAccepted(String),
    /// Regional keyword outside the regional rule's states
    RegionalRejected(String),
    /// Contains a catalogue keyword
    KeywordMatched(String),
    /// Catalogue keywords are configured and none is present
    NoKeywordMatch,
    /// No catalogue keywords configured and nothing disqualified the item
    Accepted,
}

impl Verdict {
    pub fn is_relevant(&self) -> bool {
        matches!(
            self,
            Verdict::RegionalAccepted(_) | Verdict::KeywordMatched(_) | Verdict::Accepted
        )
    }
}

/// Result of screening a collection.
#[derive(Debug, Clone)]
pub struct ScreeningOutcome {
    /// Opportunities with at least one relevant item, restricted to those items
    pub retained: Vec<Opportunity>,
    pub rejected_items: usize,
    pub dropped_opportunities: usize,
}

/// RelevanceFilter - Screens item descriptions with [`RelevanceRules`]
///
/// Terms match at the start of a word, so roots catch their variations
/// ("SUPLEMENT" matches "SUPLEMENTOS") while short keywords do not fire
/// inside unrelated words ("AAS" does not match "SAAS").
#[derive(Debug)]
pub struct RelevanceFilter {
    blacklist: Vec<Term>,
    regional_ufs: Vec<String>,
    regional_keywords: Vec<Term>,
    keywords: Vec<Term>,
}

impl RelevanceFilter {
    /// Validates and compiles the rules.
    ///
    /// # Errors
    /// - A list with more than `MAX_TERMS` entries
    /// - An empty term or one longer than `MAX_TERM_LENGTH`
    /// - A regional UF that is not two letters
    pub fn new(rules: RelevanceRules) -> Result<Self> {
        let regional_ufs = rules
            .regional_ufs
            .iter()
            .map(|uf| {
                let uf = uf.trim().to_uppercase();
                if uf.len() != 2 || !uf.bytes().all(|b| b.is_ascii_alphabetic()) {
                    anyhow::bail!("Regional rule UF '{}' must be a two-letter state code", uf);
                }
                Ok(uf)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            blacklist: compile_terms("blacklist", rules.blacklist)?,
            regional_ufs,
            regional_keywords: compile_terms("regional keyword", rules.regional_keywords)?,
            keywords: compile_terms("keyword", rules.keywords)?,
        })
    }

    /// Classifies an item description issued in state `uf`.
    pub fn classify(&self, description: &str, uf: &str) -> Verdict {
        let text = RelevanceRules::normalize(description);

        if let Some(term) = first_match(&self.blacklist, &text) {
            return Verdict::Blacklisted(term);
        }

        if let Some(term) = first_match(&self.regional_keywords, &text) {
            let uf = uf.trim().to_uppercase();
            return if self.regional_ufs.contains(&uf) {
                Verdict::RegionalAccepted(term)
            } else {
                Verdict::RegionalRejected(term)
            };
        }

        if self.keywords.is_empty() {
            return Verdict::Accepted;
        }

        // every keyword is tested so each one present gets marked as matched
        let hits: Vec<&Term> = self.keywords.iter().filter(|t| t.matches(&text)).collect();
        match hits.first() {
            Some(term) => Verdict::KeywordMatched(term.original.clone()),
            None => Verdict::NoKeywordMatch,
        }
    }

    pub fn is_relevant(&self, description: &str, uf: &str) -> bool {
        self.classify(description, uf).is_relevant()
    }

    /// Keeps only relevant items, dropping opportunities left with none.
    ///
    /// Item order inside each opportunity is preserved.
    pub fn screen(&self, opportunities: Vec<Opportunity>) -> ScreeningOutcome {
        let mut retained = Vec::with_capacity(opportunities.len());
        let mut rejected_items = 0;
        let mut dropped_opportunities = 0;

        for opportunity in opportunities {
            let relevant: Vec<Item> = opportunity
                .items()
                .iter()
                .filter(|item| self.is_relevant(item.description(), opportunity.uf()))
                .cloned()
                .collect();
            rejected_items += opportunity.items().len() - relevant.len();

            if relevant.is_empty() {
                dropped_opportunities += 1;
            } else if relevant.len() == opportunity.items().len() {
                retained.push(opportunity);
            } else {
                retained.push(opportunity.with_items(relevant));
            }
        }

        ScreeningOutcome {
            retained,
            rejected_items,
            dropped_opportunities,
        }
    }

    /// Catalogue keywords that matched no description so far.
    pub fn unmatched_keywords(&self) -> Vec<String> {
        self.keywords
            .iter()
            .filter(|t| !*t.matched.borrow())
            .map(|t| t.original.clone())
            .collect()
    }
}

/// A compiled term with its match bookkeeping
#[derive(Debug)]
struct Term {
    original: String,
    normalized: String,
    matched: RefCell<bool>,
}

impl Term {
    fn matches(&self, text: &str) -> bool {
        let is_match = text.match_indices(self.normalized.as_str()).any(|(idx, _)| {
            text[..idx]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric())
        });
        if is_match {
            *self.matched.borrow_mut() = true;
        }
        is_match
    }
}

fn first_match(terms: &[Term], text: &str) -> Option<String> {
    terms
        .iter()
        .find(|term| term.matches(text))
        .map(|term| term.original.clone())
}

fn compile_terms(list: &str, terms: Vec<String>) -> Result<Vec<Term>> {
    if terms.len() > MAX_TERMS {
        anyhow::bail!(
            "Too many {} terms: {} (maximum: {})",
            list,
            terms.len(),
            MAX_TERMS
        );
    }

    terms
        .into_iter()
        .map(|original| {
            let normalized = RelevanceRules::normalize(&original);
            if normalized.is_empty() {
                anyhow::bail!("A {} term cannot be empty", list);
            }
            if original.chars().count() > MAX_TERM_LENGTH {
                anyhow::bail!(
                    "The {} term '{}...' is too long (maximum: {} characters)",
                    list,
                    original.chars().take(20).collect::<String>(),
                    MAX_TERM_LENGTH
                );
            }
            Ok(Term {
                original,
                normalized,
                matched: RefCell::new(false),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procurement::services::PayloadLoader;
    use serde_json::json;

    fn filter(keywords: &[&str]) -> RelevanceFilter {
        RelevanceFilter::new(
            RelevanceRules::default().with_keywords(keywords.iter().map(|k| k.to_string()).collect()),
        )
        .unwrap()
    }

    #[test]
    fn test_blacklist_wins() {
        let filter = filter(&["SORO"]);
        assert_eq!(
            filter.classify("Soro fisiológico para limpeza predial", "SP"),
            Verdict::Blacklisted("LIMPEZA PREDIAL".to_string())
        );
    }

    #[test]
    fn test_regional_rule() {
        let filter = filter(&[]);
        assert_eq!(
            filter.classify("Dieta enteral hipercalórica", "BA"),
            Verdict::RegionalAccepted("DIETA".to_string())
        );
        assert_eq!(
            filter.classify("Dieta enteral hipercalórica", "SP"),
            Verdict::RegionalRejected("DIETA".to_string())
        );
        assert!(filter.is_relevant("Suplementos proteicos", "pe"));
    }

    #[test]
    fn test_keywords_required_when_configured() {
        let filter = filter(&["Dipirona", "AAS"]);
        assert_eq!(
            filter.classify("DIPIRONA SÓDICA 500MG", "SP"),
            Verdict::KeywordMatched("Dipirona".to_string())
        );
        assert_eq!(
            filter.classify("Luva de procedimento", "SP"),
            Verdict::NoKeywordMatch
        );
    }

    #[test]
    fn test_word_start_boundary() {
        let filter = filter(&["AAS"]);
        assert_eq!(filter.classify("Licença SAAS", "SP"), Verdict::Blacklisted("SAAS".to_string()));
        assert_eq!(filter.classify("Licenca XSAAS", "SP"), Verdict::NoKeywordMatch);
        assert!(filter.is_relevant("AAS 100mg", "SP"));
        assert!(filter.is_relevant("Comprimido (AAS) 100mg", "SP"));
    }

    #[test]
    fn test_no_keywords_accepts() {
        assert_eq!(filter(&[]).classify("Pinavério Brometo", "SP"), Verdict::Accepted);
    }

    #[test]
    fn test_unmatched_keywords() {
        let filter = filter(&["DIPIRONA", "AMOXICILINA"]);
        assert!(filter.is_relevant("Dipirona gotas", "SP"));
        assert_eq!(filter.unmatched_keywords(), vec!["AMOXICILINA".to_string()]);
    }

    #[test]
    fn test_every_keyword_in_a_description_counts_as_matched() {
        let filter = filter(&["DIPIRONA", "PARACETAMOL", "AGULHA"]);
        assert_eq!(
            filter.classify("Kit DIPIRONA e PARACETAMOL 500mg", "SP"),
            Verdict::KeywordMatched("DIPIRONA".to_string())
        );
        assert_eq!(filter.unmatched_keywords(), vec!["AGULHA".to_string()]);
    }

    #[test]
    fn test_invalid_rules() {
        let empty = RelevanceRules::default().with_keywords(vec!["  ".to_string()]);
        assert!(RelevanceFilter::new(empty).is_err());

        let long = RelevanceRules::default().with_keywords(vec!["X".repeat(101)]);
        let err = RelevanceFilter::new(long).unwrap_err();
        assert!(err.to_string().contains("too long"));

        let many = RelevanceRules::default().with_keywords(vec!["X".to_string(); 513]);
        assert!(RelevanceFilter::new(many).unwrap_err().to_string().contains("Too many"));

        let uf = RelevanceRules::default()
            .with_regional_rule(vec!["Bahia".to_string()], vec!["DIETA".to_string()]);
        assert!(RelevanceFilter::new(uf).is_err());
    }

    #[test]
    fn test_screen_keeps_order_and_drops_empty() {
        let item = |n: u32, desc: &str| {
            json!({"item": n, "desc": desc, "qtd": 1.0, "unitario": 0, "total": null,
                   "fornecedor": "EM ANDAMENTO / SEM RESULTADO", "vitoria": false})
        };
        let record = |id: &str, items: Vec<serde_json::Value>| {
            json!({"id": id, "uf": "SP", "cidade": "Campinas", "unidade": "U", "orgao": "O",
                   "data_pub": "2026-01-02T07:00:00", "data_encerramento_proposta": "2026-01-20T09:00:00",
                   "objeto": "x", "edital": "e", "uasg": "1", "valor_total_estimado": 0.0,
                   "is_sigiloso": false, "qtd_total_itens": items.len(), "link_pncp": "l",
                   "itens": items})
        };
        let payload = json!([
            record("A", vec![item(3, "Metformina"), item(1, "Pneu aro 13"), item(2, "Lubiprostona")]),
            record("B", vec![item(1, "Cadeira giratória")]),
        ]);
        let opportunities = PayloadLoader::parse(&payload.to_string()).unwrap();

        let outcome = filter(&[]).screen(opportunities);
        assert_eq!(outcome.retained.len(), 1);
        assert_eq!(outcome.rejected_items, 2);
        assert_eq!(outcome.dropped_opportunities, 1);
        let numbers: Vec<u32> = outcome.retained[0].items().iter().map(|i| i.number()).collect();
        assert_eq!(numbers, vec![3, 2]);
        assert_eq!(outcome.retained[0].declared_item_count(), 3);
    }
}
