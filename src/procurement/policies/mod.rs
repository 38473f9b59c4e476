mod relevance_rules;

pub use relevance_rules::RelevanceRules;
