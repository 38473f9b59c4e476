//! Configuration file support for pncp-radar.
//!
//! Provides YAML-based configuration through `pncp-radar.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::procurement::policies::RelevanceRules;
use crate::procurement::services::ClosingCutoff;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pncp-radar.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub input: Option<PathBuf>,
    pub strict: Option<bool>,
    pub closing_after: Option<String>,
    pub screening: Option<ScreeningConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// `screening:` section.
#[derive(Debug, Deserialize, Default)]
pub struct ScreeningConfig {
    pub enabled: Option<bool>,
    pub keywords: Option<Vec<String>>,
    /// Replaces the default blacklist
    pub blacklist: Option<Vec<String>>,
    /// Appended to the active blacklist
    pub extra_blacklist: Option<Vec<String>>,
    pub regional_rule: Option<RegionalRuleConfig>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// `screening.regional_rule:` section.
#[derive(Debug, Deserialize)]
pub struct RegionalRuleConfig {
    pub ufs: Vec<String>,
    pub keywords: Vec<String>,
}

impl ScreeningConfig {
    /// Relevance rules with this section applied over the defaults.
    pub fn to_rules(&self) -> RelevanceRules {
        let mut rules = RelevanceRules::default();
        if let Some(blacklist) = &self.blacklist {
            rules = rules.with_blacklist(blacklist.clone());
        }
        if let Some(extra) = &self.extra_blacklist {
            rules = rules.with_extra_blacklist(extra.clone());
        }
        if let Some(regional) = &self.regional_rule {
            rules = rules.with_regional_rule(regional.ufs.clone(), regional.keywords.clone());
        }
        if let Some(keywords) = &self.keywords {
            rules = rules.with_keywords(keywords.clone());
        }
        rules
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        OutputFormat::from_str(format).map_err(|e| {
            anyhow::anyhow!("Invalid config: format: {}\n\n💡 Hint: Use json, markdown or payload.", e)
        })?;
    }

    if let Some(closing_after) = &config.closing_after {
        ClosingCutoff::parse(closing_after).with_context(|| {
            format!(
                "Invalid config: closing_after '{}' is not a date.\n\n\
                 💡 Hint: Use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS.",
                closing_after
            )
        })?;
    }

    if let Some(screening) = &config.screening {
        validate_terms("screening.keywords", screening.keywords.as_deref())?;
        validate_terms("screening.blacklist", screening.blacklist.as_deref())?;
        validate_terms(
            "screening.extra_blacklist",
            screening.extra_blacklist.as_deref(),
        )?;

        if let Some(regional) = &screening.regional_rule {
            validate_terms("screening.regional_rule.keywords", Some(&regional.keywords))?;
            for (i, uf) in regional.ufs.iter().enumerate() {
                let uf = uf.trim();
                if uf.len() != 2 || !uf.bytes().all(|b| b.is_ascii_alphabetic()) {
                    bail!(
                        "Invalid config: screening.regional_rule.ufs[{}] '{}' is not a state code.\n\n\
                         💡 Hint: Use two-letter codes such as BA or PE.",
                        i,
                        uf
                    );
                }
            }
        }
    }

    Ok(())
}

fn validate_terms(field: &str, terms: Option<&[String]>) -> Result<()> {
    for (i, term) in terms.unwrap_or_default().iter().enumerate() {
        if term.trim().is_empty() {
            bail!(
                "Invalid config: {}[{}] must not be empty.\n\n\
                 💡 Hint: Remove the empty entry or give it a value.",
                field,
                i
            );
        }
    }
    Ok(())
}

/// Names of unknown fields, nested ones prefixed with their section.
pub fn unknown_field_names(config: &ConfigFile) -> Vec<String> {
    let mut names: Vec<String> = config.unknown_fields.keys().cloned().collect();
    if let Some(screening) = &config.screening {
        names.extend(
            screening
                .unknown_fields
                .keys()
                .map(|key| format!("screening.{}", key)),
        );
    }
    names.sort();
    names
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in unknown_field_names(config) {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
