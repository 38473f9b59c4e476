/// Output format of a run
///
/// Shared by the CLI (inbound adapter) and the formatters (outbound adapters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON report (default)
    Json,
    /// Human-readable Markdown report
    Markdown,
    /// The retained records re-serialized in their wire shape
    Payload,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "payload" => Ok(OutputFormat::Payload),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json', 'markdown' or 'payload'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Payload => write!(f, "payload"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
        assert_eq!(
            OutputFormat::from_str("Markdown").unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(
            OutputFormat::from_str("payload").unwrap(),
            OutputFormat::Payload
        );
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("csv").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("csv"));
        assert!(error.contains("payload"));
        assert!(OutputFormat::from_str("").is_err());
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in [OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Payload] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }
}
