use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::procurement::services::ClosingCutoff;

/// Validate, screen and report PNCP procurement opportunities
#[derive(Parser, Debug)]
#[command(name = "pncp-radar")]
#[command(version)]
#[command(
    about = "Validate, screen and report PNCP procurement opportunities",
    long_about = "Loads a PNCP opportunity payload (a JSON array, or the JavaScript module \
                  declaring it), checks its integrity, optionally screens it by closing date \
                  and item relevance, and writes a report. Without --input the dataset \
                  compiled into the binary is used."
)]
pub struct Args {
    /// Payload file: JSON array or `const x = [...]` module (defaults to the embedded dataset)
    #[arg(short, long, value_name = "PAYLOAD")]
    pub input: Option<PathBuf>,

    /// Output format: json, markdown or payload [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./pncp-radar.config.yml when present)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Keep only opportunities whose proposals close at or after DATE
    /// (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
    #[arg(long, value_name = "DATE", value_parser = parse_closing_after)]
    pub closing_after: Option<String>,

    /// Drop items that are not relevant to a health-supply catalogue
    #[arg(long)]
    pub screen: bool,

    /// Catalogue keyword; implies --screen. Can be specified multiple times:
    /// -k DIPIRONA -k "SORO FISIOLOGICO"
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Treat integrity warnings as failures
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_closing_after(value: &str) -> Result<String, String> {
    ClosingCutoff::parse(value)
        .map(|_| value.trim().to_string())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["pncp-radar"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.format.is_none());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert!(args.closing_after.is_none());
        assert!(!args.screen);
        assert!(args.keywords.is_empty());
        assert!(!args.strict);
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "pncp-radar",
            "-i",
            "dados/oportunidades.js",
            "-f",
            "md",
            "-o",
            "report.md",
            "--closing-after",
            "2026-01-16",
            "-k",
            "DIPIRONA",
            "-k",
            "AGULHA",
            "--strict",
        ])
        .unwrap();

        assert_eq!(args.input, Some(PathBuf::from("dados/oportunidades.js")));
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(args.output, Some(PathBuf::from("report.md")));
        assert_eq!(args.closing_after.as_deref(), Some("2026-01-16"));
        assert_eq!(args.keywords, vec!["DIPIRONA", "AGULHA"]);
        assert!(args.strict);
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Args::try_parse_from(["pncp-radar", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_invalid_closing_after_rejected() {
        let err = Args::try_parse_from(["pncp-radar", "--closing-after", "16/01/2026"])
            .unwrap_err()
            .to_string();
        assert!(err.contains("Invalid closing cutoff"));
    }

    #[test]
    fn test_closing_after_accepts_timestamp() {
        let args =
            Args::try_parse_from(["pncp-radar", "--closing-after", "2026-01-16T09:30:00"]).unwrap();
        assert_eq!(args.closing_after.as_deref(), Some("2026-01-16T09:30:00"));
    }
}
