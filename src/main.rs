use pncp_radar::adapters::outbound::console::{FindingSummaryPrinter, StderrProgressReporter};
use pncp_radar::application::dto::{OutputFormat, ScreeningRequest};
use pncp_radar::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType, ReaderFactory, ReaderType,
};
use pncp_radar::application::read_models::ReportReadModelBuilder;
use pncp_radar::application::use_cases::ScreenOpportunitiesUseCase;
use pncp_radar::cli::Args;
use pncp_radar::config::{self, ConfigFile};
use pncp_radar::procurement::policies::RelevanceRules;
use pncp_radar::shared::error::ExitCode;
use pncp_radar::shared::Result;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

fn main() {
    let args = Args::parse_args();

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

/// Effective options after merging the config file under the CLI flags.
#[derive(Debug, PartialEq)]
struct Settings {
    input: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
    strict: bool,
    closing_after: Option<String>,
    relevance: Option<RelevanceRules>,
}

impl Settings {
    fn resolve(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!(e))?,
            (None, None) => OutputFormat::Json,
        };

        let screening_enabled = args.screen
            || !args.keywords.is_empty()
            || config
                .screening
                .as_ref()
                .is_some_and(|s| s.enabled.unwrap_or(true));

        let relevance = screening_enabled.then(|| {
            let rules = config
                .screening
                .as_ref()
                .map(|s| s.to_rules())
                .unwrap_or_default();
            if args.keywords.is_empty() {
                rules
            } else {
                rules.with_keywords(args.keywords.clone())
            }
        });

        Ok(Self {
            input: args.input.or(config.input),
            format,
            output: args.output,
            strict: args.strict || config.strict.unwrap_or(false),
            closing_after: args.closing_after.or(config.closing_after),
            relevance,
        })
    }
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        let loaded = config::load_config_from_path(path)?;
        eprintln!("📄 Loaded config from: {}", path.display());
        return Ok(Some(loaded));
    }

    let cwd = std::env::current_dir()
        .map_err(|e| anyhow::anyhow!("Failed to read the working directory: {}", e))?;
    let discovered = config::discover_config(&cwd)?;
    if discovered.is_some() {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            cwd.join(config::CONFIG_FILENAME).display()
        );
    }
    Ok(discovered)
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = Settings::resolve(args, config)?;

    // Create adapters (Dependency Injection)
    let payload_reader = ReaderFactory::create(ReaderType::from_input(settings.input.clone()));
    let progress_reporter = StderrProgressReporter::new();
    let use_case = ScreenOpportunitiesUseCase::new(payload_reader, progress_reporter);

    let mut request = ScreeningRequest::builder().strict(settings.strict);
    if let Some(closing_after) = &settings.closing_after {
        request = request.closing_after(closing_after.as_str());
    }
    if let Some(rules) = settings.relevance.clone() {
        request = request.relevance(rules);
    }

    let response = use_case.execute(request.build()?)?;
    let model = ReportReadModelBuilder::build(&response);

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatted_output = FormatterFactory::create(settings.format).format(&model)?;

    let presenter_type = match settings.output {
        Some(path) => PresenterType::File(path),
        None => PresenterType::Stdout,
    };
    PresenterFactory::create(presenter_type).present(&formatted_output)?;

    FindingSummaryPrinter::new().print(&model);

    Ok(if response.passes() {
        ExitCode::Success
    } else {
        ExitCode::IntegrityViolations
    })
}
