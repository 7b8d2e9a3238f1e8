//! CLI definition and dispatch.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::{CsvAdapter, CsvSource};
use crate::adapters::csv_report::CsvReport;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report::TextReport;
use crate::domain::category::classify;
use crate::domain::config_validation::{
    RULES_SECTION, SIGNAL_SECTION, SOURCE_SECTION, parse_delimiter, validate_config,
};
use crate::domain::dataset::{ColumnSpec, DEFAULT_LABEL_COLUMN, DEFAULT_VALUE_COLUMN};
use crate::domain::engine::{Analysis, Engine, Outcome};
use crate::domain::error::MacroSignalError;
use crate::domain::rules::RuleSet;
use crate::domain::signal::{DEFAULT_BUY_MIN_SCORE, SignalPolicy};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

/// Exit status when the source delivered no rows.
pub const NO_DATA_EXIT: u8 = 5;

#[derive(Parser, Debug)]
#[command(name = "macrosignal", about = "Macroeconomic indicator scoring")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score an indicator table and print a recommendation
    Score {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// CSV file, `-` for stdin, or an http(s) URL
        #[arg(short, long)]
        input: Option<String>,
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show which category each label falls into
    Classify {
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Csv,
}

/// Where the indicator table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    File(PathBuf),
    Stdin,
    Url(String),
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Score {
            config,
            input,
            format,
            output,
        } => run_score(config.as_deref(), input.as_deref(), format, output.as_deref()),
        Command::Classify { labels } => run_classify(&labels),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, MacroSignalError> {
    FileConfigAdapter::from_file(path).map_err(|e| MacroSignalError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn run_score(
    config_path: Option<&Path>,
    input: Option<&str>,
    format: ReportFormat,
    output: Option<&Path>,
) -> ExitCode {
    // Stage 1: Load and validate config
    let config = match config_path {
        Some(path) => {
            log::info!("Loading config from {}", path.display());
            match load_config(path) {
                Ok(c) => c,
                Err(e) => return report_error(&e),
            }
        }
        None => FileConfigAdapter::empty(),
    };
    if let Err(e) = validate_config(&config) {
        return report_error(&e);
    }

    // Stage 2: Build engine and resolve source
    let engine = build_engine(&config);
    let columns = build_column_spec(&config);
    let source = match resolve_source(input, &config) {
        Ok(s) => s,
        Err(e) => return report_error(&e),
    };
    let data_port = match open_data_port(&source, build_delimiter(&config)) {
        Ok(p) => p,
        Err(e) => return report_error(&e),
    };

    // Stage 3: Fetch, analyze, render
    let report: Box<dyn ReportPort> = match format {
        ReportFormat::Text => {
            Box::new(TextReport::new().as_of(chrono::Local::now().date_naive()))
        }
        ReportFormat::Csv => Box::new(CsvReport),
    };

    match run_score_pipeline(data_port.as_ref(), &engine, &columns, report.as_ref(), output) {
        Ok(analysis) => ExitCode::from(outcome_exit_status(&analysis)),
        Err(e) => report_error(&e),
    }
}

/// Fetches, analyzes and renders one snapshot, writing the report to
/// `output` or stdout.
pub fn run_score_pipeline(
    data_port: &dyn DataPort,
    engine: &Engine,
    columns: &ColumnSpec,
    report: &dyn ReportPort,
    output: Option<&Path>,
) -> Result<Analysis, MacroSignalError> {
    log::info!("Fetching indicators from {}", data_port.describe());
    let dataset = data_port.fetch_dataset()?;
    log::info!("Received {} rows", dataset.len());

    let analysis = engine.analyze(&dataset, columns)?;
    match analysis.outcome {
        Outcome::NoData => log::warn!("no indicator rows received"),
        Outcome::Determined {
            score,
            recommendation,
        } => log::info!(
            "Score {} over {} scored rows: {}",
            score,
            analysis.scored_count(),
            recommendation
        ),
    }

    let rendered = report.render(&analysis)?;
    match output {
        Some(path) => {
            fs::write(path, &rendered)?;
            log::info!("Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(analysis)
}

/// 0 for a determined recommendation, `NO_DATA_EXIT` otherwise.
pub fn outcome_exit_status(analysis: &Analysis) -> u8 {
    if analysis.is_no_data() {
        NO_DATA_EXIT
    } else {
        0
    }
}

fn report_error(err: &MacroSignalError) -> ExitCode {
    eprintln!("error: {err}");
    err.into()
}

pub fn build_rule_set(config: &dyn ConfigPort) -> RuleSet {
    let defaults = RuleSet::default();
    RuleSet {
        gdp_solid_min: config.get_double(RULES_SECTION, "gdp_solid_min", defaults.gdp_solid_min),
        inflation_min: config.get_double(RULES_SECTION, "inflation_min", defaults.inflation_min),
        inflation_max: config.get_double(RULES_SECTION, "inflation_max", defaults.inflation_max),
        policy_rate_max: config.get_double(
            RULES_SECTION,
            "policy_rate_max",
            defaults.policy_rate_max,
        ),
        unemployment_max: config.get_double(
            RULES_SECTION,
            "unemployment_max",
            defaults.unemployment_max,
        ),
    }
}

pub fn build_signal_policy(config: &dyn ConfigPort) -> SignalPolicy {
    let buy_min_score =
        config.get_int(SIGNAL_SECTION, "buy_min_score", i64::from(DEFAULT_BUY_MIN_SCORE));
    SignalPolicy {
        buy_min_score: i32::try_from(buy_min_score).unwrap_or(DEFAULT_BUY_MIN_SCORE),
    }
}

pub fn build_engine(config: &dyn ConfigPort) -> Engine {
    Engine::new(build_rule_set(config), build_signal_policy(config))
}

pub fn build_column_spec(config: &dyn ConfigPort) -> ColumnSpec {
    let column = |key: &str, default: &str| {
        config
            .get_string(SOURCE_SECTION, key)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| default.to_string())
    };
    ColumnSpec {
        label: column("label_column", DEFAULT_LABEL_COLUMN),
        value: column("value_column", DEFAULT_VALUE_COLUMN),
    }
}

pub fn build_delimiter(config: &dyn ConfigPort) -> u8 {
    config
        .get_string(SOURCE_SECTION, "delimiter")
        .and_then(|raw| parse_delimiter(&raw))
        .unwrap_or(b',')
}

pub fn sheet_export_url(sheet_id: &str, gid: &str) -> String {
    format!(
        "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid={}",
        sheet_id, gid
    )
}

/// `--input` wins over `[source]`; within `[source]`, `path`, `url` and
/// `sheet_id` (+ `gid`, default `0`) are mutually exclusive.
pub fn resolve_source(
    input_override: Option<&str>,
    config: &dyn ConfigPort,
) -> Result<SourceSpec, MacroSignalError> {
    if let Some(input) = input_override {
        return Ok(classify_input(input));
    }

    let get = |key: &str| {
        config
            .get_string(SOURCE_SECTION, key)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    if let Some(path) = get("path") {
        return Ok(classify_input(&path));
    }
    if let Some(url) = get("url") {
        return Ok(SourceSpec::Url(url));
    }
    if let Some(sheet_id) = get("sheet_id") {
        let gid = get("gid").unwrap_or_else(|| "0".to_string());
        return Ok(SourceSpec::Url(sheet_export_url(&sheet_id, &gid)));
    }

    Err(MacroSignalError::ConfigMissing {
        section: SOURCE_SECTION.to_string(),
        key: "path".to_string(),
    })
}

fn classify_input(input: &str) -> SourceSpec {
    if input == "-" {
        SourceSpec::Stdin
    } else if input.starts_with("http://") || input.starts_with("https://") {
        SourceSpec::Url(input.to_string())
    } else {
        SourceSpec::File(PathBuf::from(input))
    }
}

pub fn open_data_port(
    source: &SourceSpec,
    delimiter: u8,
) -> Result<Box<dyn DataPort>, MacroSignalError> {
    match source {
        SourceSpec::File(path) => Ok(Box::new(
            CsvAdapter::new(CsvSource::File(path.clone())).with_delimiter(delimiter),
        )),
        SourceSpec::Stdin => Ok(Box::new(
            CsvAdapter::new(CsvSource::Stdin).with_delimiter(delimiter),
        )),
        SourceSpec::Url(url) => open_url(url, delimiter),
    }
}

#[cfg(feature = "http")]
fn open_url(url: &str, delimiter: u8) -> Result<Box<dyn DataPort>, MacroSignalError> {
    use crate::adapters::http_adapter::HttpAdapter;
    Ok(Box::new(HttpAdapter::new(url)?.with_delimiter(delimiter)))
}

#[cfg(not(feature = "http"))]
fn open_url(url: &str, _delimiter: u8) -> Result<Box<dyn DataPort>, MacroSignalError> {
    Err(MacroSignalError::Source {
        reason: format!("http feature is required to fetch {}", url),
    })
}

fn run_classify(labels: &[String]) -> ExitCode {
    for label in labels {
        println!("{}\t{}", classify(label.trim()), label);
    }
    ExitCode::SUCCESS
}

fn run_validate(config_path: &Path) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => return report_error(&e),
    };
    if let Err(e) = validate_config(&config) {
        return report_error(&e);
    }

    match resolve_source(None, &config) {
        Ok(SourceSpec::File(path)) => eprintln!("  source:           {}", path.display()),
        Ok(SourceSpec::Stdin) => eprintln!("  source:           stdin"),
        Ok(SourceSpec::Url(url)) => eprintln!("  source:           {}", url),
        Err(_) => eprintln!("  source:           (none, pass --input)"),
    }

    let columns = build_column_spec(&config);
    let rules = build_rule_set(&config);
    let policy = build_signal_policy(&config);
    eprintln!("  label column:     {}", columns.label);
    eprintln!("  value column:     {}", columns.value);
    eprintln!("  gdp_solid_min:    {}", rules.gdp_solid_min);
    eprintln!(
        "  inflation band:   [{}, {}]",
        rules.inflation_min, rules.inflation_max
    );
    eprintln!("  policy_rate_max:  {}", rules.policy_rate_max);
    eprintln!("  unemployment_max: {}", rules.unemployment_max);
    eprintln!("  buy_min_score:    {}", policy.buy_min_score);

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}
