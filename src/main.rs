// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info, warn};
use std::io::Write;
use std::path::PathBuf;

use seoscore::app_config::{self, Config};
use seoscore::batch::{BatchSummary, BatchValidator};
use seoscore::export::{self, ExportFormat, ExportRow};
use seoscore::file_utils::FileManager;
use seoscore::language_utils::ContentLanguage;
use seoscore::validation::ContentValidator;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for ExportFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliExportFormat {
    Csv,
    Json,
}

impl From<CliExportFormat> for ExportFormat {
    fn from(cli_format: CliExportFormat) -> Self {
        match cli_format {
            CliExportFormat::Csv => ExportFormat::Csv,
            CliExportFormat::Json => ExportFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one draft and print its report as JSON
    Validate {
        /// Draft JSON file
        #[arg(value_name = "DRAFT_FILE")]
        input_path: PathBuf,

        /// Override the draft language tag (e.g. 'generic-segmented', 'zh', 'en')
        #[arg(long)]
        language: Option<String>,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate every draft in a file or directory and print a summary
    Batch {
        /// Drafts JSON file or directory of JSON files
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,

        /// Export validated drafts in this format
        #[arg(short, long, value_enum)]
        export: Option<CliExportFormat>,

        /// Directory for exported files
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Read a CSV or TXT keyword list and print one keyword per line
    ImportKeywords {
        /// Keyword file (.csv or .txt)
        #[arg(value_name = "KEYWORD_FILE")]
        input_path: PathBuf,
    },

    /// Generate shell completions for seoscore
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// seoscore - Content validation and scoring for SEO drafts
#[derive(Parser, Debug)]
#[command(name = "seoscore")]
#[command(version)]
#[command(about = "Validate and score generated SEO content")]
#[command(long_about = "seoscore scores content drafts for keyword density, readability, structure and meta compliance.

EXAMPLES:
    seoscore validate draft.json                     # Print the report for one draft
    seoscore validate --language zh draft.json       # Force dictionary segmentation
    seoscore batch drafts/                           # Validate every JSON file in a directory
    seoscore batch drafts.json -e csv --output-dir out
    seoscore import-keywords keywords.csv
    seoscore completions bash > seoscore.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Maximum number of drafts validated at once
    #[arg(long, global = true, env = "SEOSCORE_MAX_CONCURRENT")]
    max_concurrent: Option<usize>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                Self::get_color_for_level(record.level()),
                now,
                Self::get_emoji_for_level(record.level()),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // The logger accepts everything; the effective level is set via set_max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "seoscore", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Validate {
            input_path,
            language,
            output,
        } => run_validate(&config, input_path, language, output),
        Commands::Batch {
            input_path,
            export,
            output_dir,
        } => run_batch(&config, input_path, export.map(Into::into), output_dir).await,
        Commands::ImportKeywords { input_path } => run_import_keywords(input_path),
        Commands::Completions { .. } => Ok(()),
    }
}

// @loads: Config file, applies CLI overrides and validates the result
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_create(&cli.config_path)?;

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(config.log_level.to_level_filter());
    }

    if let Some(max_concurrent) = cli.max_concurrent {
        config.batch.max_concurrent_validations = max_concurrent;
    }

    config.validate().context("Configuration validation failed")?;
    debug!("Loaded configuration from {}", cli.config_path);

    Ok(config)
}

fn run_validate(
    config: &Config,
    input_path: PathBuf,
    language: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let validator = ContentValidator::try_with_config(config.validation.clone())?;
    let json = FileManager::read_to_string(&input_path)?;

    let report = match language {
        Some(tag) => {
            let language: ContentLanguage = tag.parse()?;
            let draft = seoscore::ContentDraft::from_json(&json)?.with_language(language);
            validator.validate(&draft)?
        }
        None => validator.validate_json(&json)?,
    };

    info!("{}", report.summary());

    let report_json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    match output {
        Some(path) => {
            FileManager::write_to_file(&path, &report_json)?;
            info!("Report written to {:?}", path);
        }
        None => println!("{}", report_json),
    }

    Ok(())
}

async fn run_batch(
    config: &Config,
    input_path: PathBuf,
    export_format: Option<ExportFormat>,
    output_dir: PathBuf,
) -> Result<()> {
    let entries = FileManager::collect_drafts(&input_path)?;
    if entries.is_empty() {
        return Err(anyhow!("No drafts found in {:?}", input_path));
    }

    let validator = ContentValidator::try_with_config(config.validation.clone())?;
    let batch = BatchValidator::new(validator, config.batch.max_concurrent_validations);

    info!(
        "Validating {} drafts ({} at a time)",
        entries.len(),
        batch.max_concurrent()
    );

    let progress_bar = ProgressBar::new(entries.len() as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} drafts ({percent}%) {msg}")
        .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress_bar.set_style(style.progress_chars("█▓▒░"));

    let pb = progress_bar.clone();
    let items = batch
        .validate_entries_with_progress(entries.clone(), move |done, _| pb.set_position(done as u64))
        .await;
    progress_bar.finish_and_clear();

    let summary = BatchSummary::from_items(&items);
    info!("{}", summary.summary());
    for item in items.iter().filter(|i| !i.succeeded()) {
        warn!(
            "Draft {} failed: {}",
            item.id.clone().unwrap_or_else(|| item.index.to_string()),
            item.error.as_deref().unwrap_or("unknown error")
        );
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
    );

    if let Some(format) = export_format {
        let rows = ExportRow::from_entries(&entries, &items);
        let (content, file_name) = export::export_rows(&rows, format, &chrono::Local::now())?;
        let path = output_dir.join(file_name);
        FileManager::write_to_file(&path, &content)?;
        info!("Exported {} drafts to {:?}", rows.len(), path);
    }

    Ok(())
}

fn run_import_keywords(input_path: PathBuf) -> Result<()> {
    let format = FileManager::detect_import_format(&input_path)?;
    let content = FileManager::read_to_string(&input_path)?;

    let keywords = export::import_keywords(&content, format);
    info!("Imported {} keywords from {:?}", keywords.len(), input_path);

    for keyword in keywords {
        println!("{}", keyword);
    }

    Ok(())
}
