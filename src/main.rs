// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{ArgGroup, Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::PathBuf;

use mdlingo::app_config::{self, Config};
use mdlingo::{Controller, EnhanceOptions, EnhanceSelection, RunMode, RunOptions};

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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create missing translations (default command)
    Translate(TranslateArgs),

    /// Regenerate existing translations with the enhanced rule-based pipeline
    Enhance(EnhanceArgs),

    /// Audit coverage, source-language leakage and placeholder files
    Audit,

    /// Score the quality of existing translations
    Quality {
        /// Check a random sample of N pairs
        #[arg(long, value_name = "N")]
        sample: Option<usize>,
    },

    /// Generate shell completions for mdlingo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct TranslateArgs {
    /// Only translate files matching a priority pattern
    #[arg(long, conflicts_with_all = ["report_only", "analyze_only"])]
    priority_only: bool,

    /// Scan and write reports without creating files
    #[arg(long, conflicts_with = "analyze_only")]
    report_only: bool,

    /// Collect per-file metrics and write a translation map
    #[arg(long)]
    analyze_only: bool,

    /// Show what would be written without writing
    #[arg(long)]
    dry_run: bool,

    /// Overwrite existing translations
    #[arg(short, long)]
    force: bool,

    /// Translate at most N files
    #[arg(long, value_name = "N")]
    sample: Option<usize>,

    /// Write enhanced rule-based translations instead of placeholder stubs
    #[arg(long)]
    enhanced: bool,

    /// Use the aggressive lexical fallback threshold
    #[arg(long)]
    aggressive: bool,

    /// Keep only target-script text in translated pieces
    #[arg(long)]
    target_only: bool,

    /// Translate through the configured provider, falling back to rules on failure
    #[arg(long)]
    ai: bool,
}

impl TranslateArgs {
    fn to_run_options(&self) -> RunOptions {
        let mode = if self.report_only {
            RunMode::ReportOnly
        } else if self.analyze_only {
            RunMode::AnalyzeOnly
        } else if self.priority_only {
            RunMode::PriorityOnly
        } else {
            RunMode::Full
        };
        RunOptions {
            mode,
            overwrite: self.force,
            dry_run: self.dry_run,
            sample_limit: self.sample,
            use_enhanced_rules: self.enhanced,
            aggressive: self.aggressive,
            target_only: self.target_only,
            ai: self.ai,
        }
    }
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("selection")
        .required(true)
        .args(["file", "priority", "all", "sample", "flagged"])
))]
struct EnhanceArgs {
    /// A single source or target file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// All existing priority translations
    #[arg(long)]
    priority: bool,

    /// All existing translations
    #[arg(long)]
    all: bool,

    /// The first N existing translations, priority first
    #[arg(long, value_name = "N")]
    sample: Option<usize>,

    /// Files flagged as untranslated in an audit JSON report
    #[arg(long, value_name = "AUDIT_JSON")]
    flagged: Option<PathBuf>,

    /// Use the aggressive lexical fallback threshold
    #[arg(long)]
    aggressive: bool,

    /// Keep only target-script text in translated pieces
    #[arg(long)]
    target_only: bool,

    /// Show what would be written without writing
    #[arg(long)]
    dry_run: bool,
}

impl EnhanceArgs {
    fn to_options(&self) -> EnhanceOptions {
        let selection = if let Some(path) = &self.file {
            EnhanceSelection::File(path.clone())
        } else if let Some(path) = &self.flagged {
            EnhanceSelection::Flagged(path.clone())
        } else if let Some(n) = self.sample {
            EnhanceSelection::Sample(n)
        } else if self.priority {
            EnhanceSelection::Priority
        } else {
            EnhanceSelection::All
        };
        EnhanceOptions {
            selection,
            aggressive: self.aggressive,
            target_only: self.target_only,
            dry_run: self.dry_run,
        }
    }
}

/// mdlingo - Markdown documentation translation manager
///
/// Finds documents without a translation, creates placeholder or rule-based
/// Arabic translations, and reports on coverage and quality.
#[derive(Parser, Debug)]
#[command(name = "mdlingo")]
#[command(version)]
#[command(about = "Rule-based translation manager for Markdown documentation")]
#[command(long_about = "mdlingo manages the translation of a Markdown documentation tree.

A source file dir/name.md is translated by dir/name-<lang>.md.

EXAMPLES:
    mdlingo --report-only                          # Coverage reports only
    mdlingo --priority-only --enhanced             # Enhanced translations for priority files
    mdlingo translate --sample 20 --dry-run        # Preview the first 20 files
    mdlingo enhance --flagged reports/translation_audit_report.json --aggressive
    mdlingo audit                                  # Coverage and leakage audit
    mdlingo quality --sample 100                   # Score 100 random pairs
    mdlingo completions bash > mdlingo.bash        # Generate bash completions

CONFIGURATION:
    Configuration is stored in mdlingo.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,

    /// Content root directory (overrides the config)
    #[arg(long, global = true, value_name = "DIR")]
    content_root: Option<PathBuf>,

    /// Target language code (e.g., 'ar')
    #[arg(short, long, global = true)]
    target_lang: Option<String>,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "mdlingo.json")]
    config: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Shorthand for --log-level debug
    #[arg(short, long, global = true)]
    verbose: bool,
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
        // The boxed logger accepts everything; `set_max_level` does the filtering
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and emoji for a log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "❌ "),
            Level::Warn => ("1;33", "🚧 "),
            Level::Info => ("1;32", " "),
            Level::Debug => ("1;36", "🔍 "),
            Level::Trace => ("1;35", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let (colour, emoji) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                colour,
                now,
                emoji,
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
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "mdlingo", &mut std::io::stdout());
        return Ok(());
    }

    tokio::select! {
        result = run(cli) => result,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted");
            std::process::exit(1);
        }
    }
}

async fn run(cli: CommandLineOptions) -> Result<()> {
    let config = load_config(&cli)?;
    let controller = Controller::with_config(config)?;

    match cli.command {
        Some(Commands::Translate(args)) => translate(&controller, &args).await,
        None => translate(&controller, &cli.translate).await,
        Some(Commands::Enhance(args)) => {
            let summary = controller.enhance(&args.to_options()).await?;
            info!(
                "Enhanced {} of {} selected files",
                summary.stats.enhanced_count, summary.stats.selected_count
            );
            Ok(())
        }
        Some(Commands::Audit) => {
            controller.audit()?;
            Ok(())
        }
        Some(Commands::Quality { sample }) => {
            controller.quality(sample)?;
            Ok(())
        }
        Some(Commands::Completions { .. }) => Ok(()),
    }
}

async fn translate(controller: &Controller, args: &TranslateArgs) -> Result<()> {
    let summary = controller.run(&args.to_run_options()).await?;
    let stats = &summary.stats;
    if stats.error_count > 0 {
        warn!("Translation completed with {} errors", stats.error_count);
    }
    info!(
        "Coverage: {:.1}% ({} of {} source files translated)",
        stats.coverage_percent, stats.existing_count, stats.total_source_files
    );
    Ok(())
}

/// Load or create the configuration, apply CLI overrides, validate it and set the log level
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    // If log level is set via command line, apply it immediately
    let cli_level: Option<app_config::LogLevel> = if cli.verbose {
        Some(app_config::LogLevel::Debug)
    } else {
        cli.log_level.clone().map(Into::into)
    };
    if let Some(level) = &cli_level {
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&cli.config)
        .with_context(|| format!("Failed to load config file: {}", cli.config))?;

    if let Some(root) = &cli.content_root {
        config.content_root = root.clone();
    }
    if let Some(lang) = &cli.target_lang {
        config.target_language = lang.clone();
    }
    if let Some(level) = cli_level {
        config.log_level = level;
    }

    config.validate().context("Configuration validation failed")?;

    // Just update the max level without reinitializing the logger
    log::set_max_level(config.log_level.to_level_filter());

    Ok(config)
}
