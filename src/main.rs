// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::{Read, Write};
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use screenwright::analysis::ReportKind;
use screenwright::app_config::{self, Config};
use screenwright::app_controller::Controller;
use screenwright::file_utils::FileManager;

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

/// CLI Wrapper for ReportKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliReportKind {
    Title,
    Structure,
    Characters,
    Development,
    Pacing,
    Readability,
    Speaking,
}

impl From<CliReportKind> for ReportKind {
    fn from(cli_kind: CliReportKind) -> Self {
        match cli_kind {
            CliReportKind::Title => ReportKind::TitleAndDate,
            CliReportKind::Structure => ReportKind::Structure,
            CliReportKind::Characters => ReportKind::Characters,
            CliReportKind::Development => ReportKind::Development,
            CliReportKind::Pacing => ReportKind::Pacing,
            CliReportKind::Readability => ReportKind::Readability,
            CliReportKind::Speaking => ReportKind::Speaking,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lay out a plain-text screenplay
    Format(FormatArgs),

    /// Analyze a screenplay file or every script in a directory
    Analyze(AnalyzeArgs),

    /// Generate shell completions for screenwright
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct FormatArgs {
    /// Screenplay to format, `-` reads stdin
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Write the formatted screenplay here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Screenplay file or directory to analyze
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Print only one report section
    #[arg(short, long, value_enum)]
    report: Option<CliReportKind>,

    /// Save the full report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of existing reports in directory mode
    #[arg(short, long)]
    force_overwrite: bool,
}

/// Screenwright - screenplay formatting and analysis
///
/// Lays out plain-text screenplays and reports on their structure,
/// characters, pacing, readability and speaking time.
#[derive(Parser, Debug)]
#[command(name = "screenwright")]
#[command(version)]
#[command(about = "Screenplay formatting and analysis tool")]
#[command(long_about = "Screenwright lays out plain-text screenplays and analyzes them.

EXAMPLES:
    screenwright format draft.txt                  # Print the formatted screenplay
    screenwright format draft.txt -o pilot.txt     # Write it to a file
    cat draft.txt | screenwright format -          # Format from stdin
    screenwright analyze pilot.txt                 # Print the full report
    screenwright analyze pilot.txt -r pacing       # Print one section
    screenwright analyze pilot.txt -o pilot.rep    # Save the full report
    screenwright analyze scripts/ -f               # Analyze a folder, overwriting reports
    screenwright completions bash > sw.bash        # Generate bash completions

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

    /// Analyze scripts as written, without formatting them first
    #[arg(long, global = true)]
    raw: bool,
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

    // @returns: ANSI color for log level
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
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Trace is the ceiling; the effective level is set with set_max_level once config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "screenwright", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let mut controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Format(args) => run_format(&controller, args),
        Commands::Analyze(args) => run_analyze(&mut controller, args),
        Commands::Completions { .. } => Ok(()),
    }
}

// Load or create configuration, then apply command line overrides
fn load_config(options: &CommandLineOptions) -> Result<Config> {
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        config
            .save(config_path)
            .context(format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    if options.raw {
        config.format_on_load = false;
    }

    config.validate()
        .context("Configuration validation failed")?;

    log::set_max_level(config.log_level.to_level_filter());

    Ok(config)
}

fn run_format(controller: &Controller, args: FormatArgs) -> Result<()> {
    let formatted = if args.input == Path::new("-") {
        let mut raw_text = String::new();
        std::io::stdin()
            .read_to_string(&mut raw_text)
            .context("Failed to read screenplay from stdin")?;
        let formatted = controller.format_text(&raw_text);

        if let Some(output) = &args.output {
            FileManager::write_to_file(output, &formatted)?;
            info!("Formatted script written to {:?}", output);
        }
        formatted
    } else {
        controller.format_file(&args.input, args.output.as_deref())?
    };

    if args.output.is_none() {
        println!("{}", formatted);
    }

    Ok(())
}

fn run_analyze(controller: &mut Controller, args: AnalyzeArgs) -> Result<()> {
    if args.input_path.is_dir() {
        let summary = controller.analyze_folder(&args.input_path, args.force_overwrite)?;
        if summary.failed > 0 {
            warn!("{} script(s) could not be analyzed", summary.failed);
        }
        return Ok(());
    }

    if !args.input_path.is_file() {
        return Err(anyhow!("Input path does not exist: {:?}", args.input_path));
    }

    controller.load_script(&args.input_path)?;
    controller.run_analysis()?;

    if let Some(output) = &args.output {
        controller.save_report(output)?;
    }

    match args.report {
        Some(kind) => println!("{}", controller.report_section(kind.into())?),
        None if args.output.is_none() => println!("{}", controller.full_report()?),
        None => {}
    }

    Ok(())
}
