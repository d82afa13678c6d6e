// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::{Config, PhonemizerBackend};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod fetch;
mod file_utils;
mod language_utils;
mod lexicon;
mod providers;
mod sources;

/// CLI Wrapper for PhonemizerBackend to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliBackend {
    Espeak,
    Mock,
}

impl From<CliBackend> for PhonemizerBackend {
    fn from(cli_backend: CliBackend) -> Self {
        match cli_backend {
            CliBackend::Espeak => PhonemizerBackend::Espeak,
            CliBackend::Mock => PhonemizerBackend::Mock,
        }
    }
}

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
    /// Download and extract the dictionary and stress-corpus sources
    Fetch(CommonArgs),

    /// Build the lexicon from the extracted source tables (default command)
    Build(CommonArgs),

    /// Audit an already-written lexicon file
    Audit {
        #[command(flatten)]
        common: CommonArgs,

        /// Lexicon file to audit (defaults to the configured output)
        #[arg(value_name = "LEXICON_PATH")]
        lexicon_path: Option<PathBuf>,
    },

    /// Generate shell completions for bglex
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Clone)]
struct CommonArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Phonemization backend to use
    #[arg(short, long, value_enum)]
    backend: Option<CliBackend>,

    /// Language tag for the backend voice (e.g. 'bg')
    #[arg(short, long)]
    language: Option<String>,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// bglex - Bulgarian pronunciation lexicon builder
///
/// Builds a canonical word -> IPA lexicon by merging Wiktionary
/// transcriptions with eSpeak NG output for a stress-annotated corpus.
#[derive(Parser, Debug)]
#[command(name = "bglex")]
#[command(version = "1.0.0")]
#[command(about = "Pronunciation lexicon builder for Bulgarian")]
#[command(long_about = "bglex merges an authoritative Wiktionary IPA table with backend-generated
pronunciations for a stress-annotated word list into one canonical lexicon.

EXAMPLES:
    bglex fetch                      # Download and extract the source tables
    bglex build                      # Build lexicon.tsv from the source tables
    bglex                            # Same as 'bglex build'
    bglex build -b mock              # Build with the mock backend (no espeak-ng needed)
    bglex audit                      # Audit the configured lexicon file
    bglex audit other_lexicon.tsv    # Audit a specific file
    bglex build --log-level debug    # Build with debug logging
    bglex completions bash           # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different file with --config-path. If the config file doesn't exist,
    a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    common: CommonArgs,
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

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} [{}] {}\x1B[0m",
                color,
                now,
                record.level(),
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

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "bglex", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Fetch(args)) => {
            let controller = build_controller(&args)?;
            controller.run_fetch().await
        }
        Some(Commands::Build(args)) => {
            let controller = build_controller(&args)?;
            controller.run_build().await
        }
        Some(Commands::Audit { common, lexicon_path }) => {
            let controller = build_controller(&common)?;
            controller.run_audit(lexicon_path)
        }
        None => {
            // Default behavior: build with the top-level args
            let controller = build_controller(&cli.common)?;
            controller.run_build().await
        }
    }
}

/// Load the configuration, apply CLI overrides, and create the controller
fn build_controller(args: &CommonArgs) -> Result<Controller> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &args.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    // Load or create configuration
    let config_path = &args.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)
            .context(format!("Failed to load config file: {}", config_path))?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save(config_path)
            .context(format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    // Override config with CLI options if provided
    if let Some(backend) = &args.backend {
        config.backend.backend_type = backend.clone().into();
    }
    if let Some(language) = &args.language {
        config.language = language.clone();
    }
    if let Some(log_level) = &args.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if args.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    info!(
        "Using {} backend for {} ('{}')",
        config.backend.backend_type.display_name(),
        language_utils::language_display_name(&config.language),
        config.language
    );

    Controller::with_config(config)
}
