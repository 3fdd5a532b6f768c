// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod article_extractor;
mod errors;
mod file_utils;
mod outline_parser;
mod providers;
mod translation;

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

/// Map a configured log level onto the log crate's filter
fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a web article into Traditional Chinese (default command)
    Translate(TranslateArgs),

    /// Parse a heading-delimited outline into structured JSON records
    Outline(OutlineArgs),

    /// Generate shell completions for yawtai
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input HTML file or http(s) URL to process
    #[arg(value_name = "INPUT")]
    input: String,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Sampling temperature for the model
    #[arg(short, long)]
    temperature: Option<f32>,

    /// Maximum characters per chunk sent to the model
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Maximum concurrent translation requests
    #[arg(short = 'w', long)]
    max_workers: Option<usize>,

    /// Directory the translated document is written to
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct OutlineArgs {
    /// Input outline document to parse
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Write the JSON records to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// yawtai - Yet Another Web-Article Translator with AI
///
/// Translates the content region of a web article into Traditional Chinese
/// with an AI completion service, and parses book outlines into records.
#[derive(Parser, Debug)]
#[command(name = "yawtai")]
#[command(author = "yawtai Team")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered web-article translation tool")]
#[command(long_about = "yawtai extracts the <article> region of an HTML document, translates it \
chunk by chunk into Traditional Chinese (zh-Hant-TW) using an AI completion service, and writes \
the document back with the translated region reinserted.

EXAMPLES:
    yawtai article.html                          # Translate using default config
    yawtai -m gpt-4 article.html                 # Use a specific model
    yawtai --chunk-size 3000 -w 8 article.html   # Tune chunking and concurrency
    yawtai https://example.com/post.html         # Fetch and translate a URL
    yawtai outline book-outline.md               # Parse an outline to JSON
    yawtai completions bash > yawtai.bash        # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically. The API key is read from the config file
    or from the OPENAI_API_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input HTML file or http(s) URL to process
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Sampling temperature for the model
    #[arg(short, long)]
    temperature: Option<f32>,

    /// Maximum characters per chunk sent to the model
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Maximum concurrent translation requests
    #[arg(short = 'w', long)]
    max_workers: Option<usize>,

    /// Directory the translated document is written to
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
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
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:5} {}\x1B[0m",
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

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "yawtai", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Outline(args)) => run_outline(args),
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input = cli
                .input
                .ok_or_else(|| anyhow!("INPUT is required when no subcommand is specified"))?;

            let translate_args = TranslateArgs {
                input,
                model: cli.model,
                temperature: cli.temperature,
                chunk_size: cli.chunk_size,
                max_workers: cli.max_workers,
                output_dir: cli.output_dir,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(model) = &options.model {
        config.translation.model = model.clone();
    }

    if let Some(temperature) = options.temperature {
        config.translation.temperature = temperature;
    }

    if let Some(chunk_size) = options.chunk_size {
        config.chunk_size = chunk_size;
    }

    if let Some(max_workers) = options.max_workers {
        config.max_workers = max_workers;
    }

    if let Some(output_dir) = &options.output_dir {
        config.output_dir = output_dir.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller and run the pipeline
    let controller = Controller::with_config(config)?;
    controller.run_translate(&options.input).await?;

    Ok(())
}

fn run_outline(options: OutlineArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    let controller = Controller::with_config(Config::default())?;
    controller.run_outline(&options.input, options.output.as_deref())
}
