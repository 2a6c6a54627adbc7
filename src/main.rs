//! Tarjuman - Translation request form for the terminal

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use serde::Serialize;
use tarjuman::catalog::{Language, ProviderEntry};
use tarjuman::config::{CONFIG_ENV, Config};
use tarjuman::form::{InputMode, LogDispatcher, Submission};
use tarjuman::{App, Catalog, TranslationForm, paths};
use tracing::warn;

/// Compose translation requests from the terminal
#[derive(Parser)]
#[command(name = "tarjuman")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print providers, models and languages as JSON
    Catalog,
    /// Fill in a form without the screen and print the request as JSON
    Submit {
        /// Provider to address
        #[arg(long)]
        provider: String,

        /// Model to use (defaults to the provider's first model)
        #[arg(long)]
        model: Option<String>,

        /// Source language code
        #[arg(long)]
        from: Option<String>,

        /// Target language code
        #[arg(long)]
        to: Option<String>,

        /// Send a voice request instead of text
        #[arg(long)]
        voice: bool,

        /// Text to translate
        text: Option<String>,
    },
    /// Print the effective configuration
    Config {
        /// Print only the config file path
        #[arg(long)]
        path: bool,
    },
}

/// Headless form inputs from the `submit` subcommand
struct SubmitArgs {
    provider: String,
    model: Option<String>,
    from: Option<String>,
    to: Option<String>,
    voice: bool,
    text: Option<String>,
}

#[derive(Serialize)]
struct CatalogView<'a> {
    providers: &'a [ProviderEntry],
    languages: &'a [Language],
    default_input_language: &'a str,
    default_output_language: &'a str,
}

fn main() -> Result<()> {
    let log_path = paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Log to <temp>/tarjuman.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let log_dir = log_path.parent().unwrap_or_else(|| Path::new("."));
        let file_appender = tracing_appender::rolling::never(log_dir, "tarjuman.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config_path = cli.config.unwrap_or_else(Config::default_path);

    match cli.command {
        Some(Commands::Catalog) => cmd_catalog(&load_config(&config_path)?),
        Some(Commands::Submit {
            provider,
            model,
            from,
            to,
            voice,
            text,
        }) => {
            let args = SubmitArgs {
                provider,
                model,
                from,
                to,
                voice,
                text,
            };
            let submission = cmd_submit(&load_config(&config_path)?, args)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&submission)
                    .context("Failed to serialize submission")?
            );
            Ok(())
        }
        Some(Commands::Config { path }) => {
            if path {
                println!("{}", config_path.display());
                return Ok(());
            }
            let config = load_config(&config_path)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&config).context("Failed to serialize config")?
            );
            Ok(())
        }
        None => {
            let config = load_config(&config_path)?;
            let form = TranslationForm::new(config.catalog()?);
            tarjuman::tui::run(App::new(config, form))
        }
    }
}

/// Load the config at `path`, or defaults when it does not exist yet.
fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::load_from(path)
    } else {
        warn!(path = %path.display(), "No config file, using defaults");
        Ok(Config::default())
    }
}

fn cmd_catalog(config: &Config) -> Result<()> {
    let catalog: Catalog = config.catalog()?;
    let view = CatalogView {
        providers: catalog.providers().entries(),
        languages: catalog.languages().as_slice(),
        default_input_language: catalog.default_input_language(),
        default_output_language: catalog.default_output_language(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&view).context("Failed to serialize catalog")?
    );
    Ok(())
}

fn cmd_submit(config: &Config, args: SubmitArgs) -> Result<Submission> {
    let mut form = TranslationForm::new(config.catalog()?);

    form.set_provider(&args.provider)?;
    if let Some(model) = &args.model {
        form.set_model(model)?;
    }
    if let Some(from) = &args.from {
        form.set_input_language(from)?;
    }
    if let Some(to) = &args.to {
        form.set_output_language(to)?;
    }
    if args.voice {
        form.set_input_mode(InputMode::Voice);
    }
    if let Some(text) = args.text {
        form.set_input_text(text);
    }

    let mut dispatcher = LogDispatcher::new();
    let (submission, _) = form
        .submit(&mut dispatcher)
        .context("Cannot submit translation request")?;
    Ok(submission)
}
