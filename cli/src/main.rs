//! CLI entrypoint for tokenscope
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokenscope_application::{CompletionReceiver, DisplaySurface, RequestDispatcher};
use tokenscope_infrastructure::{ConfigLoader, FileConfig, HttpTokenizerGateway};
use tokenscope_presentation::{
    Cli, ConsoleRenderer, OutputFormat, RequestSpinner, TuiApp, TuiOptions,
    output::console::configure_color,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_tracing(cli.verbose, cli.is_interactive())?;

    info!("Starting tokenscope");

    let config = load_config(&cli)?;
    configure_color(config.display.color);

    // === Dependency Injection ===
    let gateway = Arc::new(
        HttpTokenizerGateway::from_config(&config.service)
            .context("Invalid tokenizer service configuration")?,
    );
    let endpoint = gateway.endpoint().to_string();
    info!("Tokenizer endpoint: {}", endpoint);

    let cancellation = CancellationToken::new();
    let (dispatcher, completion_rx) =
        RequestDispatcher::new(gateway, config.dispatch.to_params());
    let dispatcher = dispatcher.with_cancellation(cancellation.clone());

    match cli.text.as_deref() {
        Some(text) => run_once(&cli, &config, &dispatcher, &cancellation, text).await,
        None => {
            let options = TuiOptions {
                show_index: config.display.show_index,
                endpoint,
            };
            run_console(dispatcher, completion_rx, options).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load configuration and apply CLI overrides on top
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(url) = &cli.url {
        config.service.base_url = url.clone();
    }
    if let Some(mode) = cli.mode {
        config.dispatch.initial_mode = mode;
    }

    let mut errors = Vec::new();
    for issue in config.validate() {
        if issue.is_error() {
            errors.push(issue.to_string());
        } else {
            warn!("{}", issue);
        }
    }
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    Ok(config)
}

/// One-shot mode: tokenize `text` once and print the tokens.
///
/// A failed request is reported on stderr and turns into a failure exit
/// code; `Err` is kept for interruption.
async fn run_once(
    cli: &Cli,
    config: &FileConfig,
    dispatcher: &RequestDispatcher<HttpTokenizerGateway>,
    cancellation: &CancellationToken,
    text: &str,
) -> Result<ExitCode> {
    let mode = config.dispatch.initial_mode;
    let spinner = RequestSpinner::start(format!("Tokenizing in {}...", mode.label()), cli.quiet);

    let result = tokio::select! {
        result = dispatcher.fetch(text, mode) => result,
        _ = tokio::signal::ctrl_c() => {
            spinner.finish();
            cancellation.cancel();
            bail!("Interrupted");
        }
    };
    spinner.finish();

    let rows = match result {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("{}", ConsoleRenderer::format_failure(&e));
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.output == OutputFormat::Plain && !cli.quiet {
        println!("{}", ConsoleRenderer::format_header(text, mode));
    }

    let mut renderer =
        ConsoleRenderer::new(cli.output).with_show_index(config.display.show_index);
    renderer.clear();
    renderer.render(&rows);
    print!("{}", renderer.output());

    Ok(ExitCode::SUCCESS)
}

/// Interactive mode: run the TUI console until the user quits
async fn run_console(
    dispatcher: RequestDispatcher<HttpTokenizerGateway>,
    completion_rx: CompletionReceiver,
    options: TuiOptions,
) -> Result<()> {
    let mut app = TuiApp::new(dispatcher, completion_rx, options);
    app.run().await.context("Terminal error")?;
    info!("Console closed");
    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// The console owns the terminal, so interactive sessions log to a daily
/// file under the data directory; one-shot runs log to stderr.
fn init_tracing(verbose: u8, interactive: bool) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&log_dir, "tokenscope.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tokenscope")
        .join("logs")
}
