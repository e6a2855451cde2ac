//! CLI entrypoint for Millet Advisor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use millet_application::{
    FetchProgress, FetchRecommendationsUseCase, InteractionLogger, MemoryThemeStore, Navigator,
    NoInteractionLogger, NoProgress, RecommendationGateway, RedirectProductUseCase, ThemeStore,
};
use millet_infrastructure::{
    ConfigLoader, ConsoleNavigator, FileConfig, HttpRecommendationGateway, JsonThemeStore,
    JsonlInteractionLogger, SystemBrowserNavigator,
};
use millet_presentation::{
    AdvisorApp, AppEvent, Cli, ConsoleFormatter, LoadingSpinner, SimpleProgress, spawn_reader,
};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli)?;

    info!("Starting Millet Advisor");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    ConsoleFormatter::set_color_enabled(config.output.color);

    let gateway = Arc::new(
        HttpRecommendationGateway::with_user_agent(&config.api.origin, &config.api.user_agent)
            .context("Failed to create HTTP client")?,
    );
    info!("Using backend {}", gateway.origin());

    if cli.check {
        return check_backend(&gateway).await;
    }

    if cli.list_millets {
        let millets = gateway
            .list_millets()
            .await
            .with_context(|| format!("Could not list millets from {}", gateway.origin()))?;
        for millet in millets {
            println!("{}", millet);
        }
        return Ok(ExitCode::SUCCESS);
    }

    // === Dependency Injection ===
    let logger = interaction_logger(&config);
    let navigator = navigator(&config);

    let fetch = FetchRecommendationsUseCase::new(Arc::clone(&gateway)).with_logger(Arc::clone(&logger));
    let redirect = RedirectProductUseCase::new(config.products.to_catalog(), navigator)
        .with_logger(logger)
        .with_params(config.redirect.to_params());

    let theme_store: Arc<dyn ThemeStore> = match ConfigLoader::state_dir() {
        Some(dir) if !cli.no_config => Arc::new(JsonThemeStore::in_dir(dir)),
        _ => Arc::new(MemoryThemeStore::default()),
    };
    let progress: Arc<dyn FetchProgress> = if cli.quiet {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(LoadingSpinner::new())
    } else {
        // indicatif draws nothing without a terminal
        Arc::new(SimpleProgress)
    };

    let (tx, rx) = mpsc::unbounded_channel();
    let app = AdvisorApp::new(fetch, redirect, gateway, tx.clone())
        .with_theme_store(theme_store)
        .with_progress(progress);

    for tag in &cli.concerns {
        tx.send(AppEvent::Toggle(*tag))?;
    }

    if cli.is_one_shot() {
        tx.send(AppEvent::Fetch {
            query: cli.query.clone(),
        })?;
        let app = app.one_shot(cli.html.clone());
        return Ok(match app.run(rx).await {
            Some(_) => ExitCode::FAILURE,
            None => ExitCode::SUCCESS,
        });
    }

    if cli.html.is_some() {
        warn!("--html is only used together with --concern; ignoring it");
    }
    if !cli.concerns.is_empty() {
        tx.send(AppEvent::Fetch {
            query: cli.query.clone(),
        })?;
    }

    let reader = spawn_reader(tx).context("Failed to start the input thread")?;
    app.run(rx).await;

    // Let the input thread save its history
    tokio::task::spawn_blocking(move || reader.join())
        .await
        .map_err(|e| anyhow!("Input thread failed: {}", e))?
        .map_err(|_| anyhow!("Input thread panicked"))?;

    Ok(ExitCode::SUCCESS)
}

/// Install the tracing subscriber; hold the returned guard until exit.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("--log-file needs a file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// Files and environment, then command line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(origin) = &cli.origin {
        config.api.origin = origin.clone();
    }
    if let Some(path) = &cli.interaction_log {
        config.logging.interaction_log = Some(path.clone());
    }
    if cli.no_browser {
        config.redirect.open_browser = false;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn interaction_logger(config: &FileConfig) -> Arc<dyn InteractionLogger> {
    match config
        .logging
        .interaction_log
        .as_ref()
        .and_then(JsonlInteractionLogger::new)
    {
        Some(logger) => {
            info!("Interaction log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoInteractionLogger),
    }
}

fn navigator(config: &FileConfig) -> Arc<dyn Navigator> {
    if config.redirect.open_browser
        && let Some(browser) = SystemBrowserNavigator::try_new()
    {
        return Arc::new(browser);
    }
    Arc::new(ConsoleNavigator)
}

async fn check_backend(gateway: &HttpRecommendationGateway) -> Result<ExitCode> {
    match gateway.health().await {
        Ok(status) if status.is_healthy() => {
            println!("{} is up: {}", gateway.origin(), status.message);
            Ok(ExitCode::SUCCESS)
        }
        Ok(status) => {
            println!("{} answered with status '{}'", gateway.origin(), status.status);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => bail!("Backend at {} is not reachable: {}", gateway.origin(), e),
    }
}
