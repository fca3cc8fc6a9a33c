use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use deep_research::{
    config::{Config, LogFormat},
    console::Terminal,
    openai::OpenAiClient,
    pipeline::{ResearchPipeline, RunOutcome},
    reports::ReportStore,
    roles::RoleRegistry,
};

/// Interactive deep-research assistant.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Research topic; prompted for interactively when omitted
    topic: Option<String>,

    /// Directory reports are saved into (overrides REPORTS_DIR)
    #[arg(long)]
    reports_dir: Option<PathBuf>,

    /// Print stage labels instead of an animated spinner
    #[arg(long)]
    no_spinner: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        research_model = %config.models.research,
        "Deep research starting"
    );

    let backend = match OpenAiClient::new(&config.openai, config.request.clone()) {
        Ok(c) => {
            info!(base_url = %c.base_url(), "OpenAI client initialized");
            c
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize OpenAI client");
            return Err(e.into());
        }
    };

    let roles = RoleRegistry::from_models(&config.models);
    let reports = ReportStore::new(cli.reports_dir.unwrap_or(config.reports.dir));

    let stdout = std::io::stdout();
    let animate = !cli.no_spinner && stdout.is_terminal();
    let terminal = Terminal::new(std::io::stdin().lock(), stdout, animate);

    let mut pipeline = ResearchPipeline::new(Arc::new(backend), roles, terminal, reports);

    match pipeline.run(cli.topic).await {
        RunOutcome::NoQuery => info!("No topic given, exiting"),
        RunOutcome::Completed { saved } => {
            info!(saved = ?saved, "Research run complete")
        }
        RunOutcome::Failed { message } => info!(error = %message, "Research run ended with error"),
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
