// Plancraft - AI-assisted planning from the command line
// Main entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use plancraft::cli::{Cli, TerminalConsole};
use plancraft::config::load_config;
use plancraft::planning::{ArtifactStore, PlanningSession, SessionOutcome};
use plancraft::providers::create_provider;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Load configuration
    let config = load_config(cli.config.as_deref(), &cli.overrides())?;

    // Resolve the provider once for the whole run
    let provider = create_provider(&config)?;

    let console = TerminalConsole::new()?;
    let store = ArtifactStore::new(config.plans_dir.clone());
    let mut session = PlanningSession::new(provider, console, store).with_locale(cli.lang);

    match session.run().await? {
        SessionOutcome::Completed { artifacts, .. } => {
            tracing::info!(checklist = %artifacts.checklist.display(), "Session completed");
        }
        SessionOutcome::Aborted(reason) => {
            tracing::info!(%reason, "Session aborted");
        }
    }

    Ok(())
}
