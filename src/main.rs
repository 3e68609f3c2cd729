//! GameSmith - prompt-driven web mini-game generator CLI
//!
//! Main entry point for the GameSmith application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gamesmith::cli::{Cli, Commands};
use gamesmith::commands;
use gamesmith::config::Config;
use gamesmith::session::Session;
use gamesmith::storage::GameStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // If the user supplied a store path on the CLI, mirror it into
    // GAMESMITH_STORE_DB so the store initializer can pick it up. This keeps
    // callers unchanged while allowing `GameStore::new()` to honor an
    // override.
    if let Some(db_path) = &cli.store_path {
        std::env::set_var("GAMESMITH_STORE_DB", db_path);
        tracing::info!("Using store DB override from CLI: {}", db_path);
    }

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Seed the session once from the store; every command mutates it
    // through its explicit intents.
    let store = GameStore::new()?;
    let mut session = Session::open(store);

    // Execute command
    match cli.command {
        Commands::Generate { prompt } => {
            tracing::info!("Starting generation");
            commands::generate::run_generate(&config, &mut session, &prompt).await?;
            Ok(())
        }
        Commands::Preview { output } => {
            tracing::info!("Exporting preview document");
            commands::preview::run_preview(&config, &mut session, output)?;
            Ok(())
        }
        Commands::Save { name } => {
            tracing::info!("Saving current game to history");
            commands::save::run_save(&mut session, name)?;
            Ok(())
        }
        Commands::History { command } => {
            tracing::info!("Starting history command");
            commands::history::handle_history(&mut session, command)?;
            Ok(())
        }
        Commands::Reset { yes } => {
            tracing::info!("Resetting current session state");
            commands::reset::run_reset(&mut session, yes)?;
            Ok(())
        }
        Commands::Show => {
            commands::show::run_show(&session)?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gamesmith=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
