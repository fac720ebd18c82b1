//! CLI entry point - the composition root.
//!
//! Loads `.env`, initialises logging, bootstraps the context and dispatches
//! to a handler. Errors are printed once and turned into an exit code.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use myai_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use myai_core::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging (RUST_LOG wins over -v)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let command = cli.command.unwrap_or(Commands::Shell);

    // Listing voices needs no API key
    if let Commands::Voices = command {
        let settings = Settings::from_env()?;
        handlers::voices::execute(settings.default_voice);
        return Ok(());
    }

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::from_env(cli.api_key)?;
    let ctx = bootstrap(config)?;

    match command {
        Commands::Chat { message } => handlers::chat::execute(&ctx, message).await,
        Commands::Vision { image, prompt } => {
            handlers::vision::execute(&ctx, &image, &prompt).await
        }
        Commands::Speak { text, voice } => {
            handlers::speak::execute(&ctx, &text.join(" "), voice).await
        }
        Commands::Shell => handlers::shell::execute(&ctx).await,
        Commands::Voices => Ok(()),
    }
}
