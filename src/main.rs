use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

mod commands;

use commands::{ConfigCommand, ItemCommand, ThemeCommand};
use menucat::config::Config;
use menucat::prefs::PreferenceStore;
use menucat_core::{CatalogClient, CatalogSession};

#[derive(Parser)]
#[command(name = "menucat")]
#[command(version)]
#[command(about = "Manage a restaurant menu catalog on a remote server", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List, add, edit and delete menu items
    Item(ItemCommand),

    /// Switch between light and dark display
    Theme(ThemeCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menucat=warn,menucat_core=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Save config path for init command
    let cli_config_path = cli.config.clone();

    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Item(cmd)) => {
            let theme = PreferenceStore::new(config.prefs_path.value.clone()).theme();
            let client = CatalogClient::with_timeout(
                config.server_url.value.clone(),
                Duration::from_secs(config.timeout_secs.value),
            )?;
            let mut session = CatalogSession::new(client);
            cmd.run(&mut session, theme).await?;
        }
        Some(Commands::Theme(cmd)) => {
            cmd.run(&config)?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config, cli_config_path)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
