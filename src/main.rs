use clap::{Parser, Subcommand};
use linecoach::adapters::DiscordNotifier;
use linecoach::agent::{extract_bet, CompletionClient};
use linecoach::api::{create_router, AppState};
use linecoach::config::AppConfig;
use linecoach::error::{CoachError, Result};
use linecoach::feeds::SportsFeeds;
use linecoach::store::{select_store, KvConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "linecoach", about = "AI betting coach web service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Parse a bet from free text and print the normalized JSON
    Extract {
        /// Free-form bet description
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => {
            let config = AppConfig::load()?;
            init_logging(&config.logging.level);
            run_server(config, port).await?;
        }
        Commands::Extract { text } => {
            init_logging("info");
            run_extract(&text).await?;
        }
    }

    Ok(())
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{default_level},linecoach=debug")));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run_server(config: AppConfig, port_override: Option<u16>) -> Result<()> {
    let port = port_override.unwrap_or(config.server.port);

    let store = select_store(KvConfig::from_env())?;
    let completion = Arc::new(CompletionClient::from_env()?);
    if !completion.is_configured() {
        warn!("OPENAI_API_KEY not set; coach and extraction endpoints will return errors");
    }
    let feeds = Arc::new(SportsFeeds::from_env()?);
    let discord = DiscordNotifier::from_env();

    let state = AppState::new(store, completion, feeds, discord);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, port)
        .parse()
        .map_err(|e| CoachError::Validation(format!("invalid listen address: {e}")))?;
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CoachError::Internal(format!("server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("failed to install shutdown handler: {}", e);
        return;
    }
    info!("shutdown signal received");
}

async fn run_extract(text: &str) -> Result<()> {
    let client = CompletionClient::from_env()?;
    let parsed = extract_bet(&client, text).await?;
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}
