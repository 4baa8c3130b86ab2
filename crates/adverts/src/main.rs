mod app;
mod config;
mod handlers;
mod state;
mod storage;

use std::sync::Arc;

use adverts_core::storage::AdvertRepository;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState, storage::InMemoryRepository};

/// Storage backend serving advert records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StorageBackend {
    /// Process-local map, lost on exit
    Memory,
    /// DynamoDB table
    #[cfg(feature = "dynamodb")]
    Dynamodb,
}

impl Default for StorageBackend {
    #[cfg(feature = "dynamodb")]
    fn default() -> Self {
        StorageBackend::Dynamodb
    }

    #[cfg(not(feature = "dynamodb"))]
    fn default() -> Self {
        StorageBackend::Memory
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Adverts - store and confirm advert submissions
#[derive(Parser, Debug)]
#[command(name = "adverts")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Storage backend
    #[arg(long, value_enum, default_value_t = StorageBackend::default(), env = "STORAGE_BACKEND")]
    storage: StorageBackend,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::default(), env = "LOG_FORMAT")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_format);

    let config = Config::from_env();
    let advert_repo = build_repository(cli.storage, &config).await;
    let state = AppState::new(advert_repo);

    // Build the application router
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Initialize the tracing subscriber.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "adverts=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Build the repository for the selected backend.
#[cfg_attr(not(feature = "dynamodb"), allow(unused_variables))]
async fn build_repository(backend: StorageBackend, config: &Config) -> Arc<dyn AdvertRepository> {
    match backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; adverts are lost on restart");
            Arc::new(InMemoryRepository::new())
        }
        #[cfg(feature = "dynamodb")]
        StorageBackend::Dynamodb => {
            let repo = storage::DynamoDbRepository::from_config(config).await;
            tracing::info!(
                table = repo.table_name(),
                target = %config.target_display(),
                "Using DynamoDB storage"
            );
            Arc::new(repo)
        }
    }
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["adverts"]).unwrap();

        assert_eq!(cli.port, 3000);
        assert_eq!(cli.storage, StorageBackend::default());
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_cli_memory_backend() {
        let cli = Cli::try_parse_from(["adverts", "--storage", "memory", "--log-format", "json"])
            .unwrap();

        assert_eq!(cli.storage, StorageBackend::Memory);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[tokio::test]
    async fn test_build_memory_repository() {
        let config = Config::from_lookup(|_| None);
        let repo = build_repository(StorageBackend::Memory, &config).await;
        assert!(repo.check_health().await);
    }
}
