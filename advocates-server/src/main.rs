//! advocates-server - records endpoint for the advocate directory
//!
//! Startup order: configuration, tracing, database pool, HTTP server.
//! A missing DATABASE_URL aborts startup before anything is served.

use std::net::SocketAddr;
use std::path::PathBuf;

use advocates_common::config::{load_toml_config, resolve_port, DatabaseConfig, TomlConfig};
use advocates_common::db;
use advocates_server::{build_router, AppState, RecordStore};
use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for advocates-server
#[derive(Parser, Debug)]
#[command(name = "advocates-server")]
#[command(about = "Records endpoint for the advocate directory")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides ADVOCATES_PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Config file (default: platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Create the advocates table before serving
    #[arg(long)]
    init_schema: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_error) = match load_toml_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (TomlConfig::default(), Some(e)),
    };

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                let level = &config.logging.level;
                format!("advocates_server={level},advocates_common={level},tower_http={level}")
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting advocates-server v{}", env!("CARGO_PKG_VERSION"));

    if let Some(e) = config_error {
        warn!("Using default configuration: {}", e);
    }

    let db_config = DatabaseConfig::from_env().context("Database configuration")?;
    let pool = db::connect(&db_config).context("Failed to configure database pool")?;

    if args.init_schema {
        db::init_schema(&pool)
            .await
            .context("Failed to initialize schema")?;
    }

    let state = AppState::new(RecordStore::Postgres(pool));
    let app = build_router(state);

    let port = resolve_port(args.port, &config);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("advocates-server listening on http://{}", addr);
    info!("Records endpoint: http://{}/api/advocates", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
