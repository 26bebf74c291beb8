//! Grocery catalog service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────────▶ http::server (axum + tower-http layers)
//!                              │
//!                              ▼
//!                        http::handlers ──▶ rules::{category, product}
//!                                                  │
//!                                                  ▼
//!                                           store::Gateway (sqlx AnyPool)
//!                                                  │
//!                                                  ▼
//!                                           MySQL / SQLite
//! ```
//!
//! Cross-cutting: config (TOML + env), observability (tracing, metrics),
//! lifecycle (graceful shutdown).

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use lista_super::config::{self, ServiceConfig};
use lista_super::observability::{logging, metrics};
use lista_super::store::{self, Dialect, Gateway};
use lista_super::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "lista-super")]
#[command(about = "Grocery catalog HTTP service", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults plus env overrides apply without it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config: ServiceConfig = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::default_config()?,
    };

    logging::init_logging(&config.observability);
    tracing::info!("lista-super v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        error_status = ?config.http.error_status,
        bootstrap_schema = config.database.bootstrap_schema,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    // No reconnect logic: a store that is down at startup stops the process.
    let gateway = Gateway::connect(&config.database).await?;

    if config.database.bootstrap_schema {
        let dialect = Dialect::from_url(&config.database.url)
            .ok_or("database.url has an unsupported scheme")?;
        store::bootstrap(&gateway, dialect).await?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, gateway.clone());
    server.run(listener, shutdown.subscribe()).await?;

    gateway.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}
