//! # Roster Server
//!
//! In-memory user registry over HTTP.
//!
//! The server keeps a single [`roster_core::UserStore`] behind a mutex and
//! exposes it as a small REST surface: create, list (optionally filtered by
//! city), full-record update, and delete. Nothing is persisted; the
//! registry lives and dies with the process.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_core::UserStore;
use roster_server::{
    AppState,
    infra::{config::Config, seed::seed_sample_users},
    routes::create_router,
};

#[derive(Debug, Parser)]
#[command(name = "roster-server", about = "In-memory user registry over HTTP")]
struct Cli {
    /// Override the configured listen port
    #[arg(long)]
    port: Option<u16>,

    /// Override the configured listen host
    #[arg(long)]
    host: Option<String>,

    /// Start with the fixed sample records
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(port) = cli.port {
        config.server_port = port;
    }
    if let Some(host) = cli.host {
        config.server_host = host;
    }
    if cli.seed {
        config.seed_sample_users = true;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut store = UserStore::new();
    if config.seed_sample_users {
        seed_sample_users(&mut store).context("failed to seed sample users")?;
    }

    let config = Arc::new(config);
    let state = AppState::with_store(store, Arc::clone(&config));
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port)
        .parse()
        .context("invalid listen address")?;

    info!("Starting Roster server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
