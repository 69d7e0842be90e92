//! HTTP server command for the trivia API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS};
use trivia_server::{run_server, AppState, MemoryStore, PgStore, ServerConfig, TriviaStore};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", required_unless_present = "in_memory")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "TRIVIA_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Serve from an empty in-memory store instead of PostgreSQL (takes
    /// precedence over any database URL)
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server until Ctrl+C or SIGTERM
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn TriviaStore> = if args.in_memory {
        tracing::warn!("Serving from an in-memory store; data is lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        let database_url = args
            .database_url
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;
        let pool = create_pool_with_options(&database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;
        Arc::new(PgStore::new(pool))
    };

    tracing::info!("Starting trivia server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Blocks until shutdown; the store is closed before returning
    run_server(AppState::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}
