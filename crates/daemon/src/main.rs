//! TODO Daemon - Main Entry Point
//! Composition root: config, logging, pool, schema, JSON-RPC server

mod config;

use anyhow::Result;
use config::{DaemonConfig, LogFormat};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use todo_api_rpc::{RpcServer, RpcServerConfig};
use todo_core::application::TodoService;
use todo_infra_sqlite::{create_pool_with, ensure_schema, PoolSettings, SqliteTodoRepository};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = DaemonConfig::from_env()?;

    // 2. Initialize logging
    init_logging(config.log_format)?;

    info!("TODO daemon v{} starting...", VERSION);
    info!(db_path = %config.db_path, "Initializing database...");

    // 3. Initialize database
    let pool = create_pool_with(
        &config.db_path,
        &PoolSettings {
            max_connections: config.db_max_connections,
            ..Default::default()
        },
    )
    .await?;
    ensure_schema(&pool).await?;

    // 4. Setup dependencies (DI wiring)
    let todo_repo = Arc::new(SqliteTodoRepository::new(pool.clone()));
    let service = TodoService::with_config(todo_repo, config.service);

    // 5. Start JSON-RPC server
    let rpc_config = RpcServerConfig {
        host: config.rpc_host.clone(),
        port: config.rpc_port,
        request_timeout: config.request_timeout,
    };
    let (addr, rpc_handle) = RpcServer::new(rpc_config, service).start().await?;

    info!(%addr, "System ready. Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;
    pool.close().await;

    info!("Shutdown complete.");

    Ok(())
}

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("todo=info"))?;

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .try_init()?;
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .try_init()?;
        }
    }

    Ok(())
}
