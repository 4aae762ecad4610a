//! Runs the task tracker HTTP server.
//!
//! Usage:
//!
//! ```text
//! task-server [--host <HOST>] [--port <PORT>] [--database-url <URL>]
//!             [--database-pool-size <N>] [--static-dir <DIR>]
//! ```
//!
//! Each flag falls back to the matching environment variable (`HOST`,
//! `PORT`, `DATABASE_URL`, `DATABASE_POOL_SIZE`, `STATIC_DIR`). Without a
//! database URL tasks are kept in memory for the lifetime of the process.
//! Log filtering follows `RUST_LOG`.

use clap::Parser;
use mockable::DefaultClock;
use std::path::PathBuf;
use std::sync::Arc;
use task_tracker::config::{ServerConfig, StorageBackend};
use task_tracker::http;
use task_tracker::task::{
    adapters::{
        memory::InMemoryTaskRepository,
        postgres::{PostgresTaskRepository, connect_pool},
    },
    ports::{TaskRepository, TaskRepositoryError},
    services::TaskLifecycleService,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_LOG_FILTER: &str = "task_tracker=info,task_server=info,tower_http=info";

/// Errors that can occur while starting or running the server.
#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to build database pool: {0}")]
    Pool(#[source] diesel::r2d2::PoolError),
    #[error("failed to apply database schema: {0}")]
    Schema(#[source] TaskRepositoryError),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing();
    let config = ServerConfig::parse();
    run(config).await.map_err(Into::into)
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

async fn run(config: ServerConfig) -> Result<(), StartupError> {
    let listener = bind(&config).await?;
    let static_dir = config.static_dir.clone();

    match config.storage() {
        StorageBackend::Postgres(database_url) => {
            let pool = connect_pool(database_url, config.database_pool_size)
                .map_err(StartupError::Pool)?;
            let repository = PostgresTaskRepository::new(pool);
            repository
                .ensure_schema()
                .await
                .map_err(StartupError::Schema)?;
            tracing::info!("using PostgreSQL task storage");
            serve(listener, repository, static_dir).await
        }
        StorageBackend::InMemory => {
            tracing::warn!("DATABASE_URL is not set; tasks are kept in memory only");
            serve(listener, InMemoryTaskRepository::new(), static_dir).await
        }
    }
}

async fn bind(config: &ServerConfig) -> Result<TcpListener, StartupError> {
    let address = config.socket_addr();
    TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })
}

async fn serve<R>(
    listener: TcpListener,
    repository: R,
    static_dir: Option<PathBuf>,
) -> Result<(), StartupError>
where
    R: TaskRepository + 'static,
{
    if let Some(dir) = static_dir.as_deref() {
        tracing::info!(static_dir = %dir.display(), "serving static files");
    }
    let service = TaskLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock));
    let router = http::create_router(service, static_dir.as_deref());
    http::serve(listener, router)
        .await
        .map_err(StartupError::Serve)
}
