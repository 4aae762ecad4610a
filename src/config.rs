//! Process configuration for the task server.
//!
//! Every option can be supplied as a command-line flag or through the
//! environment variable named alongside it.

use clap::Parser;
use std::path::PathBuf;

/// Default number of pooled `PostgreSQL` connections.
pub const DEFAULT_POOL_SIZE: u32 = 5;

/// Runtime configuration for the task server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "task-server", version, about = "Task tracking HTTP service")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// `PostgreSQL` connection URL. Tasks are kept in memory when unset.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled `PostgreSQL` connections.
    #[arg(long, env = "DATABASE_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pub database_pool_size: u32,

    /// Directory of static files served for non-API paths.
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Returns the `host:port` pair to bind.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the storage backend this configuration selects.
    #[must_use]
    pub fn storage(&self) -> StorageBackend<'_> {
        self.database_url
            .as_deref()
            .map_or(StorageBackend::InMemory, StorageBackend::Postgres)
    }
}

/// Storage backend chosen at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend<'a> {
    /// Process-local storage, lost on exit.
    InMemory,
    /// `PostgreSQL` at the given connection URL.
    Postgres(&'a str),
}
