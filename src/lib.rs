//! Task tracker: a small HTTP service for creating, listing and completing
//! tasks.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: title validation and the task aggregate, free of
//!   infrastructure
//! - **Ports**: the storage contract the service depends on
//! - **Adapters**: in-memory and `PostgreSQL` storage
//! - **Services**: orchestration and the external task representation
//!
//! # Modules
//!
//! - [`task`]: domain, ports, adapters and services for tasks
//! - [`http`]: axum routing and error mapping
//! - [`config`]: command-line and environment configuration

pub mod config;
pub mod http;
pub mod task;
