//! Adapter implementations of the task ports.
//!
//! - [`memory`]: isolated in-process storage for tests and local runs
//! - [`postgres`]: Diesel-backed `PostgreSQL` storage

pub mod memory;
pub mod postgres;
