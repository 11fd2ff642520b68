// ABOUTME: Library side of the labtrack CLI
// ABOUTME: Configuration, repository wiring and table rendering shared by the binary and tests

pub mod changes;
pub mod config;
pub mod context;
pub mod quote_input;
pub mod render;

pub use changes::RequestChanges;
pub use config::{Config, ConfigError, StorageBackend};
pub use context::open_repository;

#[cfg(test)]
mod tests;
