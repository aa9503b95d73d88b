//! Configuration management for the storefront backend.
//!
//! This crate resolves the server, database, cache, token, and object
//! storage settings from the process environment (optionally merged with a
//! local `.env` file) into one immutable [`Config`] aggregate, applying a
//! documented default for every field.

pub mod constants;
pub mod env;
mod loader;
pub mod types;

pub use env::{EnvSource, ProcessEnv};
pub use loader::{ConfigError, ConfigLoader, ParseFailurePolicy};
pub use types::{
    CacheConfig, Config, DatabaseConfig, ObjectStorageConfig, ServerConfig, TokenConfig,
};
