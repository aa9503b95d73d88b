//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Merge an optional local `.env` file into the process environment
//!   without overwriting variables already set.
//! - Resolve every configuration field with the uniform rule: env value if
//!   non-empty, otherwise the documented default.
//! - Parse the single typed field (`JWT_EXPIRE_HOURS`) under an explicit
//!   parse-failure policy.
//!
//! Does NOT handle:
//! - Validation of resolved values; downstream consumers reject bad values.
//! - Reloading; the aggregate is built once at startup.
//!
//! Invariants / Assumptions:
//! - A missing `.env` file is an informational diagnostic, never an error.
//! - Variables already set in the process environment take precedence over
//!   `.env` file entries.
//! - Under the default (legacy) policy the loader cannot fail; `Err` is
//!   reachable only under `ParseFailurePolicy::Fail`.

use std::path::Path;

use secrecy::SecretString;
use thiserror::Error;

use crate::constants::{
    DEFAULT_APP_ENV, DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD, DEFAULT_DB_PORT,
    DEFAULT_DB_SSLMODE, DEFAULT_DB_USER, DEFAULT_JWT_EXPIRE_HOURS, DEFAULT_JWT_EXPIRE_HOURS_NUM,
    DEFAULT_JWT_SECRET, DEFAULT_PORT, DEFAULT_R2_ACCESS_KEY_ID, DEFAULT_R2_ACCOUNT_ID,
    DEFAULT_R2_BUCKET_NAME, DEFAULT_R2_PUBLIC_URL, DEFAULT_R2_SECRET_ACCESS_KEY,
    DEFAULT_REDIS_URL, ENV_APP_ENV, ENV_DB_HOST, ENV_DB_NAME, ENV_DB_PASSWORD, ENV_DB_PORT,
    ENV_DB_SSLMODE, ENV_DB_USER, ENV_JWT_EXPIRE_HOURS, ENV_JWT_SECRET, ENV_PORT,
    ENV_R2_ACCESS_KEY_ID, ENV_R2_ACCOUNT_ID, ENV_R2_BUCKET_NAME, ENV_R2_PUBLIC_URL,
    ENV_R2_SECRET_ACCESS_KEY, ENV_REDIS_URL,
};
use crate::env::{EnvSource, ProcessEnv, var_or};
use crate::types::{
    CacheConfig, Config, DatabaseConfig, ObjectStorageConfig, ServerConfig, TokenConfig,
};

/// Errors that can occur during configuration loading.
///
/// Only produced under [`ParseFailurePolicy::Fail`]; the legacy policy
/// swallows the one possible failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

/// What to do when `JWT_EXPIRE_HOURS` does not parse as an integer.
///
/// The original behavior silently resolved an unparsable value to zero
/// instead of the documented default. That quirk is kept available (and is
/// the default, for compatibility) alongside two corrected policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseFailurePolicy {
    /// Resolve to zero, silently. Legacy behavior.
    #[default]
    UseZero,
    /// Resolve to the documented numeric default.
    UseDefault,
    /// Surface a [`ConfigError::InvalidValue`].
    Fail,
}

/// Configuration loader that resolves fields from an environment source.
#[derive(Debug, Clone)]
pub struct ConfigLoader<E: EnvSource = ProcessEnv> {
    env: E,
    parse_failure: ParseFailurePolicy,
}

impl Default for ConfigLoader<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader<ProcessEnv> {
    /// Create a loader reading from the process environment.
    pub fn new() -> Self {
        Self {
            env: ProcessEnv,
            parse_failure: ParseFailurePolicy::default(),
        }
    }
}

impl<E: EnvSource> ConfigLoader<E> {
    /// Merge a local `.env` file into the process environment, if present.
    ///
    /// Variables already set in the process environment are not overwritten.
    /// A missing or unreadable file is not an error; loading continues with
    /// the process environment only.
    pub fn load_dotenv(self) -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
            Err(_) => tracing::info!("no .env file found, using environment variables"),
        }
        self
    }

    /// Merge a specific env file instead of searching for `.env`.
    ///
    /// Same non-overwriting, missing-file-tolerant semantics as
    /// [`load_dotenv`](Self::load_dotenv). Primarily for tests.
    pub fn load_dotenv_from(self, path: &Path) -> Self {
        match dotenvy::from_path(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "loaded env file"),
            Err(_) => tracing::info!(path = %path.display(), "env file not loaded"),
        }
        self
    }

    /// Replace the environment source, e.g. with a synthetic map in tests.
    pub fn with_source<S: EnvSource>(self, env: S) -> ConfigLoader<S> {
        ConfigLoader {
            env,
            parse_failure: self.parse_failure,
        }
    }

    /// Set the policy for an unparsable `JWT_EXPIRE_HOURS`.
    pub fn on_parse_failure(mut self, policy: ParseFailurePolicy) -> Self {
        self.parse_failure = policy;
        self
    }

    /// Resolve every field and build the configuration aggregate.
    ///
    /// Idempotent as long as the environment does not change between calls.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let expire_hours = self.resolve_expire_hours()?;

        Ok(Config {
            server: ServerConfig {
                port: var_or(&self.env, ENV_PORT, DEFAULT_PORT),
                env: var_or(&self.env, ENV_APP_ENV, DEFAULT_APP_ENV),
            },
            database: DatabaseConfig {
                host: var_or(&self.env, ENV_DB_HOST, DEFAULT_DB_HOST),
                port: var_or(&self.env, ENV_DB_PORT, DEFAULT_DB_PORT),
                user: var_or(&self.env, ENV_DB_USER, DEFAULT_DB_USER),
                password: SecretString::new(
                    var_or(&self.env, ENV_DB_PASSWORD, DEFAULT_DB_PASSWORD).into(),
                ),
                name: var_or(&self.env, ENV_DB_NAME, DEFAULT_DB_NAME),
                ssl_mode: var_or(&self.env, ENV_DB_SSLMODE, DEFAULT_DB_SSLMODE),
            },
            cache: CacheConfig {
                url: var_or(&self.env, ENV_REDIS_URL, DEFAULT_REDIS_URL),
            },
            token: TokenConfig {
                secret: SecretString::new(
                    var_or(&self.env, ENV_JWT_SECRET, DEFAULT_JWT_SECRET).into(),
                ),
                expire_hours,
            },
            storage: ObjectStorageConfig {
                account_id: var_or(&self.env, ENV_R2_ACCOUNT_ID, DEFAULT_R2_ACCOUNT_ID),
                access_key_id: SecretString::new(
                    var_or(&self.env, ENV_R2_ACCESS_KEY_ID, DEFAULT_R2_ACCESS_KEY_ID).into(),
                ),
                secret_access_key: SecretString::new(
                    var_or(&self.env, ENV_R2_SECRET_ACCESS_KEY, DEFAULT_R2_SECRET_ACCESS_KEY)
                        .into(),
                ),
                bucket: var_or(&self.env, ENV_R2_BUCKET_NAME, DEFAULT_R2_BUCKET_NAME),
                public_url: var_or(&self.env, ENV_R2_PUBLIC_URL, DEFAULT_R2_PUBLIC_URL),
            },
        })
    }

    /// Resolve `JWT_EXPIRE_HOURS` through the string rule, then parse it
    /// under the configured policy.
    fn resolve_expire_hours(&self) -> Result<i64, ConfigError> {
        let raw = var_or(&self.env, ENV_JWT_EXPIRE_HOURS, DEFAULT_JWT_EXPIRE_HOURS);
        match raw.parse::<i64>() {
            Ok(hours) => Ok(hours),
            Err(_) => match self.parse_failure {
                ParseFailurePolicy::UseZero => Ok(0),
                ParseFailurePolicy::UseDefault => Ok(DEFAULT_JWT_EXPIRE_HOURS_NUM),
                ParseFailurePolicy::Fail => Err(ConfigError::InvalidValue {
                    var: ENV_JWT_EXPIRE_HOURS.to_string(),
                    message: format!("must be an integer (got {:?})", raw),
                }),
            },
        }
    }
}

impl Config {
    /// Load configuration from an optional local `.env` file and the process
    /// environment, with the legacy parse policy.
    pub fn load() -> Result<Config, ConfigError> {
        ConfigLoader::new().load_dotenv().load()
    }
}
