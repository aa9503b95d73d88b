//! Configuration types for the storefront backend.
//!
//! Responsibilities:
//! - Define the immutable `Config` aggregate and its five sub-records
//!   (server, database, cache, token, object storage).
//! - Provide `Default` impls reproducing the documented default table.
//! - Provide the small derived accessors downstream consumers need
//!   (listen address, postgres DSN, R2 endpoint, token expiry).
//!
//! Does NOT handle:
//! - Resolution from the environment (see `loader` module).
//! - Any network client construction; these are plain values.
//!
//! Invariants:
//! - Every field always holds a value; there are no optional fields.
//! - Sensitive fields use `secrecy::SecretString` so `Debug` output
//!   redacts them; raw values come out only via `ExposeSecret`.
//! - The aggregate is built once at startup and never mutated.

use chrono::Duration;
use secrecy::{ExposeSecret, SecretString};

use crate::constants::{
    DEFAULT_APP_ENV, DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD, DEFAULT_DB_PORT,
    DEFAULT_DB_SSLMODE, DEFAULT_DB_USER, DEFAULT_JWT_EXPIRE_HOURS_NUM, DEFAULT_JWT_SECRET,
    DEFAULT_PORT, DEFAULT_R2_ACCESS_KEY_ID, DEFAULT_R2_ACCOUNT_ID, DEFAULT_R2_BUCKET_NAME,
    DEFAULT_R2_PUBLIC_URL, DEFAULT_R2_SECRET_ACCESS_KEY, DEFAULT_REDIS_URL,
};

/// Main configuration aggregate, produced once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Postgres connection settings.
    pub database: DatabaseConfig,
    /// Redis cache settings.
    pub cache: CacheConfig,
    /// JWT issuance settings.
    pub token: TokenConfig,
    /// Cloudflare R2 object storage settings.
    pub storage: ObjectStorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            token: TokenConfig::default(),
            storage: ObjectStorageConfig::default(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port, kept as a string as it is spliced into a bind address.
    pub port: String,
    /// Deployment environment name ("development", "production", ...).
    pub env: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            env: DEFAULT_APP_ENV.to_string(),
        }
    }
}

impl ServerConfig {
    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Whether this is a production deployment.
    pub fn is_production(&self) -> bool {
        self.env == "production"
    }
}

/// Postgres connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    /// Database password; redacted in `Debug` output.
    pub password: SecretString,
    /// Database name.
    pub name: String,
    /// SSL mode ("disable", "require", ...).
    pub ssl_mode: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT.to_string(),
            user: DEFAULT_DB_USER.to_string(),
            password: SecretString::new(DEFAULT_DB_PASSWORD.to_string().into()),
            name: DEFAULT_DB_NAME.to_string(),
            ssl_mode: DEFAULT_DB_SSLMODE.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Keyword/value postgres connection string.
    ///
    /// Exposes the password; hand the result straight to the driver and do
    /// not log it.
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={} sslmode={}",
            self.host,
            self.port,
            self.user,
            self.password.expose_secret(),
            self.name,
            self.ssl_mode,
        )
    }
}

/// Redis cache settings.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Connection URL. Empty means the cache is disabled.
    pub url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REDIS_URL.to_string(),
        }
    }
}

impl CacheConfig {
    /// Whether a cache URL was configured.
    pub fn is_enabled(&self) -> bool {
        !self.url.is_empty()
    }
}

/// JWT issuance settings.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Signing secret; redacted in `Debug` output.
    pub secret: SecretString,
    /// Token lifetime in hours.
    pub expire_hours: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: SecretString::new(DEFAULT_JWT_SECRET.to_string().into()),
            expire_hours: DEFAULT_JWT_EXPIRE_HOURS_NUM,
        }
    }
}

impl TokenConfig {
    /// Token lifetime as a duration, for computing `exp` claims.
    pub fn expiry(&self) -> Duration {
        Duration::hours(self.expire_hours)
    }
}

/// Cloudflare R2 object storage settings.
#[derive(Debug, Clone)]
pub struct ObjectStorageConfig {
    /// Cloudflare account identifier.
    pub account_id: String,
    /// S3 access key id; redacted in `Debug` output.
    pub access_key_id: SecretString,
    /// S3 secret access key; redacted in `Debug` output.
    pub secret_access_key: SecretString,
    /// Bucket name.
    pub bucket: String,
    /// Public base URL objects are served from.
    pub public_url: String,
}

impl Default for ObjectStorageConfig {
    fn default() -> Self {
        Self {
            account_id: DEFAULT_R2_ACCOUNT_ID.to_string(),
            access_key_id: SecretString::new(DEFAULT_R2_ACCESS_KEY_ID.to_string().into()),
            secret_access_key: SecretString::new(DEFAULT_R2_SECRET_ACCESS_KEY.to_string().into()),
            bucket: DEFAULT_R2_BUCKET_NAME.to_string(),
            public_url: DEFAULT_R2_PUBLIC_URL.to_string(),
        }
    }
}

impl ObjectStorageConfig {
    /// S3-compatible endpoint URL for the configured account.
    pub fn endpoint(&self) -> String {
        format!("https://{}.r2.cloudflarestorage.com", self.account_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_default_table() {
        let config = Config::default();

        assert_eq!(config.server.port, "8080");
        assert_eq!(config.server.env, "development");
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, "5432");
        assert_eq!(config.database.user, "postgres");
        assert_eq!(config.database.password.expose_secret(), "");
        assert_eq!(config.database.name, "postgres");
        assert_eq!(config.database.ssl_mode, "disable");
        assert_eq!(config.cache.url, "");
        assert_eq!(config.token.secret.expose_secret(), "secret");
        assert_eq!(config.token.expire_hours, 72);
        assert_eq!(config.storage.account_id, "");
        assert_eq!(config.storage.access_key_id.expose_secret(), "");
        assert_eq!(config.storage.secret_access_key.expose_secret(), "");
        assert_eq!(config.storage.bucket, "product-images");
        assert_eq!(config.storage.public_url, "");
    }

    #[test]
    fn test_bind_addr_uses_port() {
        let server = ServerConfig {
            port: "3000".to_string(),
            env: "development".to_string(),
        };
        assert_eq!(server.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_is_production() {
        let mut server = ServerConfig::default();
        assert!(!server.is_production());
        server.env = "production".to_string();
        assert!(server.is_production());
    }

    #[test]
    fn test_connection_string_keyword_value_form() {
        let db = DatabaseConfig {
            host: "db.internal".to_string(),
            port: "5433".to_string(),
            user: "shop".to_string(),
            password: SecretString::new("hunter2".to_string().into()),
            name: "storefront".to_string(),
            ssl_mode: "require".to_string(),
        };
        assert_eq!(
            db.connection_string(),
            "host=db.internal port=5433 user=shop password=hunter2 dbname=storefront sslmode=require"
        );
    }

    #[test]
    fn test_cache_enabled_only_with_url() {
        assert!(!CacheConfig::default().is_enabled());
        let cache = CacheConfig {
            url: "redis://localhost:6379".to_string(),
        };
        assert!(cache.is_enabled());
    }

    #[test]
    fn test_token_expiry_duration() {
        let token = TokenConfig {
            secret: SecretString::new("secret".to_string().into()),
            expire_hours: 48,
        };
        assert_eq!(token.expiry(), Duration::hours(48));
    }

    #[test]
    fn test_storage_endpoint_from_account_id() {
        let storage = ObjectStorageConfig {
            account_id: "abc123".to_string(),
            ..Default::default()
        };
        assert_eq!(storage.endpoint(), "https://abc123.r2.cloudflarestorage.com");
    }

    /// Debug output of the aggregate must not expose secret values.
    #[test]
    fn test_config_debug_does_not_expose_secrets() {
        let config = Config {
            database: DatabaseConfig {
                password: SecretString::new("db-password-123".to_string().into()),
                ..Default::default()
            },
            token: TokenConfig {
                secret: SecretString::new("signing-secret-456".to_string().into()),
                expire_hours: 72,
            },
            storage: ObjectStorageConfig {
                access_key_id: SecretString::new("AKIAEXAMPLE".to_string().into()),
                secret_access_key: SecretString::new("storage-secret-789".to_string().into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let debug_output = format!("{:?}", config);

        assert!(!debug_output.contains("db-password-123"));
        assert!(!debug_output.contains("signing-secret-456"));
        assert!(!debug_output.contains("AKIAEXAMPLE"));
        assert!(!debug_output.contains("storage-secret-789"));

        // Non-sensitive data stays visible.
        assert!(debug_output.contains("product-images"));
        assert!(debug_output.contains("localhost"));
    }
}
