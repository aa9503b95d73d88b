//! Centralized environment variable names and default values.
//!
//! This module contains the complete external contract surface of the
//! configuration crate: every variable the loader reads and the default
//! each one falls back to. Keeping them here avoids magic string
//! duplication between the loader, the `Default` impls, and the tests.

// =============================================================================
// Server
// =============================================================================

/// HTTP listen port variable.
pub const ENV_PORT: &str = "PORT";

/// Default HTTP listen port.
pub const DEFAULT_PORT: &str = "8080";

/// Deployment environment name variable ("development", "production", ...).
pub const ENV_APP_ENV: &str = "ENV";

/// Default deployment environment name.
pub const DEFAULT_APP_ENV: &str = "development";

// =============================================================================
// Database (postgres)
// =============================================================================

/// Database host variable.
pub const ENV_DB_HOST: &str = "DB_HOST";

/// Default database host.
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Database port variable.
pub const ENV_DB_PORT: &str = "DB_PORT";

/// Default database port.
pub const DEFAULT_DB_PORT: &str = "5432";

/// Database user variable.
pub const ENV_DB_USER: &str = "DB_USER";

/// Default database user.
pub const DEFAULT_DB_USER: &str = "postgres";

/// Database password variable.
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";

/// Default database password (empty; local trust auth).
pub const DEFAULT_DB_PASSWORD: &str = "";

/// Database name variable.
pub const ENV_DB_NAME: &str = "DB_NAME";

/// Default database name.
pub const DEFAULT_DB_NAME: &str = "postgres";

/// Database SSL mode variable ("disable", "require", ...).
pub const ENV_DB_SSLMODE: &str = "DB_SSLMODE";

/// Default database SSL mode.
pub const DEFAULT_DB_SSLMODE: &str = "disable";

// =============================================================================
// Cache (redis)
// =============================================================================

/// Redis connection URL variable. Empty means the cache is disabled.
pub const ENV_REDIS_URL: &str = "REDIS_URL";

/// Default redis URL (empty, cache disabled).
pub const DEFAULT_REDIS_URL: &str = "";

// =============================================================================
// Token issuance (JWT)
// =============================================================================

/// JWT signing secret variable.
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";

/// Default JWT signing secret (development only).
pub const DEFAULT_JWT_SECRET: &str = "secret";

/// JWT expiration-in-hours variable.
pub const ENV_JWT_EXPIRE_HOURS: &str = "JWT_EXPIRE_HOURS";

/// Default JWT expiration, as the string the resolution rule sees.
pub const DEFAULT_JWT_EXPIRE_HOURS: &str = "72";

/// Default JWT expiration as a number, for the use-default parse policy.
pub const DEFAULT_JWT_EXPIRE_HOURS_NUM: i64 = 72;

// =============================================================================
// Object storage (Cloudflare R2)
// =============================================================================

/// R2 account identifier variable.
pub const ENV_R2_ACCOUNT_ID: &str = "R2_ACCOUNT_ID";

/// Default R2 account identifier.
pub const DEFAULT_R2_ACCOUNT_ID: &str = "";

/// R2 access key id variable.
pub const ENV_R2_ACCESS_KEY_ID: &str = "R2_ACCESS_KEY_ID";

/// Default R2 access key id.
pub const DEFAULT_R2_ACCESS_KEY_ID: &str = "";

/// R2 secret access key variable.
pub const ENV_R2_SECRET_ACCESS_KEY: &str = "R2_SECRET_ACCESS_KEY";

/// Default R2 secret access key.
pub const DEFAULT_R2_SECRET_ACCESS_KEY: &str = "";

/// R2 bucket name variable.
pub const ENV_R2_BUCKET_NAME: &str = "R2_BUCKET_NAME";

/// Default R2 bucket name.
pub const DEFAULT_R2_BUCKET_NAME: &str = "product-images";

/// R2 public base URL variable.
pub const ENV_R2_PUBLIC_URL: &str = "R2_PUBLIC_URL";

/// Default R2 public base URL.
pub const DEFAULT_R2_PUBLIC_URL: &str = "";
