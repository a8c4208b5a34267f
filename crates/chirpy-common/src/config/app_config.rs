//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! one is present).

use serde::Deserialize;
use std::{env, path::PathBuf, str::FromStr};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub polka: PolkaConfig,
    pub cors: CorsConfig,
    pub fileserver: FileServerConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Deployment platform
///
/// Defaults to `Production` so that development-only endpoints stay closed
/// unless explicitly enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[serde(alias = "dev")]
    Development,
    Staging,
    #[default]
    #[serde(alias = "prod")]
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dev" | "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "prod" | "production" => Ok(Self::Production),
            other => Err(ConfigError::InvalidValue("PLATFORM", other.to_string())),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// JWT configuration
#[derive(Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish()
    }
}

/// Billing webhook configuration
#[derive(Clone, Deserialize)]
pub struct PolkaConfig {
    pub api_key: String,
}

impl std::fmt::Debug for PolkaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolkaConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Static file server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FileServerConfig {
    #[serde(default = "default_fileserver_root")]
    pub root: PathBuf,
}

// Default value functions
fn default_app_name() -> String {
    "chirpy".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_run_migrations() -> bool {
    true
}

fn default_access_token_expiry() -> i64 {
    3600 // 1 hour
}

fn default_refresh_token_expiry() -> i64 {
    5_184_000 // 60 days
}

fn default_fileserver_root() -> PathBuf {
    PathBuf::from(".")
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if required keys are missing or values do not parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("PLATFORM")
                    .map(|s| s.parse::<Environment>())
                    .transpose()?
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parse_or(&lookup, "API_PORT", default_port)?,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: parse_or(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    default_max_connections,
                )?,
                min_connections: parse_or(
                    &lookup,
                    "DATABASE_MIN_CONNECTIONS",
                    default_min_connections,
                )?,
                run_migrations: parse_or(
                    &lookup,
                    "DATABASE_RUN_MIGRATIONS",
                    default_run_migrations,
                )?,
            },
            jwt: JwtConfig {
                secret: required("JWT_SECRET")?,
                access_token_expiry: parse_expiry(
                    &lookup,
                    "JWT_ACCESS_TOKEN_EXPIRY",
                    default_access_token_expiry,
                )?,
                refresh_token_expiry: parse_expiry(
                    &lookup,
                    "JWT_REFRESH_TOKEN_EXPIRY",
                    default_refresh_token_expiry,
                )?,
            },
            polka: PolkaConfig {
                api_key: required("POLKA_KEY")?,
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            fileserver: FileServerConfig {
                root: lookup("FILESERVER_ROOT")
                    .map(PathBuf::from)
                    .unwrap_or_else(default_fileserver_root),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

/// Longest accepted token lifetime, in seconds (ten years)
pub const MAX_TOKEN_EXPIRY_SECS: i64 = 315_360_000;

/// Token lifetimes must lie in `1..=MAX_TOKEN_EXPIRY_SECS`
fn parse_expiry<F>(lookup: &F, key: &'static str, default: fn() -> i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let secs = parse_or(lookup, key, default)?;
    if (1..=MAX_TOKEN_EXPIRY_SECS).contains(&secs) {
        Ok(secs)
    } else {
        Err(ConfigError::InvalidValue(key, secs.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
