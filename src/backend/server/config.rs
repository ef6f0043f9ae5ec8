/**
 * Server Configuration
 *
 * Loading and validation of server configuration, and construction of the
 * record store it points at.
 *
 * # Configuration Sources
 *
 * Later sources win:
 * 1. Built-in defaults
 * 2. TOML file named by `BOARDCAST_CONFIG` (optional)
 * 3. Environment variables (a `.env` file is loaded first if present)
 *
 * | Variable | Default | Meaning |
 * |---|---|---|
 * | `SERVER_PORT` | `3001` | listen port |
 * | `API_PREFIX` | `/api` | path prefix for every route |
 * | `DATABASE_URL` | unset | SQLite URL; unset means in-memory store |
 * | `JWT_SECRET` | unset | token signing key; unset means random per process |
 * | `TOKEN_TTL_SECS` | `1440` | token lifetime |
 * | `BCRYPT_COST` | `12` | password hashing cost |
 * | `BROADCAST_CAPACITY` | `1000` | events buffered per subscriber |
 * | `SEED_FILE` | unset | JSON seed applied to an empty store |
 */

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::store::{MemoryStore, RecordStore, SqliteStore, StoreResult};

/// Server configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub port: u16,
    pub api_prefix: String,
    pub database_url: Option<String>,
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: u64,
    pub bcrypt_cost: u32,
    pub broadcast_capacity: usize,
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            api_prefix: "/api".to_string(),
            database_url: None,
            jwt_secret: None,
            token_ttl_secs: 1440,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            broadcast_capacity: 1000,
            seed_file: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the optional TOML file and the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let mut config = match std::env::var("BOARDCAST_CONFIG") {
            Ok(path) => Self::from_toml_file(PathBuf::from(path))?,
            Err(_) => Self::default(),
        };

        if let Some(port) = env_parse("SERVER_PORT")? {
            config.port = port;
        }
        if let Ok(prefix) = std::env::var("API_PREFIX") {
            config.api_prefix = prefix;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database_url = Some(url);
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            config.jwt_secret = Some(secret);
        }
        if let Some(ttl) = env_parse("TOKEN_TTL_SECS")? {
            config.token_ttl_secs = ttl;
        }
        if let Some(cost) = env_parse("BCRYPT_COST")? {
            config.bcrypt_cost = cost;
        }
        if let Some(capacity) = env_parse("BROADCAST_CAPACITY")? {
            config.broadcast_capacity = capacity;
        }
        if let Ok(path) = std::env::var("SEED_FILE") {
            config.seed_file = Some(PathBuf::from(path));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: PathBuf) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api_prefix.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "api_prefix must start with '/', got '{}'",
                self.api_prefix
            )));
        }
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::Invalid("token_ttl_secs must be positive".into()));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::Invalid(format!(
                "bcrypt_cost must be within 4..=31, got {}",
                self.bcrypt_cost
            )));
        }
        if self.broadcast_capacity == 0 {
            return Err(ConfigError::Invalid("broadcast_capacity must be positive".into()));
        }
        Ok(())
    }

    /// Route prefix without a trailing slash (`/` becomes empty)
    pub fn normalized_prefix(&self) -> &str {
        self.api_prefix.trim_end_matches('/')
    }
}

fn env_parse<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(None),
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.api_prefix = prefix.into();
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl_secs(mut self, ttl: u64) -> Self {
        self.config.token_ttl_secs = ttl;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    pub fn broadcast_capacity(mut self, capacity: usize) -> Self {
        self.config.broadcast_capacity = capacity;
        self
    }

    pub fn seed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.seed_file = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Open the record store the configuration points at
///
/// - `DATABASE_URL` set: SQLite store at that URL (migrations applied).
///   A connection failure is returned, never replaced by the in-memory store.
/// - `DATABASE_URL` unset: in-memory store.
pub async fn load_store(config: &AppConfig) -> StoreResult<Arc<dyn RecordStore>> {
    match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let store = SqliteStore::connect(url).await.map_err(|e| {
                tracing::error!("Failed to open database: {}", e);
                e
            })?;
            tracing::info!("Database ready, migrations applied");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Records are kept in memory only.");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
