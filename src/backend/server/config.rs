/**
 * Server Configuration
 *
 * This module loads server settings from environment variables and opens
 * the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Every setting has a default suitable for local development, so an empty
 * environment starts a working server. The binary loads `.env` first.
 *
 * # Error Handling
 *
 * Malformed values (a non-numeric port, an unknown boolean) are reported as
 * `ConfigError` instead of silently falling back, so typos are caught at
 * startup.
 */
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use thiserror::Error;

/// Identity provider endpoint used by the hosted deployment
pub const DEFAULT_AUTH_SESSION_URL: &str =
    "https://demobackend.emergentagent.com/auth/v1/env/oauth/session-data";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("failed to open database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Settings for the text-generation service
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// `None` disables every model call; callers fall back immediately
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub auth_session_url: String,
    pub llm: LlmConfig,
    /// Budget for the panic button's AI enrichment
    pub crisis_ai_timeout: Duration,
    /// Budget for an AI companion reply
    pub companion_timeout: Duration,
    /// Ask the model to classify posts and chat messages
    pub content_moderation: bool,
    pub cookie_secure: bool,
    pub seed_communities: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://carecircle.db?mode=rwc".to_string(),
            port: 8001,
            cors_origins: vec!["*".to_string()],
            auth_session_url: DEFAULT_AUTH_SESSION_URL.to_string(),
            llm: LlmConfig {
                api_key: None,
                base_url: "https://api.openai.com/v1".to_string(),
                model: "gpt-5".to_string(),
            },
            crisis_ai_timeout: Duration::from_millis(5_000),
            companion_timeout: Duration::from_secs(30),
            content_moderation: false,
            cookie_secure: true,
            seed_communities: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match var("SERVER_PORT") {
            Some(value) => parse_number::<u16>("SERVER_PORT", &value)?,
            None => defaults.port,
        };
        let crisis_ai_timeout = match var("CRISIS_AI_TIMEOUT_MS") {
            Some(value) => Duration::from_millis(parse_number("CRISIS_AI_TIMEOUT_MS", &value)?),
            None => defaults.crisis_ai_timeout,
        };
        let companion_timeout = match var("COMPANION_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_number("COMPANION_TIMEOUT_SECS", &value)?),
            None => defaults.companion_timeout,
        };
        let cors_origins = match var("CORS_ORIGINS") {
            Some(value) => value
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or(defaults.database_url),
            port,
            cors_origins,
            auth_session_url: var("AUTH_SESSION_URL").unwrap_or(defaults.auth_session_url),
            llm: LlmConfig {
                api_key: var("LLM_API_KEY"),
                base_url: var("LLM_BASE_URL").unwrap_or(defaults.llm.base_url),
                model: var("LLM_MODEL").unwrap_or(defaults.llm.model),
            },
            crisis_ai_timeout,
            companion_timeout,
            content_moderation: parse_flag(
                "CONTENT_MODERATION",
                var("CONTENT_MODERATION"),
                defaults.content_moderation,
            )?,
            cookie_secure: parse_flag("COOKIE_SECURE", var("COOKIE_SECURE"), defaults.cookie_secure)?,
            seed_communities: parse_flag(
                "SEED_COMMUNITIES",
                var("SEED_COMMUNITIES"),
                defaults.seed_communities,
            )?,
        })
    }
}

fn parse_number<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

fn parse_flag(name: &'static str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { name, value }),
    }
}

/// Open the SQLite pool and run migrations
///
/// In-memory databases are limited to a single connection that is never
/// recycled: every SQLite `:memory:` connection is its own database.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, ConfigError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(8)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
