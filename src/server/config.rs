/**
 * Server Configuration
 *
 * Loads and validates configuration from environment variables, once, at
 * process start. Handlers never read the environment; everything they
 * need is carried in `AppState`.
 *
 * # Variables
 *
 * - `DATABASE_URL` - PostgreSQL connection string. Required.
 * - `TOKEN_SECRET` - signing secret for session tokens. Required in
 *   production. In development a fixed default is substituted with a
 *   loud warning; that default must never reach a production deployment,
 *   so production startup without the variable is a hard error.
 * - `APP_ENV` - "production" enables the cookie Secure attribute and the
 *   strict secret requirement. Anything else is treated as development.
 * - `SERVER_PORT` - listening port, default 3000.
 */

use thiserror::Error;

/// Development-only signing secret, substituted when `TOKEN_SECRET` is
/// unset outside production. Unsafe for any real deployment.
const DEV_TOKEN_SECRET: &str = "eventhub-dev-secret-do-not-use-in-production";

const DEFAULT_PORT: u16 = 3000;

/// Configuration errors are fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    #[error("TOKEN_SECRET is not set; refusing to start in production with the development default")]
    MissingTokenSecret,

    #[error("SERVER_PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Typed server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Secret key for signing and verifying session tokens
    pub token_secret: String,
    /// True when APP_ENV=production
    pub production: bool,
    /// Listening port
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// - `MissingDatabaseUrl` if `DATABASE_URL` is unset
    /// - `MissingTokenSecret` if `TOKEN_SECRET` is unset in production
    /// - `InvalidPort` if `SERVER_PORT` is set but not a valid port
    pub fn from_env() -> Result<Self, ConfigError> {
        let production = std::env::var("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let token_secret = match std::env::var("TOKEN_SECRET") {
            Ok(secret) => secret,
            Err(_) if production => return Err(ConfigError::MissingTokenSecret),
            Err(_) => {
                tracing::warn!(
                    "TOKEN_SECRET not set; using the development default. \
                     This is unsafe for production."
                );
                DEV_TOKEN_SECRET.to_string()
            }
        };

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            token_secret,
            production,
            port,
        })
    }
}
