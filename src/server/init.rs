/**
 * Server Initialization
 *
 * Builds the Axum application from a validated `ServerConfig`:
 *
 * 1. Connect the PostgreSQL pool
 * 2. Run migrations
 * 3. Construct the token service from the configured secret
 * 4. Assemble the router with the access gate applied
 *
 * Unlike configuration parsing (which distinguishes error cases), any
 * failure here is fatal: the application cannot serve requests without
 * its database or an up-to-date schema.
 */

use axum::Router;
use sqlx::PgPool;

use crate::auth::sessions::TokenService;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns the underlying `sqlx` error if the database connection or the
/// migration run fails.
pub async fn create_app(config: &ServerConfig) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Connecting to database...");
    let db = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&db).await?;
    tracing::info!("Database migrations completed");

    let state = AppState {
        db,
        tokens: TokenService::new(config.token_secret.as_bytes()),
        cookie_secure: config.production,
    };

    Ok(create_router(state))
}
