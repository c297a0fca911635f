/**
 * Application State Management
 *
 * Defines the application state shared by all handlers and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Thread Safety
 *
 * Every field is read-only after initialization: `PgPool` is internally
 * synchronized, and `TokenService` holds immutable signing keys. Requests
 * never contend on shared mutable state.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::sessions::TokenService;

/// Application state
///
/// Constructed once during initialization and cloned per request by Axum.
/// The token service is injected here (rather than read from a global)
/// so tests can construct state with a deterministic secret.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub db: PgPool,

    /// Session token issuance and verification
    pub tokens: TokenService,

    /// Whether session cookies carry the Secure attribute. Enabled in
    /// production, disabled for local development over plain HTTP.
    pub cookie_secure: bool,
}

/// Allows handlers that only touch the database to extract `PgPool`
/// directly with `State(pool): State<PgPool>`.
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

/// Allows token-only code paths (the access gate) to extract the token
/// service without the rest of the state.
impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
