/**
 * Current User Handler
 *
 * Implements GET /api/auth/me: resolves the session behind the request
 * and returns the safe user projection, or 401 when there is none.
 * Invalid, expired, and absent tokens are indistinguishable here.
 */

use axum::{extract::State, http::HeaderMap, response::Json};

use crate::auth::resolver::{require_session, SessionUser};
use crate::error::AppError;
use crate::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - no valid session
/// * `500 Internal Server Error` - persistence failure
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionUser>, AppError> {
    let user = require_session(&state, &headers).await?;
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions::TokenService;
    use axum::http::header::COOKIE;
    use sqlx::postgres::PgPoolOptions;

    fn test_state() -> AppState {
        AppState {
            db: PgPoolOptions::new()
                .connect_lazy("postgres://postgres@localhost/eventhub_test")
                .unwrap(),
            tokens: TokenService::new(b"test-secret"),
            cookie_secure: false,
        }
    }

    #[tokio::test]
    async fn test_no_cookie_is_unauthorized() {
        let result = get_me(State(test_state()), HeaderMap::new()).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_invalid_token_is_unauthorized() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "token=not.a.token".parse().unwrap());

        let result = get_me(State(test_state()), headers).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
