/**
 * Registration Handler
 *
 * Implements POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate input (all fields required, password confirmation matches)
 * 2. Reject duplicate emails before any hashing happens
 * 3. Hash the password
 * 4. Create the user
 * 5. Issue a session token and set the session cookie
 *
 * Validation runs strictly before the hasher and the store are touched:
 * a mismatched confirmation never costs a bcrypt round or a query.
 */

use axum::{
    extract::{Query, State},
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};

use crate::auth::cookie::session_cookie;
use crate::auth::handlers::types::{AuthResponse, RedirectQuery, RegisterRequest};
use crate::auth::password::hash_password;
use crate::auth::users::{create_user, find_user_by_email};
use crate::error::AppError;
use crate::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields or password mismatch
/// * `409 Conflict` - an account with this email already exists
/// * `500 Internal Server Error` - hashing, persistence, or token failure
pub async fn register(
    State(state): State<AppState>,
    Query(query): Query<RedirectQuery>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.first_name.is_empty()
        || request.last_name.is_empty()
        || request.email.is_empty()
        || request.password.is_empty()
    {
        return Err(AppError::Validation("All fields are required".to_string()));
    }

    if !request.email.contains('@') {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }

    if request.password != request.confirm_password {
        return Err(AppError::Validation("Passwords do not match".to_string()));
    }

    // Duplicate check happens before hashing so a taken email performs no
    // write and no bcrypt work
    if find_user_by_email(&state.db, &request.email).await?.is_some() {
        tracing::warn!("Registration rejected, email already in use");
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = hash_password(&request.password)?;

    let user = create_user(
        &state.db,
        &request.first_name,
        &request.last_name,
        &request.email,
        &password_hash,
    )
    .await?;

    let token = state.tokens.issue(user.id)?;
    let cookie = session_cookie(&token, state.cookie_secure);

    tracing::info!("User registered: {}", user.id);

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AuthResponse {
            user: user.into(),
            redirect_to: query.target(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions::TokenService;
    use sqlx::postgres::PgPoolOptions;

    // Lazy pool: never dials unless a query runs, which lets the
    // validation paths be exercised without a database
    fn test_state() -> AppState {
        AppState {
            db: PgPoolOptions::new()
                .connect_lazy("postgres://postgres@localhost/eventhub_test")
                .unwrap(),
            tokens: TokenService::new(b"test-secret"),
            cookie_secure: false,
        }
    }

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "abc123".to_string(),
            confirm_password: "abc123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_password_mismatch_fails_before_hash_or_store() {
        let request = RegisterRequest {
            password: "abc123".to_string(),
            confirm_password: "abc124".to_string(),
            ..valid_request()
        };

        // The lazy pool has no database behind it; reaching persistence
        // would surface a Database error instead of Validation
        let result = register(
            State(test_state()),
            Query(RedirectQuery::default()),
            Json(request),
        )
        .await;

        match result {
            Err(AppError::Validation(message)) => {
                assert_eq!(message, "Passwords do not match");
            }
            _ => panic!("Expected validation error"),
        }
    }

    #[tokio::test]
    async fn test_missing_fields_rejected() {
        let request = RegisterRequest {
            email: String::new(),
            ..valid_request()
        };

        let result = register(
            State(test_state()),
            Query(RedirectQuery::default()),
            Json(request),
        )
        .await;

        match result {
            Err(AppError::Validation(message)) => {
                assert_eq!(message, "All fields are required");
            }
            _ => panic!("Expected validation error"),
        }
    }

    #[tokio::test]
    async fn test_malformed_email_rejected() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid_request()
        };

        let result = register(
            State(test_state()),
            Query(RedirectQuery::default()),
            Json(request),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
