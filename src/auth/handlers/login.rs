/**
 * Login Handler
 *
 * Implements POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Validate that email and password were provided
 * 2. Look up the user by email
 * 3. Verify the password against the stored digest
 * 4. Issue a session token and set the session cookie
 *
 * # Security
 *
 * An unknown email and a wrong password produce the same response; the
 * client never learns whether an account exists.
 */

use axum::{
    extract::{Query, State},
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};

use crate::auth::cookie::session_cookie;
use crate::auth::handlers::types::{AuthResponse, LoginRequest, RedirectQuery};
use crate::auth::password::verify_password;
use crate::auth::users::find_user_by_email;
use crate::error::AppError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing email or password
/// * `401 Unauthorized` - unknown email or wrong password (generic)
/// * `500 Internal Server Error` - persistence or token failure
pub async fn login(
    State(state): State<AppState>,
    Query(query): Query<RedirectQuery>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let user = find_user_by_email(&state.db, &request.email).await?;

    // One rejection path for both failure modes
    let user = match user {
        Some(user) if verify_password(&request.password, &user.password_hash) => user,
        _ => {
            tracing::warn!("Failed login attempt");
            return Err(AppError::InvalidCredentials);
        }
    };

    let token = state.tokens.issue(user.id)?;
    let cookie = session_cookie(&token, state.cookie_secure);

    tracing::info!("User logged in: {}", user.id);

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AuthResponse {
            user: user.into(),
            redirect_to: query.target(),
        }),
    ))
}
