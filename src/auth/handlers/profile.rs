/**
 * Profile Handlers
 *
 * Implements the authenticated profile mutations:
 *
 * - PUT /api/profile - update first/last name and email
 * - PUT /api/profile/password - change the password
 *
 * Both require a resolved session before touching persistence. The
 * password change re-verifies the current password and rejects it with
 * the same generic message as a failed login, so the endpoint cannot be
 * used to probe credentials.
 */

use axum::{extract::State, http::HeaderMap, response::Json};

use crate::auth::handlers::types::{UpdatePasswordRequest, UpdateProfileRequest};
use crate::auth::password::{hash_password, verify_password};
use crate::auth::resolver::{require_session, SessionUser};
use crate::auth::users::{
    find_user_by_email, find_user_by_id, update_password_hash, update_profile as update_profile_row,
};
use crate::error::AppError;
use crate::server::state::AppState;

/// Profile update handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields
/// * `401 Unauthorized` - no valid session
/// * `409 Conflict` - the new email belongs to another account
/// * `500 Internal Server Error` - persistence failure
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<SessionUser>, AppError> {
    let session = require_session(&state, &headers).await?;

    if request.first_name.is_empty() || request.last_name.is_empty() || request.email.is_empty() {
        return Err(AppError::Validation("All fields are required".to_string()));
    }

    // Changing to an email already owned by another account would trip
    // the unique constraint; reject it here so the client gets the
    // taxonomy error rather than a generic 500
    if request.email != session.email
        && find_user_by_email(&state.db, &request.email).await?.is_some()
    {
        return Err(AppError::DuplicateEmail);
    }

    let user = update_profile_row(
        &state.db,
        session.id,
        &request.first_name,
        &request.last_name,
        &request.email,
    )
    .await?;

    tracing::info!("Profile updated: {}", user.id);

    Ok(Json(user.into()))
}

/// Password change handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields or new-password mismatch
/// * `401 Unauthorized` - no valid session, or wrong current password
///   (surfaced as generic invalid credentials)
/// * `500 Internal Server Error` - hashing or persistence failure
pub async fn update_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdatePasswordRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let session = require_session(&state, &headers).await?;

    if request.current_password.is_empty()
        || request.new_password.is_empty()
        || request.confirm_password.is_empty()
    {
        return Err(AppError::Validation("All fields are required".to_string()));
    }

    if request.new_password != request.confirm_password {
        return Err(AppError::Validation(
            "New passwords do not match".to_string(),
        ));
    }

    // The session projection excludes the hash; fetch the full record
    let user = find_user_by_id(&state.db, session.id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&request.current_password, &user.password_hash) {
        tracing::warn!("Password change with wrong current password: {}", user.id);
        return Err(AppError::InvalidCredentials);
    }

    let password_hash = hash_password(&request.new_password)?;
    update_password_hash(&state.db, user.id, &password_hash).await?;

    tracing::info!("Password updated: {}", user.id);

    Ok(Json(serde_json::json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions::TokenService;
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
    async fn test_update_profile_requires_session() {
        let request = UpdateProfileRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };

        let result = update_profile(State(test_state()), HeaderMap::new(), Json(request)).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_update_password_requires_session() {
        let request = UpdatePasswordRequest {
            current_password: "old".to_string(),
            new_password: "new-password".to_string(),
            confirm_password: "new-password".to_string(),
        };

        let result = update_password(State(test_state()), HeaderMap::new(), Json(request)).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
