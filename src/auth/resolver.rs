/**
 * Session Resolver
 *
 * Recovers the authenticated user behind a request. Where the access
 * gate only checks token integrity, the resolver re-verifies the token
 * and hydrates the full user record from the store, returning a safe
 * projection that excludes the password hash.
 *
 * A missing cookie, an invalid or expired token, and a token whose user
 * no longer exists (deleted account with a still-valid token) all
 * resolve to "no session"; only persistence failures surface as errors.
 */

use axum::http::HeaderMap;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::cookie::session_token;
use crate::auth::users::{find_user_by_id, User};
use crate::error::AppError;
use crate::server::state::AppState;

/// Safe projection of an authenticated user
///
/// Explicitly excludes the password hash; this is the only user shape
/// handlers return to clients.
#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for SessionUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

/// Resolve the session behind a request
///
/// Reads the `token` cookie, verifies it, and looks up the user record.
///
/// # Errors
///
/// Only database failures error; every authentication failure mode is
/// `Ok(None)`.
pub async fn resolve_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Option<SessionUser>, AppError> {
    let Some(token) = session_token(headers) else {
        return Ok(None);
    };

    let Some(claims) = state.tokens.verify(&token) else {
        return Ok(None);
    };

    let Some(user_id) = claims.user_id() else {
        return Ok(None);
    };

    let Some(user) = find_user_by_id(&state.db, user_id).await? else {
        tracing::debug!("Valid token for missing user {}", user_id);
        return Ok(None);
    };

    Ok(Some(user.into()))
}

/// Resolve the session, failing if there is none
///
/// Used by every mutating operation: the caller gets either the
/// authenticated user or an authorization failure that surfaces as
/// "must be logged in".
pub async fn require_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<SessionUser, AppError> {
    resolve_session(state, headers)
        .await?
        .ok_or(AppError::Unauthorized)
}
