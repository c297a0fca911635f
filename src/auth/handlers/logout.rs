/**
 * Logout Handler
 *
 * Implements POST /api/auth/logout. Session tokens are stateless, so
 * logout is client-side deletion: the response clears the cookie and the
 * outstanding token simply ages out at its 7-day expiry.
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};

use crate::auth::cookie::clear_session_cookie;
use crate::server::state::AppState;

/// Logout handler
///
/// Always succeeds; logging out without a session is a no-op.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = clear_session_cookie(state.cookie_secure);

    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(serde_json::json!({ "success": true, "redirect_to": "/" })),
    )
}
