/**
 * API Route Handlers
 *
 * The API route table.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `POST /api/auth/logout` - Clear the session cookie
 * - `GET /api/auth/me` - Current user (requires session)
 *
 * ## Profile
 * - `PUT /api/profile` - Update name/email (requires session)
 * - `PUT /api/profile/password` - Change password (requires session)
 *
 * ## Events
 * - `POST /api/events` - Submit an event (requires session)
 * - `GET /api/events` - All events, date ascending
 * - `GET /api/events/mine` - Caller's events (requires session)
 * - `GET /api/events/{id}` - Event detail with organizer
 *
 * Session requirements are enforced inside the handlers via the session
 * resolver, not by the access gate: the gate protects the page prefixes
 * (`/dashboard`, `/profile`, `/submit`), while API paths carry their own
 * authorization checks.
 */

use axum::Router;

use crate::auth::handlers::{get_me, login, logout, register, update_password, update_profile};
use crate::events::handlers::{get_event, get_events, get_my_events, submit_event};
use crate::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/register", axum::routing::post(register))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/logout", axum::routing::post(logout))
        .route("/api/auth/me", axum::routing::get(get_me))
        // Profile endpoints
        .route("/api/profile", axum::routing::put(update_profile))
        .route("/api/profile/password", axum::routing::put(update_password))
        // Event endpoints; "mine" is registered before "{id}" so the
        // literal segment wins
        .route(
            "/api/events",
            axum::routing::post(submit_event).get(get_events),
        )
        .route("/api/events/mine", axum::routing::get(get_my_events))
        .route("/api/events/{id}", axum::routing::get(get_event))
}
