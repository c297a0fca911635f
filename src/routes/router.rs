/**
 * Router Configuration
 *
 * Combines the API routes, the access gate, request tracing, and the
 * fallback handler into the application router.
 *
 * The access gate is applied as a layer around the whole router, so it
 * runs before routing resolves: requests to the protected page prefixes
 * are gated whether or not a route is mounted there (page serving itself
 * is outside this backend).
 */

use axum::http::StatusCode;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::auth::route_guard;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the application router
pub fn create_router(app_state: AppState) -> Router {
    let router = configure_api_routes(Router::new());

    router
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            route_guard,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
