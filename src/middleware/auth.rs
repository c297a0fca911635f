/**
 * Access Gate
 *
 * Request-interception middleware evaluated before any protected page is
 * served. Requests to a fixed set of protected path prefixes must carry
 * a session cookie with a verifiable token; anything else is redirected
 * to the login entry point with the originally requested path preserved
 * in `?redirect=` for the post-login return trip.
 *
 * The gate is deliberately coarse and stateless: it checks token
 * integrity only and never touches the store, keeping it cheap enough to
 * run on every request. Handlers that need user data resolve the full
 * session themselves.
 *
 * # Decision table (one deterministic decision per request)
 *
 * | Path        | Cookie  | Token    | Result            |
 * |-------------|---------|----------|-------------------|
 * | unprotected | any     | any      | pass through      |
 * | protected   | absent  | -        | redirect to login |
 * | protected   | present | invalid  | redirect to login |
 * | protected   | present | valid    | pass through      |
 */

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::auth::cookie::session_token;
use crate::auth::sessions::TokenService;

/// Path prefixes requiring a valid session
pub const PROTECTED_PREFIXES: [&str; 3] = ["/dashboard", "/profile", "/submit"];

fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

fn redirect_to_login(path: &str) -> Response {
    Redirect::temporary(&format!("/login?redirect={}", path)).into_response()
}

/// Access gate middleware
///
/// Expired, tampered, and malformed tokens all take the same redirect as
/// an absent cookie; the client cannot tell which failure occurred.
pub async fn route_guard(
    State(tokens): State<TokenService>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();

    if !is_protected(path) {
        return next.run(request).await;
    }

    let Some(token) = session_token(request.headers()) else {
        tracing::debug!("No session cookie for protected path {}", path);
        return redirect_to_login(path);
    };

    if tokens.verify(&token).is_none() {
        tracing::debug!("Invalid session token for protected path {}", path);
        return redirect_to_login(path);
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::state::AppState;
    use axum::http::header::{COOKIE, LOCATION};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;
    use uuid::Uuid;

    const SECRET: &[u8] = b"test-secret";

    // The gate never touches the database; the lazy pool only satisfies
    // the state shape
    fn test_state() -> AppState {
        AppState {
            db: PgPoolOptions::new()
                .connect_lazy("postgres://postgres@localhost/eventhub_test")
                .unwrap(),
            tokens: TokenService::new(SECRET),
            cookie_secure: false,
        }
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/", get(|| async { "home" }))
            .route("/dashboard", get(|| async { "dashboard" }))
            .route("/profile", get(|| async { "profile" }))
            .route("/submit", get(|| async { "submit" }))
            .layer(axum::middleware::from_fn_with_state(state, route_guard))
    }

    fn request(path: &str, cookie: Option<&str>) -> axum::http::Request<axum::body::Body> {
        let mut builder = axum::http::Request::builder().uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder.body(axum::body::Body::empty()).unwrap()
    }

    fn expired_token() -> String {
        use crate::auth::sessions::{Claims, TOKEN_TTL_SECS};
        use std::time::{SystemTime, UNIX_EPOCH};

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            iat: now - TOKEN_TTL_SECS,
            exp: now - 3600,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_protected_path_without_cookie_redirects() {
        let response = app(test_state())
            .oneshot(request("/submit", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "/login?redirect=/submit"
        );
    }

    #[tokio::test]
    async fn test_protected_path_with_valid_token_passes() {
        let state = test_state();
        let token = state.tokens.issue(Uuid::new_v4()).unwrap();

        let response = app(state)
            .oneshot(request("/dashboard", Some(&format!("token={}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_protected_path_with_expired_token_redirects() {
        let cookie = format!("token={}", expired_token());

        let response = app(test_state())
            .oneshot(request("/profile", Some(&cookie)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "/login?redirect=/profile"
        );
    }

    #[tokio::test]
    async fn test_protected_path_with_tampered_token_redirects() {
        let state = test_state();
        let mut token = state.tokens.issue(Uuid::new_v4()).unwrap();
        let last = token.pop().unwrap();
        token.push(if last == 'A' { 'B' } else { 'A' });

        let response = app(state)
            .oneshot(request("/dashboard", Some(&format!("token={}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    }

    #[tokio::test]
    async fn test_unprotected_path_passes_without_cookie() {
        let response = app(test_state()).oneshot(request("/", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unprotected_path_ignores_invalid_token() {
        let response = app(test_state())
            .oneshot(request("/", Some("token=garbage")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_prefix_matching() {
        assert!(is_protected("/dashboard"));
        assert!(is_protected("/dashboard/settings"));
        assert!(is_protected("/profile"));
        assert!(is_protected("/submit"));
        assert!(!is_protected("/"));
        assert!(!is_protected("/login"));
        assert!(!is_protected("/events"));
    }
}
