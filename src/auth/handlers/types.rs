/**
 * Authentication Handler Types
 *
 * Request and response types for the authentication endpoints. Required
 * string fields default to empty when absent so that a missing field and
 * a blank form field surface the same validation message, the way the
 * original registration/login forms behave.
 */

use serde::{Deserialize, Serialize};

use crate::auth::resolver::SessionUser;

/// Default post-login destination when no redirect parameter was carried
pub const DEFAULT_REDIRECT: &str = "/dashboard";

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    /// Email address (must be unique)
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
    /// Must match `password`
    pub confirm_password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile update request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Password change request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct UpdatePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Query parameters carried by login/registration requests
///
/// The access gate preserves the originally requested path in
/// `?redirect=`; a successful login or registration hands it back to the
/// client as the post-login destination.
#[derive(Deserialize, Debug, Default)]
pub struct RedirectQuery {
    pub redirect: Option<String>,
}

impl RedirectQuery {
    /// Resolve the post-login destination
    ///
    /// Only same-site absolute paths are honored; anything else falls
    /// back to the default, so the parameter cannot be abused as an open
    /// redirect.
    pub fn target(&self) -> String {
        match self.redirect.as_deref() {
            Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
            _ => DEFAULT_REDIRECT.to_string(),
        }
    }
}

/// Response for successful login and registration
///
/// The session token itself travels in the HTTP-only cookie, not in the
/// body.
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    /// User information (without sensitive data)
    pub user: SessionUser,
    /// Where the client should navigate next
    pub redirect_to: String,
}
