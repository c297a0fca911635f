/**
 * Session Tokens
 *
 * Issues and verifies the signed, time-limited tokens that prove a
 * user's identity without server-side session storage. Tokens are
 * compact JWS strings (HMAC-SHA256) whose validity is fully determined
 * by their signature and expiry.
 *
 * The signing secret is injected at construction time, not read from a
 * module-level global: the server builds one `TokenService` from its
 * configuration at startup, and tests build their own with deterministic
 * keys.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime: 7 days
pub const TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Claims carried by a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// Parse the subject as a user id
    ///
    /// Returns `None` if the subject is not a UUID; a token with an
    /// unparsable subject is treated like any other invalid token.
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

/// Session token issuance and verification
///
/// Cheap to clone; both keys are derived once from the secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    /// Build a token service from a signing secret
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a token for a user
    ///
    /// The token carries the user id, the issue time, and an expiry of
    /// issue time + 7 days.
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return its claims
    ///
    /// Checks the signature and the expiry. Every failure mode - bad
    /// signature, expired, malformed, wrong algorithm - is normalized to
    /// `None`; callers treat all of them as "no session".
    pub fn verify(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, &self.decoding, &Validation::default()) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!("Token rejected: {:?}", e);
                None
            }
        }
    }
}
