/**
 * Credential Hashing
 *
 * One-way password hashing and verification on top of bcrypt. The salt
 * is randomized per call and embedded in the digest, so hashing the same
 * password twice yields different digests that both verify.
 *
 * Verification fails closed: a malformed stored digest verifies as
 * `false` rather than surfacing an error to the caller.
 */

use bcrypt::BcryptError;

/// Fixed bcrypt work factor
const HASH_COST: u32 = 10;

/// Hash a plaintext password
///
/// # Errors
///
/// Only fails if bcrypt itself fails (out of memory, invalid cost);
/// callers treat this as an internal error.
pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plain, HASH_COST)
}

/// Verify a plaintext password against a stored digest
///
/// Recomputes the hash using the salt embedded in `digest` and compares
/// in constant time (inside bcrypt). Malformed digests return `false`;
/// the caller cannot tell a wrong password from a corrupt digest.
pub fn verify_password(plain: &str, digest: &str) -> bool {
    bcrypt::verify(plain, digest).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let digest = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &digest));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let digest = hash_password("abc123").unwrap();
        assert!(!verify_password("abc124", &digest));
    }

    #[test]
    fn test_salt_is_randomized() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("same-password", &first));
        assert!(verify_password("same-password", &second));
    }

    #[test]
    fn test_malformed_digest_fails_closed() {
        assert!(!verify_password("anything", "not-a-bcrypt-digest"));
        assert!(!verify_password("anything", ""));
    }
}
