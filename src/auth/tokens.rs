//! Session token issuing and verification (HS256 JWT)

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub const DEFAULT_JWT_SECRET: &str = "replace_with_strong_secret";
pub const SESSION_TTL_HOURS: i64 = 24;

/// JWT claims carried by a session token
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SessionClaims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

pub fn issue_session_token(
    secret: &str,
    user_id: &str,
    role: &str,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + ttl).timestamp().max(0) as usize;
    let claims = SessionClaims {
        sub: user_id.to_string(),
        role: role.to_string(),
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verifies signature and expiry, returning the claims
pub fn decode_session_token(
    secret: &str,
    token: &str,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_decode() {
        let token =
            issue_session_token("test_secret", "user-123", "candidate", Duration::hours(1))
                .expect("Failed to encode token");

        let claims = decode_session_token("test_secret", &token).expect("Failed to decode token");
        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.role, "candidate");
    }

    #[test]
    fn test_decode_fails_with_wrong_secret() {
        let token =
            issue_session_token("test_secret", "user-123", "candidate", Duration::hours(1))
                .unwrap();

        assert!(decode_session_token("wrong_secret", &token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token =
            issue_session_token("test_secret", "user-123", "candidate", Duration::days(-1))
                .unwrap();

        assert!(decode_session_token("test_secret", &token).is_err());
    }
}
