//! Token Issuer
//!
//! Issues and verifies the bearer tokens that bind a request to a user
//! identity. Tokens are HS256-signed JWTs carrying the `userId` claim (the
//! claim name is part of the wire contract) plus `iat`/`exp`; verification
//! rejects bad signatures and expired tokens alike.

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::IdentityConfig;
use crate::domain::value_object::user_id::UserId;
use crate::error::{IdentityError, IdentityResult};

/// Token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject user ID (claim name kept for compatibility)
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Issued at (Unix epoch seconds)
    pub iat: i64,
    /// Expiration (Unix epoch seconds)
    pub exp: i64,
}

impl TokenClaims {
    fn new(user_id: &UserId, ttl: std::time::Duration) -> Self {
        let now = Utc::now().timestamp();

        Self {
            user_id: user_id.to_string(),
            iat: now,
            exp: now + ttl.as_secs() as i64,
        }
    }
}

/// Token issuer
///
/// Holds the signing keys derived from the startup configuration. Shared
/// read-only across requests.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: std::time::Duration,
}

impl TokenIssuer {
    /// Build an issuer from the application configuration
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret()),
            decoding_key: DecodingKey::from_secret(config.token_secret()),
            ttl: config.token_ttl(),
        }
    }

    /// Sign a token for a user
    pub fn issue(&self, user_id: &UserId) -> IdentityResult<String> {
        let claims = TokenClaims::new(user_id, self.ttl);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| IdentityError::Internal(format!("Failed to sign token: {e}")))
    }

    /// Verify a token and resolve it to a user ID.
    ///
    /// Signature, expiry, and claim-shape failures all collapse to
    /// `Unauthenticated`; callers learn nothing about which check failed.
    pub fn verify(&self, token: &str) -> IdentityResult<UserId> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| IdentityError::Unauthenticated)?;

        let uuid =
            Uuid::parse_str(&data.claims.user_id).map_err(|_| IdentityError::Unauthenticated)?;

        Ok(UserId::from_uuid(uuid))
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer_with_secret(secret: &str) -> TokenIssuer {
        TokenIssuer::new(&IdentityConfig::new(secret).unwrap())
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let issuer = issuer_with_secret("test-secret-key-12345");
        let user_id = UserId::new();

        let token = issuer.issue(&user_id).unwrap();
        assert!(!token.is_empty());

        let resolved = issuer.verify(&token).unwrap();
        assert_eq!(resolved, user_id);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let issuer = issuer_with_secret("test-secret-key-12345");
        assert!(matches!(
            issuer.verify("not-a-token"),
            Err(IdentityError::Unauthenticated)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer1 = issuer_with_secret("secret-1");
        let issuer2 = issuer_with_secret("secret-2");

        let token = issuer1.issue(&UserId::new()).unwrap();
        assert!(issuer2.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = issuer_with_secret("test-secret");
        let user_id = UserId::new();

        // Craft claims that expired two hours ago (well past leeway)
        let past = Utc::now().timestamp() - 2 * 3600;
        let claims = TokenClaims {
            user_id: user_id.to_string(),
            iat: past - 3600,
            exp: past,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(
            issuer.verify(&token),
            Err(IdentityError::Unauthenticated)
        ));
    }

    #[test]
    fn test_claim_name_is_user_id_camel_case() {
        let claims = TokenClaims::new(&UserId::new(), std::time::Duration::from_secs(60));
        let value = serde_json::to_value(&claims).unwrap();
        assert!(value.get("userId").is_some());
        assert!(value.get("user_id").is_none());
        assert!(value.get("exp").is_some());
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let issuer = issuer_with_secret("test-secret");
        let claims = TokenClaims {
            user_id: "not-a-uuid".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(
            issuer.verify(&token),
            Err(IdentityError::Unauthenticated)
        ));
    }
}
