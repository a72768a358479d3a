use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::user::application::domain::entities::UserId;
use crate::user::application::ports::outgoing::token_provider::{
    IssuedToken, TokenClaims, TokenError, TokenProvider,
};

/// Seconds of clock skew tolerated on `exp` and `nbf`.
const LEEWAY_SECS: u64 = 30;

#[derive(Clone)]
pub struct JwtTokenService {
    ttl_secs: i64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("ttl_secs", &self.ttl_secs)
            .field("keys", &"<redacted>")
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(secret_key: &str, ttl_secs: i64) -> Self {
        Self {
            ttl_secs,
            encoding_key: EncodingKey::from_secret(secret_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret_key.as_bytes()),
        }
    }

    fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_token(&self, user_id: UserId) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id.value(),
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
        };

        Ok(IssuedToken {
            access_token: self.sign(&claims)?,
            expires_in: self.ttl_secs,
        })
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = LEEWAY_SECS;
        validation.validate_nbf = true;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Invalid token signature presented");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Token signed with unexpected algorithm");
                        TokenError::MalformedToken
                    }
                    kind => {
                        tracing::warn!(?kind, "Token verification failed: malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-with-at-least-32-bytes!!";

    fn service() -> JwtTokenService {
        JwtTokenService::new(SECRET, 3600)
    }

    #[test]
    fn issued_token_verifies_to_same_subject() {
        let service = service();
        let issued = service.issue_token(UserId::from(42)).unwrap();

        assert_eq!(issued.expires_in, 3600);

        let claims = service.verify_token(&issued.access_token).unwrap();
        assert_eq!(claims.user_id(), UserId::from(42));
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn garbage_token_is_malformed() {
        let result = service().verify_token("invalid.jwt.token");
        assert_eq!(result.unwrap_err(), TokenError::MalformedToken);
    }

    #[test]
    fn token_from_other_secret_has_invalid_signature() {
        let other = JwtTokenService::new("another-secret-key-that-is-also-32-bytes", 3600);
        let issued = other.issue_token(UserId::from(1)).unwrap();

        let result = service().verify_token(&issued.access_token);
        assert_eq!(result.unwrap_err(), TokenError::InvalidSignature);
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let service = service();
        let token = service
            .sign(&TokenClaims {
                sub: 1,
                exp: now - 3600,
                iat: now - 7200,
                nbf: now - 7200,
            })
            .unwrap();

        assert_eq!(
            service.verify_token(&token).unwrap_err(),
            TokenError::TokenExpired
        );
    }

    #[test]
    fn future_token_is_not_yet_valid() {
        let now = Utc::now().timestamp();
        let service = service();
        let token = service
            .sign(&TokenClaims {
                sub: 1,
                exp: now + 7200,
                iat: now,
                nbf: now + 3600,
            })
            .unwrap();

        assert_eq!(
            service.verify_token(&token).unwrap_err(),
            TokenError::TokenNotYetValid
        );
    }

    #[test]
    fn debug_output_hides_keys() {
        let debug = format!("{:?}", service());
        assert!(!debug.contains(SECRET));
    }
}
