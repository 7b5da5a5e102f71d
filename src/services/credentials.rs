//! Password hashing and access token handling

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::TokenClaims,
};

#[derive(Clone)]
pub struct CredentialService {
    config: AuthConfig,
}

impl CredentialService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Hash a password using Argon2 with a fresh random salt
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Check a password against a stored hash. A malformed hash never matches.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is malformed: {}", e);
                false
            }
        }
    }

    /// Issue a token for `subject_id` that expires after `ttl`
    pub fn issue_token(&self, subject_id: i32, ttl: Duration) -> AppResult<String> {
        let claims = TokenClaims {
            sub: subject_id.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
        };

        claims
            .create_token(&self.config.jwt_secret, self.config.jwt_algorithm)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Issue a token with the configured lifetime
    pub fn issue_access_token(&self, subject_id: i32) -> AppResult<String> {
        self.issue_token(
            subject_id,
            Duration::minutes(self.config.access_token_expire_minutes),
        )
    }

    /// Verify a token and return its subject id
    pub fn validate_token(&self, token: &str) -> AppResult<i32> {
        let claims =
            TokenClaims::from_token(token, &self.config.jwt_secret, self.config.jwt_algorithm)
                .map_err(|e| {
                    tracing::debug!("Rejected token: {}", e);
                    AppError::Authentication("Could not validate credentials".to_string())
                })?;

        if Utc::now().timestamp() >= claims.exp {
            return Err(AppError::Authentication("Token has expired".to_string()));
        }

        claims
            .sub
            .parse()
            .map_err(|_| AppError::Authentication("Could not validate credentials".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;

    fn service() -> CredentialService {
        CredentialService::new(AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_algorithm: Algorithm::HS256,
            access_token_expire_minutes: 60,
        })
    }

    #[test]
    fn token_round_trip_returns_subject() {
        let credentials = service();
        let token = credentials.issue_access_token(42).unwrap();
        assert_eq!(credentials.validate_token(&token).unwrap(), 42);
    }

    #[test]
    fn expired_token_is_unauthorized() {
        let credentials = service();
        let token = credentials.issue_token(42, Duration::zero()).unwrap();
        assert!(matches!(
            credentials.validate_token(&token),
            Err(AppError::Authentication(_))
        ));

        let token = credentials.issue_token(42, Duration::minutes(-5)).unwrap();
        assert!(matches!(
            credentials.validate_token(&token),
            Err(AppError::Authentication(_))
        ));
    }

    #[test]
    fn token_signed_with_other_key_is_rejected() {
        let other = CredentialService::new(AuthConfig {
            jwt_secret: "another-secret".to_string(),
            ..AuthConfig::default()
        });
        let token = other.issue_access_token(1).unwrap();
        assert!(matches!(
            service().validate_token(&token),
            Err(AppError::Authentication(_))
        ));
    }

    #[test]
    fn garbage_and_non_numeric_subjects_are_rejected() {
        let credentials = service();
        assert!(credentials.validate_token("not.a.token").is_err());

        let claims = TokenClaims {
            sub: "admin@example.com".to_string(),
            exp: (Utc::now() + Duration::minutes(5)).timestamp(),
        };
        let token = claims.create_token("test-secret", Algorithm::HS256).unwrap();
        assert!(matches!(
            credentials.validate_token(&token),
            Err(AppError::Authentication(_))
        ));
    }

    #[test]
    fn hashing_is_salted_and_verifiable() {
        let credentials = service();
        let first = credentials.hash_password("$TeamAsti2023").unwrap();
        let second = credentials.hash_password("$TeamAsti2023").unwrap();
        assert_ne!(first, second);
        assert!(credentials.verify_password("$TeamAsti2023", &first));
        assert!(credentials.verify_password("$TeamAsti2023", &second));
        assert!(!credentials.verify_password("wrong", &first));
    }

    #[test]
    fn malformed_hash_does_not_match() {
        assert!(!service().verify_password("pw", "not-a-hash"));
    }
}
