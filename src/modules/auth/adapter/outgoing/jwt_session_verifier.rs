use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::auth::application::ports::outgoing::{SessionClaims, SessionError, SessionVerifier};

#[derive(Debug, Clone)]
pub struct JwtSessionConfig {
    pub secret_key: String,
    pub issuer: String,
}

impl JwtSessionConfig {
    pub fn from_env() -> Self {
        Self {
            secret_key: std::env::var("SESSION_JWT_SECRET")
                .expect("SESSION_JWT_SECRET is not set in .env file"),
            issuer: std::env::var("SESSION_JWT_ISSUER")
                .unwrap_or_else(|_| "portfolio-admin".to_string()),
        }
    }
}

/// Wire claims of the session tokens the external auth provider issues.
#[derive(Debug, Deserialize)]
struct WireClaims {
    sub: String,
    #[allow(dead_code)]
    exp: usize,
}

/// Verifies HS256 session tokens against the shared provider secret.
///
/// No tokens are issued here; minting sessions is the provider's job.
#[derive(Clone)]
pub struct JwtSessionVerifier {
    config: JwtSessionConfig,
}

impl JwtSessionVerifier {
    pub fn new(config: JwtSessionConfig) -> Self {
        Self { config }
    }
}

impl SessionVerifier for JwtSessionVerifier {
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);

        let data = decode::<WireClaims>(
            token,
            &DecodingKey::from_secret(self.config.secret_key.as_bytes()),
            &validation,
        )
        .map_err(|_| SessionError::InvalidToken)?;

        Ok(SessionClaims {
            subject: data.claims.sub,
        })
    }
}
