//
// ──────────────────────────────────────────────────────────
// Outgoing Port (Auth Provider)
// ──────────────────────────────────────────────────────────
//
// The admin dashboard authenticates against an external identity
// provider; the only contract this backend consumes is "does the
// presented session token belong to a currently authenticated user".

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub subject: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid or expired session token")]
    InvalidToken,
}

pub trait SessionVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionError>;
}
