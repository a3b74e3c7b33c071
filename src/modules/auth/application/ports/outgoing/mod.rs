mod session_verifier;

pub use session_verifier::{SessionClaims, SessionError, SessionVerifier};
