pub mod jwt_session_verifier;
