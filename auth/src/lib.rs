//! Authentication utilities library
//!
//! Reusable authentication infrastructure for the blog platform:
//! - Password hashing (Argon2id)
//! - Signed access tokens (HS256 compact JWT with a fixed claim set)
//! - Authentication coordination (credential check + token issuance)
//!
//! The claim set is a fixed, explicitly-typed structure: a presented token
//! missing or mistyping a claim fails decoding as a typed error instead of
//! surfacing later as a map lookup.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Complete authentication flow
//! ```
//! use auth::{Authenticator, Claims, PasswordHasher};
//!
//! let authenticator = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Registration stored this hash.
//! let hash = PasswordHasher::new().hash("password123").unwrap();
//!
//! // Login: verify the password and mint a token valid for 24 hours.
//! let claims = Claims::for_user(7, "alice".to_string(), 24);
//! let result = authenticator.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Later requests present the token.
//! let decoded = authenticator.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.user_id, 7);
//! assert_eq!(decoded.username, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
