//! Authentication infrastructure for the admin backend.
//!
//! Provides the credential and token primitives the service builds on:
//! - Password hashing and verification (Argon2id)
//! - Signed, expiring access tokens (JWT, HS256)
//! - An `Authenticator` coordinating the two for login flows
//!
//! The service crate defines its own domain types (roles, accounts) and
//! adapts these primitives; this crate knows nothing about HTTP or storage.
//!
//! # Examples
//!
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash the password for storage
//! let hash = auth.hash_password("pw123").unwrap();
//!
//! // Login: verify the password and sign a token
//! let claims = Claims::for_account(7, "ann@x.com", "staff", 2);
//! let token = auth.verify_credentials("pw123", &hash, &claims).unwrap();
//!
//! // Gate: validate the presented token
//! let decoded: Claims = auth.validate_token(&token).unwrap();
//! assert_eq!(decoded.role, "staff");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
