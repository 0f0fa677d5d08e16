use serde::Serialize;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Coordinates password verification and token issuance.
///
/// One instance is shared by the login flow (verify + sign) and the
/// access-gate middleware (validate).
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    /// Presented password does not match the stored hash.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Jwt(#[from] JwtError),
}

impl Authenticator {
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
        }
    }

    /// Hash a password for storage during registration.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a presented password against the stored hash and, on match,
    /// sign the given claims into an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - password does not match
    /// * `Password` - stored hash is unparseable
    /// * `Jwt` - token signing failed
    pub fn verify_credentials<T: Serialize>(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &T,
    ) -> Result<String, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.jwt_handler.encode(claims)?)
    }

    /// Validate a presented token and return its claims.
    pub fn validate_token<T: for<'de> serde::Deserialize<'de>>(
        &self,
        token: &str,
    ) -> Result<T, JwtError> {
        self.jwt_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::Claims;

    fn authenticator() -> Authenticator {
        Authenticator::new(b"test_secret_key_at_least_32_bytes!")
    }

    #[test]
    fn test_verify_credentials_success() {
        let auth = authenticator();

        let hash = auth.hash_password("pw123").expect("Failed to hash");

        let claims = Claims::for_account(7, "ann@x.com", "staff", 2);
        let token = auth
            .verify_credentials("pw123", &hash, &claims)
            .expect("Authentication failed");

        let decoded: Claims = auth.validate_token(&token).expect("Validation failed");
        assert_eq!(decoded.sub, "7");
        assert_eq!(decoded.email, "ann@x.com");
        assert_eq!(decoded.role, "staff");
    }

    #[test]
    fn test_verify_credentials_wrong_password() {
        let auth = authenticator();

        let hash = auth.hash_password("pw123").expect("Failed to hash");
        let claims = Claims::for_account(7, "ann@x.com", "staff", 2);

        let result = auth.verify_credentials("wrong", &hash, &claims);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_credentials_corrupt_hash() {
        let auth = authenticator();
        let claims = Claims::for_account(7, "ann@x.com", "staff", 2);

        let result = auth.verify_credentials("pw123", "garbage", &claims);
        assert!(matches!(result, Err(AuthenticationError::Password(_))));
    }

    #[test]
    fn test_validate_garbage_token() {
        let result = authenticator().validate_token::<Claims>("invalid.token.here");
        assert!(result.is_err());
    }
}
