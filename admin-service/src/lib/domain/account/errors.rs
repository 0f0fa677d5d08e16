use thiserror::Error;

/// Error for role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Valid role is required (admin, staff, user), got: {0}")]
    Invalid(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all account operations.
///
/// Login failures are split internally: `InvalidCredentials` covers an
/// unknown (email, role) pair, `IncorrectPassword` a known account with a
/// bad password. Both carry the same client-visible message text; only the
/// HTTP status differs (400 vs 401, matching the original contract), and
/// internal logs record which case occurred.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid role: {0}")]
    InvalidRole(#[from] RoleError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Domain-level errors
    #[error("Email already exists")]
    DuplicateEmail(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid email or password")]
    IncorrectPassword,

    #[error("Staff member not found")]
    StaffNotFound(i64),

    // Infrastructure errors
    #[error("Credential infrastructure error: {0}")]
    Credential(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for AccountError {
    fn from(err: anyhow::Error) -> Self {
        AccountError::Database(err.to_string())
    }
}
