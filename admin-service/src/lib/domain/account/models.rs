use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::account::errors::EmailError;
use crate::account::errors::RoleError;

/// Closed role enumeration gating what a principal may do.
///
/// Parsed exactly once at the HTTP boundary; everything downstream takes
/// the enum, so no handler ever compares raw role strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "staff" => Ok(Role::Staff),
            "user" => Ok(Role::User),
            other => Err(RoleError::Invalid(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub i64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// The login identity. Validated for RFC 5322 format at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Account aggregate entity.
///
/// One row of the users table. The password hash is the only credential
/// material ever held; plaintext passwords exist only transiently inside
/// commands.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new account row.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub job_title: Option<String>,
}

/// Command to register a new account with validated fields.
#[derive(Debug)]
pub struct RegisterCommand {
    pub name: String,
    pub email: EmailAddress,
    pub password: String,
    pub role: Role,
}

/// Command to log in against a role-scoped account lookup.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful login: the signed bearer token.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub account_id: AccountId,
}

/// Command to create a staff member (admin surface).
///
/// No password field: a random default password is generated and hashed
/// by the service.
#[derive(Debug)]
pub struct CreateStaffCommand {
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub job_title: String,
}

/// Full staff-record update (admin surface).
#[derive(Debug)]
pub struct UpdateStaffCommand {
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub job_title: String,
}

/// Self-service contact update (staff profile surface).
#[derive(Debug)]
pub struct UpdateContactCommand {
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_closed_set_only() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("staff".parse::<Role>().unwrap(), Role::Staff);
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);

        assert!(matches!(
            "superuser".parse::<Role>(),
            Err(RoleError::Invalid(_))
        ));
        // Case-sensitive on purpose: the closed set is lowercase
        assert!("Admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display_round_trip() {
        for role in [Role::Admin, Role::Staff, Role::User] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_email_address_validation() {
        assert!(EmailAddress::new("ann@x.com".to_string()).is_ok());
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert!(EmailAddress::new("".to_string()).is_err());
    }
}
