use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access-token claim set.
///
/// A signed, time-bounded assertion of who is calling and with which role.
/// There is no server-side session record behind it; validity is proven
/// entirely by signature and `exp`, so a token cannot be revoked before it
/// expires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the account's numeric id, rendered as a string per RFC 7519.
    pub sub: String,

    /// Email the account logged in with.
    pub email: String,

    /// Role the account logged in as. Kept as a plain string here; the
    /// service parses it back into its closed role enum at the trust
    /// boundary and rejects anything unknown.
    pub role: String,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Build claims for a freshly authenticated account.
    ///
    /// `exp` is `iat` plus `ttl_hours`.
    pub fn for_account(
        id: impl ToString,
        email: impl Into<String>,
        role: impl Into<String>,
        ttl_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(ttl_hours);

        Self {
            sub: id.to_string(),
            email: email.into(),
            role: role.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Parse the subject back into an account id.
    pub fn account_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }

    /// Check expiry against a given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_account_sets_expiry_horizon() {
        let claims = Claims::for_account(42, "ann@x.com", "staff", 2);

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "ann@x.com");
        assert_eq!(claims.role, "staff");
        assert_eq!(claims.exp - claims.iat, 2 * 60 * 60);
    }

    #[test]
    fn test_account_id_round_trip() {
        let claims = Claims::for_account(7, "a@b.c", "admin", 1);
        assert_eq!(claims.account_id(), Some(7));
    }

    #[test]
    fn test_account_id_rejects_garbage_subject() {
        let mut claims = Claims::for_account(7, "a@b.c", "admin", 1);
        claims.sub = "not-a-number".to_string();
        assert_eq!(claims.account_id(), None);
    }

    #[test]
    fn test_is_expired() {
        let mut claims = Claims::for_account(1, "a@b.c", "user", 2);
        claims.exp = 1000;

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
