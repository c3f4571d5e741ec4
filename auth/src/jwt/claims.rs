use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an access token.
///
/// A fixed shape rather than an open map: decoding rejects tokens that are
/// missing a claim or carry the wrong type, as a typed error at the
/// verification boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject user id.
    pub user_id: i64,

    /// Subject username.
    pub username: String,

    /// Expiration instant (Unix timestamp, seconds).
    pub exp: i64,
}

impl Claims {
    /// Build the claim set for an authenticated user, expiring
    /// `expiration_hours` from now.
    pub fn for_user(user_id: i64, username: String, expiration_hours: i64) -> Self {
        let expiration = Utc::now() + Duration::hours(expiration_hours);

        Self {
            user_id,
            username,
            exp: expiration.timestamp(),
        }
    }

    /// Whether the claim set is expired at `current_timestamp`.
    ///
    /// A token is rejected strictly once the expiration instant is reached.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_user_sets_subject_and_expiration() {
        let before = Utc::now().timestamp();
        let claims = Claims::for_user(42, "alice".to_string(), 24);
        let after = Utc::now().timestamp();

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.username, "alice");
        assert!(claims.exp >= before + 24 * 60 * 60);
        assert!(claims.exp <= after + 24 * 60 * 60);
    }

    #[test]
    fn is_expired_at_and_after_expiration() {
        let claims = Claims {
            user_id: 1,
            username: "alice".to_string(),
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
