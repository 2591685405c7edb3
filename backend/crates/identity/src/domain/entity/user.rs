//! User Entity
//!
//! Core identity record. The password hash lives on the entity but is
//! Debug-redacted and never serialized toward clients.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier, assigned once, immutable
    pub user_id: UserId,
    /// Username (a validated, lowercased email address; unique)
    pub username: Email,
    /// First name (free text)
    pub first_name: String,
    /// Last name (free text)
    pub last_name: String,
    /// Argon2id PHC hash of the password
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(
        username: Email,
        first_name: String,
        last_name: String,
        password_hash: UserPassword,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            username,
            first_name,
            last_name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn test_user() -> User {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        User::new(
            Email::new("alice@example.com").unwrap(),
            "Alice".to_string(),
            "Smith".to_string(),
            UserPassword::from_raw(&raw).unwrap(),
        )
    }

    #[test]
    fn test_new_user_has_fresh_id_and_timestamps() {
        let a = test_user();
        let b = test_user();
        assert_ne!(a.user_id, b.user_id);
        assert_eq!(a.created_at, a.updated_at);
    }

    #[test]
    fn test_debug_never_leaks_hash() {
        let user = test_user();
        let debug = format!("{:?}", user);
        assert!(!debug.contains("argon2id"));
    }
}
