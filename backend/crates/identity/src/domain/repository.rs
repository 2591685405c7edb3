//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{account::Account, user::User};
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::UserPassword,
};
use crate::error::IdentityResult;

/// Change-set for a partial profile update.
///
/// Only fields actually supplied by the caller are present; absent fields
/// are left untouched by the store. The password arrives pre-hashed --
/// plaintext never reaches a repository.
#[derive(Debug, Default)]
pub struct ProfileChanges {
    pub password_hash: Option<UserPassword>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ProfileChanges {
    /// True if no field is being changed
    pub fn is_empty(&self) -> bool {
        self.password_hash.is_none() && self.first_name.is_none() && self.last_name.is_none()
    }
}

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> IdentityResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &Email) -> IdentityResult<Option<User>>;

    /// Check if username exists
    async fn exists_by_username(&self, username: &Email) -> IdentityResult<bool>;

    /// Apply a partial profile update to a user's own record
    async fn update_profile(
        &self,
        user_id: &UserId,
        changes: &ProfileChanges,
    ) -> IdentityResult<()>;

    /// Case-insensitive substring search over first/last name.
    ///
    /// An empty filter matches all users. Results are ordered by user ID.
    async fn search_by_name(&self, filter: &str) -> IdentityResult<Vec<User>>;
}

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Find the account owned by a user
    async fn find_by_user_id(&self, user_id: &UserId) -> IdentityResult<Option<Account>>;
}

/// Combined repository for the signup unit of work
#[trait_variant::make(ProvisioningRepository: Send)]
pub trait LocalProvisioningRepository: UserRepository + AccountRepository {
    /// Persist a new user and its ledger account atomically.
    ///
    /// Runs in a single transaction; a username unique-violation surfaces
    /// as [`IdentityError::UsernameTaken`](crate::error::IdentityError),
    /// so concurrent signups cannot both succeed and a user can never be
    /// observed without an account.
    async fn create_user_with_account(
        &self,
        user: &User,
        account: &Account,
    ) -> IdentityResult<()>;
}
