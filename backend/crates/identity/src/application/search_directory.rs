//! Search Directory Use Case
//!
//! Case-insensitive substring search over user names, returning a redacted
//! projection. Unauthenticated by design.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::IdentityResult;

/// Redacted directory projection of a user. No credential material.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// Search directory use case
pub struct SearchDirectoryUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> SearchDirectoryUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Match `filter` against first OR last name; empty matches everyone.
    pub async fn execute(&self, filter: &str) -> IdentityResult<Vec<DirectoryEntry>> {
        let users = self.repo.search_by_name(filter).await?;

        Ok(users
            .into_iter()
            .map(|user| DirectoryEntry {
                id: user.user_id,
                username: user.username.into_db(),
                first_name: user.first_name,
                last_name: user.last_name,
            })
            .collect())
    }
}
