//! Update Profile Use Case
//!
//! Applies a partial update to the authenticated user's own record. The
//! caller identity comes from the verified bearer token, never from the
//! request body.

use std::sync::Arc;

use crate::domain::repository::{ProfileChanges, UserRepository};
use crate::domain::value_object::{
    user_id::UserId, user_password::{RawPassword, UserPassword},
};
use crate::error::IdentityResult;

/// Update profile input (already validated at the boundary)
#[derive(Debug)]
pub struct UpdateProfileInput {
    pub password: Option<RawPassword>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Build the change-set and apply it.
    ///
    /// Only supplied fields are touched; a supplied password is hashed
    /// before it enters the change-set. Success is reported once the store
    /// returns without error, with no read-after-write.
    pub async fn execute(
        &self,
        user_id: &UserId,
        input: UpdateProfileInput,
    ) -> IdentityResult<()> {
        let password_hash = match &input.password {
            Some(raw) => Some(UserPassword::from_raw(raw)?),
            None => None,
        };

        let changes = ProfileChanges {
            password_hash,
            first_name: input.first_name,
            last_name: input.last_name,
        };

        self.repo.update_profile(user_id, &changes).await?;

        tracing::info!(user_id = %user_id, "Profile updated");

        Ok(())
    }
}
