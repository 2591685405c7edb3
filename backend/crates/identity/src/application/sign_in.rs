//! Sign In Use Case
//!
//! Verifies credentials and issues a bearer token.

use std::sync::Arc;

use crate::application::token::TokenIssuer;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{IdentityError, IdentityResult};

/// Sign in input (already validated at the boundary)
#[derive(Debug)]
pub struct SignInInput {
    pub username: Email,
    pub password: RawPassword,
}

/// Sign in output
pub struct SignInOutput {
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenIssuer>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenIssuer>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: SignInInput) -> IdentityResult<SignInOutput> {
        // Unknown username and wrong password produce the same error so the
        // response never reveals which part was wrong.
        let user = self
            .repo
            .find_by_username(&input.username)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        if !user.password_hash.verify(&input.password) {
            return Err(IdentityError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput { token })
    }
}
