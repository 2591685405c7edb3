//! Sign Up Use Case
//!
//! Creates a new user identity and, in the same transaction, its ledger
//! account, then issues a bearer token for the fresh identity.

use std::sync::Arc;

use crate::application::token::TokenIssuer;
use crate::domain::entity::{account::Account, user::User};
use crate::domain::repository::ProvisioningRepository;
use crate::domain::value_object::{
    email::Email, user_password::{RawPassword, UserPassword},
};
use crate::error::{IdentityError, IdentityResult};

/// Sign up input (already validated at the boundary)
#[derive(Debug)]
pub struct SignUpInput {
    pub username: Email,
    pub first_name: String,
    pub last_name: String,
    pub password: RawPassword,
}

/// Sign up output
pub struct SignUpOutput {
    pub token: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: ProvisioningRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenIssuer>,
}

impl<R> SignUpUseCase<R>
where
    R: ProvisioningRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenIssuer>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: SignUpInput) -> IdentityResult<SignUpOutput> {
        // Friendly conflict on the common path. Under concurrent signups
        // both requests can pass this check; the store's unique index is
        // what actually guarantees uniqueness.
        if self.repo.exists_by_username(&input.username).await? {
            return Err(IdentityError::UsernameTaken);
        }

        // Hash the password
        let password_hash = UserPassword::from_raw(&input.password)?;

        // Create user and open the linked account
        let user = User::new(
            input.username,
            input.first_name,
            input.last_name,
            password_hash,
        );
        let account = Account::open(user.user_id);

        // Persist both in one transaction
        self.repo.create_user_with_account(&user, &account).await?;

        tracing::info!(
            user_id = %user.user_id,
            account_id = %account.account_id,
            "User signed up"
        );

        // Token issuance happens last; a signing failure after the commit
        // is a server error, the created identity stands.
        let token = self.tokens.issue(&user.user_id)?;

        Ok(SignUpOutput { token })
    }
}
