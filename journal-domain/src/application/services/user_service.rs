use crate::{
    application::ports::{CredentialVerifier, IdentityRepository},
    domain::{
        entities::{RegisterUserRequest, UserAccount, UserSummary},
        errors::{DomainError, DomainResult},
    },
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Use cases on generic accounts: signup, login, and username lookup.
pub struct UserService {
    repository: Arc<dyn IdentityRepository>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn IdentityRepository>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            repository,
            verifier,
        }
    }

    /// Register a user without role-specific fields and assign the realm
    /// role named by the request.
    ///
    /// When the provider rejects the creation (duplicate username), no role
    /// assignment is attempted. The returned summary comes from a
    /// lookup-by-username that is not atomic with the creation.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register_user(&self, request: &RegisterUserRequest) -> DomainResult<UserSummary> {
        request.validate()?;

        let account = request.to_account();
        let user_id = self
            .repository
            .create_user(&account, &request.credential())
            .await?;

        self.repository
            .assign_realm_role(user_id.as_str(), &request.role)
            .await?;

        info!("Registered user '{}' with id '{}'", request.username, user_id);
        self.find_user_by_username(&request.username).await
    }

    /// Look up an account by exact username. Absence is a typed not-found
    /// error.
    #[instrument(skip(self))]
    pub async fn find_user_by_username(&self, username: &str) -> DomainResult<UserSummary> {
        let account = self
            .repository
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound {
                identifier: username.to_string(),
            })?;

        self.summarize(&account).await
    }

    /// Verify the caller's credentials with a password-grant probe, then
    /// fetch profile and role data through the admin port.
    ///
    /// The probe's token is discarded; any probe failure is an
    /// authentication failure regardless of whether the record exists.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<UserSummary> {
        self.verifier.verify_password(username, password).await?;

        info!("Credentials verified for '{}'", username);
        self.find_user_by_username(username).await
    }

    async fn summarize(&self, account: &UserAccount) -> DomainResult<UserSummary> {
        let roles = self
            .repository
            .get_user_realm_roles(account.require_id()?)
            .await?;
        UserSummary::from_account(account, &roles)
    }
}
