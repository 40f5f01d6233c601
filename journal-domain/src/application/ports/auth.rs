use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Port for verifying a caller's own credentials against the identity
/// provider.
///
/// The probe exchanges the credentials for a token that is immediately
/// discarded; success implies valid credentials. Any failure, including a
/// transport failure, is reported as `AuthenticationFailed`.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify_password(&self, username: &str, password: &str) -> DomainResult<()>;
}
