use crate::domain::{entities::*, errors::DomainResult};
use async_trait::async_trait;

/// Port over the identity provider's admin API for a single realm.
///
/// Implementations perform one remote call per method; there is no caching
/// and no optimistic concurrency. `update_user` is a full-record write-back,
/// so concurrent read-modify-write sequences against the same record can
/// lose updates.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Fetch the full record, including attributes, by provider id.
    async fn find_user_by_id(&self, user_id: &str) -> DomainResult<UserAccount>;

    /// Exact-match username search. Absence is `Ok(None)`, not an error.
    async fn find_user_by_username(&self, username: &str) -> DomainResult<Option<UserAccount>>;

    /// Search records whose attribute `key` holds `value`.
    async fn search_users_by_attribute(&self, key: &str, value: &str)
        -> DomainResult<Vec<UserAccount>>;

    /// Create a record together with its initial credential and return the
    /// provider-assigned id. A duplicate username is `AlreadyExists`.
    async fn create_user(
        &self,
        account: &UserAccount,
        credential: &Credential,
    ) -> DomainResult<EntityId>;

    /// Replace the stored record with `account` (matched by id).
    async fn update_user(&self, account: &UserAccount) -> DomainResult<()>;

    /// Realm-level role names assigned to the user.
    async fn get_user_realm_roles(&self, user_id: &str) -> DomainResult<Vec<String>>;

    /// Assign an existing realm role to the user.
    async fn assign_realm_role(&self, user_id: &str, role_name: &str) -> DomainResult<()>;
}
