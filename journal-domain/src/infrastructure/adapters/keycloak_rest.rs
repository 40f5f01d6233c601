use async_trait::async_trait;
use keycloak::types::{CredentialRepresentation, UserRepresentation};
use keycloak::{KeycloakAdmin, KeycloakError, KeycloakTokenSupplier};
use std::sync::Arc;

use crate::application::ports::repository::IdentityRepository;
use crate::domain::{entities::*, errors::*};

/// Keycloak admin REST adapter implementing the IdentityRepository port for
/// a single realm.
pub struct KeycloakRestAdapter<TS: KeycloakTokenSupplier> {
    admin: Arc<KeycloakAdmin<TS>>,
    realm: String,
}

impl<TS: KeycloakTokenSupplier + Send + Sync> KeycloakRestAdapter<TS> {
    pub fn new(admin: KeycloakAdmin<TS>, realm: impl Into<String>) -> Self {
        Self {
            admin: Arc::new(admin),
            realm: realm.into(),
        }
    }

    /// Fetch the full representation for a brief search hit. Attribute maps
    /// are only reliably present on the by-id endpoint.
    async fn fetch_full_account(&self, brief: UserRepresentation) -> DomainResult<UserAccount> {
        let Some(id) = brief.id.as_ref().map(|id| id.to_string()) else {
            return account_from_representation(brief);
        };

        let full = self
            .admin
            .realm_users_with_user_id_get(&self.realm, &id, None)
            .await
            .map_err(|e| DomainError::upstream(format!("Failed to fetch user '{id}': {e}")))?;

        account_from_representation(full)
    }
}

#[async_trait]
impl<TS: KeycloakTokenSupplier + Send + Sync> IdentityRepository for KeycloakRestAdapter<TS> {
    async fn find_user_by_id(&self, user_id: &str) -> DomainResult<UserAccount> {
        let keycloak_user = self
            .admin
            .realm_users_with_user_id_get(&self.realm, user_id, None)
            .await
            .map_err(|e| match e {
                KeycloakError::HttpFailure { status: 404, .. } => DomainError::UserNotFound {
                    identifier: user_id.to_string(),
                },
                other => DomainError::upstream(format!("Failed to find user by id: {other}")),
            })?;

        account_from_representation(keycloak_user)
    }

    async fn find_user_by_username(&self, username: &str) -> DomainResult<Option<UserAccount>> {
        let users = self
            .admin
            .realm_users_get(
                &self.realm,
                None,                        // brief_representation
                None,                        // created_after
                None,                        // created_before
                None,                        // email
                None,                        // email_verified
                None,                        // enabled
                Some(true),                  // exact
                None,                        // first
                None,                        // first_name
                None,                        // idp_alias
                None,                        // idp_user_id
                None,                        // last_name
                None,                        // max
                None,                        // q
                None,                        // search
                Some(username.to_string()),  // username
            )
            .await
            .map_err(|e| {
                DomainError::upstream(format!("Failed to find user by username: {e}"))
            })?;

        match users.into_iter().next() {
            Some(brief) => Ok(Some(self.fetch_full_account(brief).await?)),
            None => Ok(None),
        }
    }

    async fn search_users_by_attribute(
        &self,
        key: &str,
        value: &str,
    ) -> DomainResult<Vec<UserAccount>> {
        let users = self
            .admin
            .realm_users_get(
                &self.realm,
                None,                              // brief_representation
                None,                              // created_after
                None,                              // created_before
                None,                              // email
                None,                              // email_verified
                None,                              // enabled
                None,                              // exact
                None,                              // first
                None,                              // first_name
                None,                              // idp_alias
                None,                              // idp_user_id
                None,                              // last_name
                None,                              // max
                Some(format!("{key}:{value}")),    // q
                None,                              // search
                None,                              // username
            )
            .await
            .map_err(|e| {
                DomainError::upstream(format!("Failed to search users by attribute: {e}"))
            })?;

        let mut accounts = Vec::new();
        for brief in users {
            accounts.push(self.fetch_full_account(brief).await?);
        }
        Ok(accounts)
    }

    async fn create_user(
        &self,
        account: &UserAccount,
        credential: &Credential,
    ) -> DomainResult<EntityId> {
        let mut keycloak_user = account_to_representation(account);
        keycloak_user.credentials = Some(vec![credential_to_representation(credential)].into());

        self.admin
            .realm_users_post(&self.realm, keycloak_user)
            .await
            .map_err(|e| match e {
                KeycloakError::HttpFailure { status: 409, .. } => DomainError::AlreadyExists {
                    username: account.username.clone(),
                },
                other => DomainError::upstream(format!("Failed to create user: {other}")),
            })?;

        // Recover the provider-assigned id through a username lookup. This
        // is not atomic with the creation; a concurrent rename or delete
        // yields an inconsistent read.
        self.find_user_by_username(&account.username)
            .await?
            .ok_or_else(|| {
                DomainError::upstream("User created but could not be read back")
            })?
            .id
            .ok_or_else(|| DomainError::upstream("Created user record has no id"))
    }

    async fn update_user(&self, account: &UserAccount) -> DomainResult<()> {
        let user_id = account.require_id()?;
        let keycloak_user = account_to_representation(account);

        self.admin
            .realm_users_with_user_id_put(&self.realm, user_id, keycloak_user)
            .await
            .map_err(|e| DomainError::upstream(format!("Failed to update user: {e}")))?;

        Ok(())
    }

    async fn get_user_realm_roles(&self, user_id: &str) -> DomainResult<Vec<String>> {
        let roles = self
            .admin
            .realm_users_with_user_id_role_mappings_realm_get(&self.realm, user_id)
            .await
            .map_err(|e| {
                DomainError::upstream(format!("Failed to get user realm roles: {e}"))
            })?;

        Ok(roles
            .into_iter()
            .filter_map(|role| role.name.map(|name| name.to_string()))
            .collect())
    }

    async fn assign_realm_role(&self, user_id: &str, role_name: &str) -> DomainResult<()> {
        let role = self
            .admin
            .realm_roles_with_role_name_get(&self.realm, role_name)
            .await
            .map_err(|e| match e {
                KeycloakError::HttpFailure { status: 404, .. } => DomainError::RoleNotFound {
                    role: role_name.to_string(),
                },
                other => DomainError::upstream(format!("Failed to fetch realm role: {other}")),
            })?;

        self.admin
            .realm_users_with_user_id_role_mappings_realm_post(&self.realm, user_id, vec![role])
            .await
            .map_err(|e| DomainError::upstream(format!("Failed to assign realm role: {e}")))?;

        Ok(())
    }
}

// Conversions between domain entities and Keycloak representations.

fn account_from_representation(keycloak_user: UserRepresentation) -> DomainResult<UserAccount> {
    let username = keycloak_user
        .username
        .ok_or_else(|| DomainError::Validation {
            field: "username".to_string(),
            message: "User representation has no username".to_string(),
        })?
        .to_string();

    let mut account = UserAccount::new(username);
    account.id = keycloak_user
        .id
        .map(|id| EntityId::from_string(id.to_string()));
    account.email = keycloak_user.email.map(|e| e.to_string());
    account.first_name = keycloak_user.first_name.map(|f| f.to_string());
    account.last_name = keycloak_user.last_name.map(|l| l.to_string());
    account.enabled = keycloak_user.enabled.unwrap_or(true);

    if let Some(attrs) = keycloak_user.attributes {
        for (key, values) in attrs.iter() {
            account.attributes.set_attribute(
                key.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            );
        }
    }

    Ok(account)
}

fn account_to_representation(account: &UserAccount) -> UserRepresentation {
    let mut keycloak_user = UserRepresentation::default();

    keycloak_user.id = account.id.as_ref().map(|id| id.to_string().into());
    keycloak_user.username = Some(account.username.clone().into());
    keycloak_user.email = account.email.as_ref().map(|e| e.clone().into());
    keycloak_user.first_name = account.first_name.as_ref().map(|f| f.clone().into());
    keycloak_user.last_name = account.last_name.as_ref().map(|l| l.clone().into());
    keycloak_user.enabled = Some(account.enabled);

    if !account.attributes.is_empty() {
        let mut attrs = std::collections::HashMap::new();
        for (key, values) in &account.attributes.attributes {
            attrs.insert(
                key.clone(),
                values.iter().map(|v| v.clone().into()).collect(),
            );
        }
        keycloak_user.attributes = Some(attrs.into());
    }

    keycloak_user
}

fn credential_to_representation(credential: &Credential) -> CredentialRepresentation {
    let mut keycloak_credential = CredentialRepresentation::default();

    keycloak_credential.type_ = Some(credential.type_.clone().into());
    keycloak_credential.value = credential.value.as_ref().map(|v| v.clone().into());
    keycloak_credential.temporary = credential.temporary;

    keycloak_credential
}
