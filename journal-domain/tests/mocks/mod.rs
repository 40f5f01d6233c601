#![allow(dead_code)]

use async_trait::async_trait;
use journal_domain::{
    application::ports::{auth::CredentialVerifier, repository::IdentityRepository},
    domain::{
        entities::*,
        errors::{DomainError, DomainResult},
    },
};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory identity provider standing in for the Keycloak admin API.
pub struct MockIdentityRepository {
    users: Mutex<Vec<UserAccount>>,
    user_roles: Mutex<HashMap<String, Vec<String>>>, // user id -> realm roles
    realm_roles: Mutex<Vec<String>>,
    id_counter: Mutex<u32>,
    update_calls: Mutex<u32>,
    assign_calls: Mutex<u32>,
}

impl MockIdentityRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            user_roles: Mutex::new(HashMap::new()),
            realm_roles: Mutex::new(vec![
                "doctor".to_string(),
                "patient".to_string(),
                "employee".to_string(),
            ]),
            id_counter: Mutex::new(0),
            update_calls: Mutex::new(0),
            assign_calls: Mutex::new(0),
        }
    }

    /// Seed an existing record with roles, bypassing the create path.
    pub fn insert_account(&self, mut account: UserAccount, roles: &[&str]) -> EntityId {
        let id = self.next_id();
        account.id = Some(id.clone());
        self.users.lock().unwrap().push(account);
        self.user_roles.lock().unwrap().insert(
            id.as_str().to_string(),
            roles.iter().map(|r| r.to_string()).collect(),
        );
        id
    }

    pub fn stored_account(&self, username: &str) -> Option<UserAccount> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    pub fn assigned_roles(&self, user_id: &str) -> Vec<String> {
        self.user_roles
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn update_call_count(&self) -> u32 {
        *self.update_calls.lock().unwrap()
    }

    pub fn assign_call_count(&self) -> u32 {
        *self.assign_calls.lock().unwrap()
    }

    fn next_id(&self) -> EntityId {
        let mut counter = self.id_counter.lock().unwrap();
        *counter += 1;
        EntityId::from_string(format!("user-{counter}"))
    }
}

#[async_trait]
impl IdentityRepository for MockIdentityRepository {
    async fn find_user_by_id(&self, user_id: &str) -> DomainResult<UserAccount> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id.as_ref().map(|id| id.as_str()) == Some(user_id))
            .cloned()
            .ok_or_else(|| DomainError::UserNotFound {
                identifier: user_id.to_string(),
            })
    }

    async fn find_user_by_username(&self, username: &str) -> DomainResult<Option<UserAccount>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn search_users_by_attribute(
        &self,
        key: &str,
        value: &str,
    ) -> DomainResult<Vec<UserAccount>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.get_single_attribute(key).map(|v| v.as_str()) == Some(value))
            .cloned()
            .collect())
    }

    async fn create_user(
        &self,
        account: &UserAccount,
        _credential: &Credential,
    ) -> DomainResult<EntityId> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == account.username) {
            return Err(DomainError::AlreadyExists {
                username: account.username.clone(),
            });
        }

        let id = self.next_id();
        let mut stored = account.clone();
        stored.id = Some(id.clone());
        users.push(stored);
        Ok(id)
    }

    async fn update_user(&self, account: &UserAccount) -> DomainResult<()> {
        let user_id = account.require_id()?.to_string();
        let mut users = self.users.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id.as_ref().map(|id| id.as_str()) == Some(user_id.as_str()))
            .ok_or_else(|| DomainError::UserNotFound {
                identifier: user_id.clone(),
            })?;

        *slot = account.clone();
        *self.update_calls.lock().unwrap() += 1;
        Ok(())
    }

    async fn get_user_realm_roles(&self, user_id: &str) -> DomainResult<Vec<String>> {
        Ok(self
            .user_roles
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn assign_realm_role(&self, user_id: &str, role_name: &str) -> DomainResult<()> {
        if !self
            .realm_roles
            .lock()
            .unwrap()
            .iter()
            .any(|r| r == role_name)
        {
            return Err(DomainError::RoleNotFound {
                role: role_name.to_string(),
            });
        }

        self.user_roles
            .lock()
            .unwrap()
            .entry(user_id.to_string())
            .or_default()
            .push(role_name.to_string());
        *self.assign_calls.lock().unwrap() += 1;
        Ok(())
    }
}

/// Credential verifier accepting only explicitly registered pairs.
pub struct MockCredentialVerifier {
    accepted: Mutex<HashMap<String, String>>,
    fail_all: Mutex<bool>,
}

impl MockCredentialVerifier {
    pub fn new() -> Self {
        Self {
            accepted: Mutex::new(HashMap::new()),
            fail_all: Mutex::new(false),
        }
    }

    pub fn accept(&self, username: &str, password: &str) {
        self.accepted
            .lock()
            .unwrap()
            .insert(username.to_string(), password.to_string());
    }

    /// Simulate an unreachable token endpoint: every probe fails.
    pub fn fail_all(&self) {
        *self.fail_all.lock().unwrap() = true;
    }
}

#[async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify_password(&self, username: &str, password: &str) -> DomainResult<()> {
        if *self.fail_all.lock().unwrap() {
            return Err(DomainError::AuthenticationFailed {
                reason: "Token request failed: connection refused".to_string(),
            });
        }

        match self.accepted.lock().unwrap().get(username) {
            Some(stored) if stored == password => Ok(()),
            _ => Err(DomainError::AuthenticationFailed {
                reason: "Password grant rejected with status 401 Unauthorized".to_string(),
            }),
        }
    }
}
