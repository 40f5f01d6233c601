use super::common::*;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Realm role names acting as the sole authorization signal.
pub mod roles {
    pub const DOCTOR: &str = "doctor";
    pub const PATIENT: &str = "patient";
    pub const EMPLOYEE: &str = "employee";
}

/// Generic user record as held by the identity provider.
///
/// Role-specific fields live in the attribute map; realm roles are stored
/// beside the record and fetched through a separate admin call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Option<EntityId>,
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub enabled: bool,
    pub attributes: Attributes,
}

impl UserAccount {
    pub fn new(username: String) -> Self {
        Self {
            id: None,
            username,
            email: None,
            first_name: None,
            last_name: None,
            enabled: true,
            attributes: Attributes::new(),
        }
    }

    /// Identifier of a record that has been read back from the provider.
    pub fn require_id(&self) -> DomainResult<&str> {
        self.id
            .as_ref()
            .map(|id| id.as_str())
            .ok_or_else(|| DomainError::Validation {
                field: "id".to_string(),
                message: "User record has no provider identifier".to_string(),
            })
    }

    pub fn get_single_attribute(&self, key: &str) -> Option<&String> {
        self.attributes.get_single_attribute(key)
    }

    pub fn set_single_attribute(&mut self, key: &str, value: String) {
        self.attributes.set_single_attribute(key, value);
    }
}

/// Validate a username according to registration rules.
pub fn validate_username(username: &str) -> DomainResult<()> {
    if username.is_empty() {
        return Err(DomainError::Validation {
            field: "username".to_string(),
            message: "Username cannot be empty".to_string(),
        });
    }

    if username.len() > 100 {
        return Err(DomainError::Validation {
            field: "username".to_string(),
            message: "Username cannot exceed 100 characters".to_string(),
        });
    }

    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
    {
        return Err(DomainError::Validation {
            field: "username".to_string(),
            message: "Username can only contain alphanumeric characters, hyphens, underscores, and dots"
                .to_string(),
        });
    }

    Ok(())
}

/// Validate a password submitted at registration.
pub fn validate_password(password: &str) -> DomainResult<()> {
    if password.is_empty() {
        return Err(DomainError::Validation {
            field: "password".to_string(),
            message: "Password cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Request to register a generic user without role-specific fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
}

impl RegisterUserRequest {
    pub fn validate(&self) -> DomainResult<()> {
        validate_username(&self.username)?;
        validate_password(&self.password)?;
        Ok(())
    }

    pub fn to_account(&self) -> UserAccount {
        let mut account = UserAccount::new(self.username.clone());
        account.email = self.email.clone();
        account.first_name = self.first_name.clone();
        account.last_name = self.last_name.clone();
        account
    }

    pub fn credential(&self) -> Credential {
        Credential::password(self.password.clone(), false)
    }
}

/// Slim account view returned by login, signup, and username lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub user_id: String,
    pub username: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl UserSummary {
    /// Build a summary from a record and its realm roles.
    ///
    /// Role precedence when a user holds several: doctor, then patient,
    /// then employee. Other realm roles are ignored.
    pub fn from_account(account: &UserAccount, realm_roles: &[String]) -> DomainResult<Self> {
        let user_id = account.require_id()?.to_string();

        let role = [roles::DOCTOR, roles::PATIENT, roles::EMPLOYEE]
            .iter()
            .find(|candidate| realm_roles.iter().any(|r| r == *candidate))
            .map(|r| r.to_string());

        Ok(Self {
            user_id,
            username: account.username.clone(),
            email: account.email.clone(),
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account_with_id(username: &str) -> UserAccount {
        let mut account = UserAccount::new(username.to_string());
        account.id = Some(EntityId::from("kc-1"));
        account
    }

    #[test]
    fn summary_prefers_doctor_over_other_roles() {
        let account = account_with_id("ada");
        let roles = vec!["employee".to_string(), "doctor".to_string()];
        let summary = UserSummary::from_account(&account, &roles).unwrap();
        assert_eq!(summary.role.as_deref(), Some("doctor"));
    }

    #[test]
    fn summary_without_known_role_has_no_role() {
        let account = account_with_id("ada");
        let roles = vec!["offline_access".to_string()];
        let summary = UserSummary::from_account(&account, &roles).unwrap();
        assert_eq!(summary.role, None);
    }

    #[test]
    fn username_validation_rejects_spaces() {
        assert!(validate_username("two words").is_err());
        assert!(validate_username("ada.lovelace-1").is_ok());
    }
}
