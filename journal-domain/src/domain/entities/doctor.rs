use super::common::{attribute_keys, Credential};
use super::user::{roles, validate_password, validate_username, UserAccount};
use crate::domain::errors::DomainResult;
use serde::{Deserialize, Serialize};

/// Doctor projection over a generic user record.
///
/// Derived from the `organizationName`/`organizationAddress` attributes on
/// every read; there is no independent storage or lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub organization_name: Option<String>,
    pub organization_address: Option<String>,
}

impl Doctor {
    /// Reconstruct the projection from a record and its realm roles.
    /// Missing attributes decode to `None`.
    pub fn from_account(account: &UserAccount, realm_roles: &[String]) -> Self {
        let role = realm_roles
            .iter()
            .find(|r| r.eq_ignore_ascii_case(roles::DOCTOR))
            .cloned()
            .unwrap_or_else(|| roles::DOCTOR.to_string());

        Self {
            username: account.username.clone(),
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            role,
            organization_name: account
                .get_single_attribute(attribute_keys::ORGANIZATION_NAME)
                .cloned(),
            organization_address: account
                .get_single_attribute(attribute_keys::ORGANIZATION_ADDRESS)
                .cloned(),
        }
    }
}

/// Request to register a doctor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterDoctorRequest {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub organization_name: Option<String>,
    pub organization_address: Option<String>,
}

impl RegisterDoctorRequest {
    pub fn validate(&self) -> DomainResult<()> {
        validate_username(&self.username)?;
        validate_password(&self.password)?;
        Ok(())
    }

    /// Build the generic record with organization fields encoded as
    /// single-valued attributes.
    pub fn to_account(&self) -> UserAccount {
        let mut account = UserAccount::new(self.username.clone());
        account.email = self.email.clone();
        account.first_name = self.first_name.clone();
        account.last_name = self.last_name.clone();

        if let Some(name) = &self.organization_name {
            account.set_single_attribute(attribute_keys::ORGANIZATION_NAME, name.clone());
        }
        if let Some(address) = &self.organization_address {
            account.set_single_attribute(attribute_keys::ORGANIZATION_ADDRESS, address.clone());
        }

        account
    }

    pub fn credential(&self) -> Credential {
        Credential::password(self.password.clone(), false)
    }
}
