use super::common::{attribute_keys, Credential};
use super::user::{roles, validate_password, validate_username, UserAccount};
use crate::domain::errors::DomainResult;
use serde::{Deserialize, Serialize};

/// Patient projection over a generic user record.
///
/// Age is stored as a string attribute and parsed back to an integer on
/// read; a missing or unparsable value reads as 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub telephone_nr: Option<String>,
    pub address: Option<String>,
    pub age: i32,
    pub gender: Option<String>,
}

impl Patient {
    pub fn from_account(account: &UserAccount) -> Self {
        let age = account
            .get_single_attribute(attribute_keys::AGE)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0);

        Self {
            username: account.username.clone(),
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            role: roles::PATIENT.to_string(),
            telephone_nr: account
                .get_single_attribute(attribute_keys::TELEPHONE_NR)
                .cloned(),
            address: account.get_single_attribute(attribute_keys::ADDRESS).cloned(),
            age,
            gender: account.get_single_attribute(attribute_keys::GENDER).cloned(),
        }
    }
}

/// Request to register a patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPatientRequest {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub telephone_nr: Option<String>,
    pub address: Option<String>,
    pub age: i32,
    pub gender: Option<String>,
}

impl RegisterPatientRequest {
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

        if let Some(telephone) = &self.telephone_nr {
            account.set_single_attribute(attribute_keys::TELEPHONE_NR, telephone.clone());
        }
        if let Some(address) = &self.address {
            account.set_single_attribute(attribute_keys::ADDRESS, address.clone());
        }
        if let Some(gender) = &self.gender {
            account.set_single_attribute(attribute_keys::GENDER, gender.clone());
        }
        account.set_single_attribute(attribute_keys::AGE, self.age.to_string());

        account
    }

    pub fn credential(&self) -> Credential {
        Credential::password(self.password.clone(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_round_trips_through_attribute_string() {
        let request = RegisterPatientRequest {
            username: "pat1".to_string(),
            email: None,
            password: "pw".to_string(),
            first_name: None,
            last_name: None,
            role: "patient".to_string(),
            telephone_nr: None,
            address: None,
            age: 22,
            gender: None,
        };

        let account = request.to_account();
        assert_eq!(
            account.get_single_attribute(attribute_keys::AGE),
            Some(&"22".to_string())
        );
        assert_eq!(Patient::from_account(&account).age, 22);
    }

    #[test]
    fn missing_age_reads_as_zero() {
        let account = UserAccount::new("pat1".to_string());
        assert_eq!(Patient::from_account(&account).age, 0);
    }
}
