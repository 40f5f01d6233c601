use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier assigned to a user record by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed attribute names under which role-specific profile fields are stored
/// on the provider's user records. These are wire names shared with other
/// consumers of the realm and must not be renamed.
pub mod attribute_keys {
    pub const ORGANIZATION_NAME: &str = "organizationName";
    pub const ORGANIZATION_ADDRESS: &str = "organizationAddress";
    pub const TELEPHONE_NR: &str = "telephoneNr";
    pub const ADDRESS: &str = "address";
    pub const AGE: &str = "age";
    pub const GENDER: &str = "gender";
    pub const PATIENTS: &str = "patients";
}

/// User attributes as a string-keyed, list-valued property bag.
///
/// This service only ever writes single-element lists; reads use the first
/// element of whatever is stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attributes {
    pub attributes: HashMap<String, Vec<String>>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attribute(&mut self, key: String, values: Vec<String>) {
        self.attributes.insert(key, values);
    }

    /// Store a role-specific field as a single-valued list.
    pub fn set_single_attribute(&mut self, key: &str, value: String) {
        self.attributes.insert(key.to_string(), vec![value]);
    }

    pub fn get_attribute(&self, key: &str) -> Option<&Vec<String>> {
        self.attributes.get(key)
    }

    pub fn get_single_attribute(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)?.first()
    }

    pub fn remove_attribute(&mut self, key: &str) -> Option<Vec<String>> {
        self.attributes.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Credential submitted alongside a new user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub type_: String,
    pub value: Option<String>,
    pub temporary: Option<bool>,
}

impl Credential {
    pub fn password(value: String, temporary: bool) -> Self {
        Self {
            type_: "password".to_string(),
            value: Some(value),
            temporary: Some(temporary),
        }
    }

    pub fn is_password(&self) -> bool {
        self.type_ == "password"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_attribute_reads_first_element() {
        let mut attrs = Attributes::new();
        attrs.set_attribute("age".to_string(), vec!["22".to_string(), "99".to_string()]);
        assert_eq!(attrs.get_single_attribute("age"), Some(&"22".to_string()));
    }

    #[test]
    fn missing_attribute_reads_none() {
        let attrs = Attributes::new();
        assert_eq!(attrs.get_single_attribute("gender"), None);
    }
}
