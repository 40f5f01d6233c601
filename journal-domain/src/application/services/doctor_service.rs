use crate::{
    application::ports::IdentityRepository,
    domain::{
        entities::{attribute_keys, roles, Doctor, EntityId, RegisterDoctorRequest},
        errors::{DomainError, DomainResult},
    },
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Use cases on doctor records.
pub struct DoctorService {
    repository: Arc<dyn IdentityRepository>,
}

impl DoctorService {
    pub fn new(repository: Arc<dyn IdentityRepository>) -> Self {
        Self { repository }
    }

    /// Register a doctor: create the record with organization attributes and
    /// a password credential, then assign the realm role named by the
    /// request. A provider conflict aborts before any role assignment.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register_doctor(&self, request: &RegisterDoctorRequest) -> DomainResult<EntityId> {
        request.validate()?;

        let account = request.to_account();
        let user_id = self
            .repository
            .create_user(&account, &request.credential())
            .await?;

        self.repository
            .assign_realm_role(user_id.as_str(), &request.role)
            .await?;

        info!("Registered doctor '{}' with id '{}'", request.username, user_id);
        Ok(user_id)
    }

    #[instrument(skip(self))]
    pub async fn get_doctor_by_id(&self, user_id: &str) -> DomainResult<Doctor> {
        let account = self
            .repository
            .find_user_by_id(user_id)
            .await
            .map_err(|e| as_doctor_not_found(e, user_id))?;

        let roles = self
            .repository
            .get_user_realm_roles(account.require_id()?)
            .await?;
        Ok(Doctor::from_account(&account, &roles))
    }

    #[instrument(skip(self))]
    pub async fn get_doctor_by_username(&self, username: &str) -> DomainResult<Doctor> {
        let account = self
            .repository
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| DomainError::DoctorNotFound {
                identifier: username.to_string(),
            })?;

        let roles = self
            .repository
            .get_user_realm_roles(account.require_id()?)
            .await?;
        Ok(Doctor::from_account(&account, &roles))
    }

    /// List doctors belonging to an organization.
    ///
    /// Attribute search returns every user carrying the organization name,
    /// so each candidate's realm roles are fetched individually and users
    /// without the doctor role are dropped. An organization with no doctors
    /// yields an empty list.
    #[instrument(skip(self))]
    pub async fn get_doctors_by_organization(
        &self,
        organization_name: &str,
    ) -> DomainResult<Vec<Doctor>> {
        let candidates = self
            .repository
            .search_users_by_attribute(attribute_keys::ORGANIZATION_NAME, organization_name)
            .await?;

        let mut doctors = Vec::new();
        for account in candidates {
            let realm_roles = self
                .repository
                .get_user_realm_roles(account.require_id()?)
                .await?;

            if realm_roles
                .iter()
                .any(|r| r.eq_ignore_ascii_case(roles::DOCTOR))
            {
                doctors.push(Doctor::from_account(&account, &realm_roles));
            }
        }

        info!(
            "Found {} doctors in organization '{}'",
            doctors.len(),
            organization_name
        );
        Ok(doctors)
    }
}

fn as_doctor_not_found(err: DomainError, identifier: &str) -> DomainError {
    match err {
        DomainError::UserNotFound { .. } => DomainError::DoctorNotFound {
            identifier: identifier.to_string(),
        },
        other => other,
    }
}
