use crate::{
    application::ports::IdentityRepository,
    domain::{
        entities::{attribute_keys, Patient, RegisterPatientRequest},
        errors::{DomainError, DomainResult},
    },
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Use cases on patient records, including the doctor-patient association
/// kept as a `patients` attribute list on the doctor's record.
pub struct PatientService {
    repository: Arc<dyn IdentityRepository>,
}

impl PatientService {
    pub fn new(repository: Arc<dyn IdentityRepository>) -> Self {
        Self { repository }
    }

    /// Register a patient and return the stored projection, re-read by id so
    /// the response reflects what the provider actually persisted.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register_patient(&self, request: &RegisterPatientRequest) -> DomainResult<Patient> {
        request.validate()?;

        let account = request.to_account();
        let user_id = self
            .repository
            .create_user(&account, &request.credential())
            .await?;

        self.repository
            .assign_realm_role(user_id.as_str(), &request.role)
            .await?;

        info!("Registered patient '{}' with id '{}'", request.username, user_id);
        self.get_patient_by_id(user_id.as_str()).await
    }

    #[instrument(skip(self))]
    pub async fn get_patient_by_id(&self, user_id: &str) -> DomainResult<Patient> {
        let account = self
            .repository
            .find_user_by_id(user_id)
            .await
            .map_err(|e| as_patient_not_found(e, user_id))?;

        Ok(Patient::from_account(&account))
    }

    #[instrument(skip(self))]
    pub async fn get_patient_by_username(&self, username: &str) -> DomainResult<Patient> {
        let account = self
            .repository
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| DomainError::PatientNotFound {
                identifier: username.to_string(),
            })?;

        Ok(Patient::from_account(&account))
    }

    /// Append a patient username to the doctor's `patients` attribute list.
    ///
    /// Read-modify-write on the doctor's record: sequentially idempotent (a
    /// duplicate add performs no write), but concurrent callers can lose
    /// updates since the provider offers no optimistic-lock token here.
    #[instrument(skip(self))]
    pub async fn assign_patient_to_doctor(
        &self,
        patient_username: &str,
        doctor_username: &str,
    ) -> DomainResult<()> {
        let mut doctor = self
            .repository
            .find_user_by_username(doctor_username)
            .await?
            .ok_or_else(|| DomainError::DoctorNotFound {
                identifier: doctor_username.to_string(),
            })?;

        let mut patients = doctor
            .attributes
            .get_attribute(attribute_keys::PATIENTS)
            .cloned()
            .unwrap_or_default();

        if patients.iter().any(|p| p == patient_username) {
            debug!(
                "Patient '{}' already assigned to doctor '{}'",
                patient_username, doctor_username
            );
            return Ok(());
        }

        patients.push(patient_username.to_string());
        doctor
            .attributes
            .set_attribute(attribute_keys::PATIENTS.to_string(), patients);

        self.repository.update_user(&doctor).await?;
        info!(
            "Assigned patient '{}' to doctor '{}'",
            patient_username, doctor_username
        );
        Ok(())
    }

    /// Resolve the doctor's `patients` attribute list to full projections.
    ///
    /// The list carries no referential integrity: entries that no longer
    /// resolve to a user are skipped with a warning.
    #[instrument(skip(self))]
    pub async fn get_patients_by_doctor(
        &self,
        doctor_username: &str,
    ) -> DomainResult<Vec<Patient>> {
        let doctor = self
            .repository
            .find_user_by_username(doctor_username)
            .await?
            .ok_or_else(|| DomainError::DoctorNotFound {
                identifier: doctor_username.to_string(),
            })?;

        let usernames = doctor
            .attributes
            .get_attribute(attribute_keys::PATIENTS)
            .cloned()
            .unwrap_or_default();

        let mut patients = Vec::new();
        for username in usernames {
            match self.get_patient_by_username(&username).await {
                Ok(patient) => patients.push(patient),
                Err(e) => warn!(
                    "Skipping patient '{}' listed on doctor '{}': {}",
                    username, doctor_username, e
                ),
            }
        }
        Ok(patients)
    }
}

fn as_patient_not_found(err: DomainError, identifier: &str) -> DomainError {
    match err {
        DomainError::UserNotFound { .. } => DomainError::PatientNotFound {
            identifier: identifier.to_string(),
        },
        other => other,
    }
}
