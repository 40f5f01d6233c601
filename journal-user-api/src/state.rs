use crate::config::Config;
use journal_domain::{
    application::{
        ports::{auth::CredentialVerifier, repository::IdentityRepository},
        services::{DoctorService, EmployeeService, PatientService, UserService},
    },
    infrastructure::adapters::{keycloak_password_grant::PasswordGrantVerifier, keycloak_rest::KeycloakRestAdapter},
};
use keycloak::{KeycloakAdmin, KeycloakAdminToken};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub doctor_service: Arc<DoctorService>,
    pub patient_service: Arc<PatientService>,
    pub employee_service: Arc<EmployeeService>,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let reqwest_client = reqwest::Client::new();

        let admin_token = KeycloakAdminToken::acquire_custom_realm(
            &config.keycloak_url,
            &config.keycloak_admin_username,
            &config.keycloak_admin_password,
            &config.keycloak_realm,
            &config.keycloak_admin_client_id,
            "password",
            &reqwest_client,
        )
        .await?;

        let keycloak_admin = KeycloakAdmin::new(
            &config.keycloak_url,
            admin_token,
            reqwest_client.clone(),
        );

        let repository: Arc<dyn IdentityRepository> = Arc::new(KeycloakRestAdapter::new(
            keycloak_admin,
            config.keycloak_realm.clone(),
        ));

        let verifier: Arc<dyn CredentialVerifier> = Arc::new(PasswordGrantVerifier::new(
            config.keycloak_url.clone(),
            config.keycloak_realm.clone(),
            config.keycloak_client_id.clone(),
            config.keycloak_client_secret.clone(),
            reqwest_client,
        ));

        Ok(Self {
            user_service: Arc::new(UserService::new(repository.clone(), verifier)),
            doctor_service: Arc::new(DoctorService::new(repository.clone())),
            patient_service: Arc::new(PatientService::new(repository.clone())),
            employee_service: Arc::new(EmployeeService::new(repository)),
        })
    }
}
