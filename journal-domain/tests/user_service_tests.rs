use journal_domain::{
    application::services::UserService,
    domain::{
        entities::{RegisterUserRequest, UserAccount},
        errors::DomainError,
    },
};
use std::sync::Arc;

mod mocks;
use mocks::{MockCredentialVerifier, MockIdentityRepository};

fn service(
    repository: Arc<MockIdentityRepository>,
    verifier: Arc<MockCredentialVerifier>,
) -> UserService {
    UserService::new(repository, verifier)
}

fn register_request(username: &str, role: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        username: username.to_string(),
        email: Some(format!("{username}@example.com")),
        password: "s3cret".to_string(),
        first_name: None,
        last_name: None,
        role: role.to_string(),
    }
}

#[tokio::test]
async fn register_user_assigns_requested_role() {
    let repository = Arc::new(MockIdentityRepository::new());
    let verifier = Arc::new(MockCredentialVerifier::new());
    let service = service(repository.clone(), verifier);

    let summary = service
        .register_user(&register_request("emp1", "employee"))
        .await
        .unwrap();

    assert_eq!(summary.username, "emp1");
    assert_eq!(summary.role.as_deref(), Some("employee"));
    assert_eq!(repository.assign_call_count(), 1);
}

#[tokio::test]
async fn register_user_with_unknown_role_fails() {
    let repository = Arc::new(MockIdentityRepository::new());
    let verifier = Arc::new(MockCredentialVerifier::new());
    let service = service(repository, verifier);

    let result = service.register_user(&register_request("emp1", "janitor")).await;

    assert!(matches!(result, Err(DomainError::RoleNotFound { .. })));
}

#[tokio::test]
async fn login_succeeds_only_when_probe_succeeds() {
    let repository = Arc::new(MockIdentityRepository::new());
    repository.insert_account(UserAccount::new("doc1".to_string()), &["doctor"]);
    let verifier = Arc::new(MockCredentialVerifier::new());
    verifier.accept("doc1", "right-password");
    let service = service(repository, verifier);

    let summary = service.login("doc1", "right-password").await.unwrap();
    assert_eq!(summary.role.as_deref(), Some("doctor"));

    let result = service.login("doc1", "wrong-password").await;
    assert!(matches!(result, Err(DomainError::AuthenticationFailed { .. })));
}

#[tokio::test]
async fn failed_verification_is_authentication_failure_even_when_record_exists() {
    let repository = Arc::new(MockIdentityRepository::new());
    repository.insert_account(UserAccount::new("doc1".to_string()), &["doctor"]);
    let verifier = Arc::new(MockCredentialVerifier::new());
    verifier.accept("doc1", "s3cret");
    verifier.fail_all();
    let service = service(repository, verifier);

    let result = service.login("doc1", "s3cret").await;

    assert!(matches!(result, Err(DomainError::AuthenticationFailed { .. })));
}

#[tokio::test]
async fn find_user_resolves_role_with_doctor_precedence() {
    let repository = Arc::new(MockIdentityRepository::new());
    repository.insert_account(
        UserAccount::new("both".to_string()),
        &["employee", "doctor"],
    );
    let verifier = Arc::new(MockCredentialVerifier::new());
    let service = service(repository, verifier);

    let summary = service.find_user_by_username("both").await.unwrap();

    assert_eq!(summary.role.as_deref(), Some("doctor"));
}

#[tokio::test]
async fn find_user_miss_is_typed_not_found() {
    let repository = Arc::new(MockIdentityRepository::new());
    let verifier = Arc::new(MockCredentialVerifier::new());
    let service = service(repository, verifier);

    let result = service.find_user_by_username("nobody").await;

    assert!(matches!(result, Err(DomainError::UserNotFound { .. })));
}
