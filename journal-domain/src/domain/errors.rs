use thiserror::Error;

/// Unified error taxonomy for user-management operations.
///
/// Lookup misses are typed not-found errors everywhere; listings that
/// legitimately match nothing return empty collections instead.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {identifier}")]
    UserNotFound { identifier: String },

    #[error("Doctor not found: {identifier}")]
    DoctorNotFound { identifier: String },

    #[error("Patient not found: {identifier}")]
    PatientNotFound { identifier: String },

    #[error("Employee not found: {identifier}")]
    EmployeeNotFound { identifier: String },

    #[error("Realm role not found: {role}")]
    RoleNotFound { role: String },

    #[error("User already exists: {username}")]
    AlreadyExists { username: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },
}

impl DomainError {
    /// Shorthand for failures reported by the identity provider.
    pub fn upstream(message: impl Into<String>) -> Self {
        DomainError::ExternalService {
            service: "Keycloak".to_string(),
            message: message.into(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
