use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use journal_domain::domain::errors::DomainError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Domain(e) = self;

        let status = match e {
            DomainError::UserNotFound { .. }
            | DomainError::DoctorNotFound { .. }
            | DomainError::PatientNotFound { .. }
            | DomainError::EmployeeNotFound { .. }
            | DomainError::RoleNotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
            DomainError::AlreadyExists { .. } => StatusCode::CONFLICT,
            DomainError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            DomainError::ExternalService { .. } => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": e.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: DomainError) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn domain_errors_map_to_expected_statuses() {
        assert_eq!(
            status_of(DomainError::DoctorNotFound {
                identifier: "doc1".to_string(),
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(DomainError::AlreadyExists {
                username: "doc1".to_string(),
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(DomainError::AuthenticationFailed {
                reason: "rejected".to_string(),
            }),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(DomainError::upstream("connection refused")),
            StatusCode::BAD_GATEWAY
        );
    }
}
