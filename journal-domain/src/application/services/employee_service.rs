use crate::{
    application::ports::IdentityRepository,
    domain::{
        entities::{attribute_keys, roles, Employee, EntityId, RegisterEmployeeRequest},
        errors::{DomainError, DomainResult},
    },
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Use cases on employee records; follows the doctor pattern.
pub struct EmployeeService {
    repository: Arc<dyn IdentityRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn IdentityRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register_employee(
        &self,
        request: &RegisterEmployeeRequest,
    ) -> DomainResult<EntityId> {
        request.validate()?;

        let account = request.to_account();
        let user_id = self
            .repository
            .create_user(&account, &request.credential())
            .await?;

        self.repository
            .assign_realm_role(user_id.as_str(), &request.role)
            .await?;

        info!(
            "Registered employee '{}' with id '{}'",
            request.username, user_id
        );
        Ok(user_id)
    }

    #[instrument(skip(self))]
    pub async fn get_employee_by_id(&self, user_id: &str) -> DomainResult<Employee> {
        let account = self
            .repository
            .find_user_by_id(user_id)
            .await
            .map_err(|e| as_employee_not_found(e, user_id))?;

        let roles = self
            .repository
            .get_user_realm_roles(account.require_id()?)
            .await?;
        Ok(Employee::from_account(&account, &roles))
    }

    #[instrument(skip(self))]
    pub async fn get_employee_by_username(&self, username: &str) -> DomainResult<Employee> {
        let account = self
            .repository
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| DomainError::EmployeeNotFound {
                identifier: username.to_string(),
            })?;

        let roles = self
            .repository
            .get_user_realm_roles(account.require_id()?)
            .await?;
        Ok(Employee::from_account(&account, &roles))
    }

    /// List employees of an organization, filtering attribute matches by the
    /// employee realm role the same way the doctor listing does.
    #[instrument(skip(self))]
    pub async fn get_employees_by_organization(
        &self,
        organization_name: &str,
    ) -> DomainResult<Vec<Employee>> {
        let candidates = self
            .repository
            .search_users_by_attribute(attribute_keys::ORGANIZATION_NAME, organization_name)
            .await?;

        let mut employees = Vec::new();
        for account in candidates {
            let realm_roles = self
                .repository
                .get_user_realm_roles(account.require_id()?)
                .await?;

            if realm_roles
                .iter()
                .any(|r| r.eq_ignore_ascii_case(roles::EMPLOYEE))
            {
                employees.push(Employee::from_account(&account, &realm_roles));
            }
        }

        info!(
            "Found {} employees in organization '{}'",
            employees.len(),
            organization_name
        );
        Ok(employees)
    }
}

fn as_employee_not_found(err: DomainError, identifier: &str) -> DomainError {
    match err {
        DomainError::UserNotFound { .. } => DomainError::EmployeeNotFound {
            identifier: identifier.to_string(),
        },
        other => other,
    }
}
