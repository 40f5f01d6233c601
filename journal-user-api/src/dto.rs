use journal_domain::domain::entities::{
    Doctor, Employee, Patient, RegisterDoctorRequest, RegisterEmployeeRequest,
    RegisterPatientRequest, RegisterUserRequest, UserSummary,
};
use serde::{Deserialize, Serialize};

/// Wire DTOs mirroring the role projections as flat camelCase JSON.
///
/// Read responses carry a `password` field that is always null, matching the
/// shape the frontend already consumes.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDto {
    pub username: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub organization_name: Option<String>,
    pub organization_address: Option<String>,
}

impl From<Doctor> for DoctorDto {
    fn from(doctor: Doctor) -> Self {
        Self {
            username: doctor.username,
            email: doctor.email,
            password: None,
            first_name: doctor.first_name,
            last_name: doctor.last_name,
            role: doctor.role,
            organization_name: doctor.organization_name,
            organization_address: doctor.organization_address,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoctorRequest {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default = "default_doctor_role")]
    pub role: String,
    pub organization_name: Option<String>,
    pub organization_address: Option<String>,
}

fn default_doctor_role() -> String {
    "doctor".to_string()
}

impl CreateDoctorRequest {
    pub fn to_domain(&self) -> RegisterDoctorRequest {
        RegisterDoctorRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role.clone(),
            organization_name: self.organization_name.clone(),
            organization_address: self.organization_address.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDto {
    pub username: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub telephone_nr: Option<String>,
    pub address: Option<String>,
    pub age: i32,
    pub gender: Option<String>,
}

impl From<Patient> for PatientDto {
    fn from(patient: Patient) -> Self {
        Self {
            username: patient.username,
            email: patient.email,
            password: None,
            first_name: patient.first_name,
            last_name: patient.last_name,
            role: patient.role,
            telephone_nr: patient.telephone_nr,
            address: patient.address,
            age: patient.age,
            gender: patient.gender,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default = "default_patient_role")]
    pub role: String,
    pub telephone_nr: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub age: i32,
    pub gender: Option<String>,
}

fn default_patient_role() -> String {
    "patient".to_string()
}

impl CreatePatientRequest {
    pub fn to_domain(&self) -> RegisterPatientRequest {
        RegisterPatientRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role.clone(),
            telephone_nr: self.telephone_nr.clone(),
            address: self.address.clone(),
            age: self.age,
            gender: self.gender.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub username: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub organization_name: Option<String>,
    pub organization_address: Option<String>,
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            username: employee.username,
            email: employee.email,
            password: None,
            first_name: employee.first_name,
            last_name: employee.last_name,
            role: employee.role,
            organization_name: employee.organization_name,
            organization_address: employee.organization_address,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default = "default_employee_role")]
    pub role: String,
    pub organization_name: Option<String>,
    pub organization_address: Option<String>,
}

fn default_employee_role() -> String {
    "employee".to_string()
}

impl CreateEmployeeRequest {
    pub fn to_domain(&self) -> RegisterEmployeeRequest {
        RegisterEmployeeRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role.clone(),
            organization_name: self.organization_name.clone(),
            organization_address: self.organization_address.clone(),
        }
    }
}

/// Slim account view returned by login, signup, and username lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub user_id: String,
    pub user_name: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl From<UserSummary> for UserSummaryDto {
    fn from(summary: UserSummary) -> Self {
        Self {
            user_id: summary.user_id,
            user_name: summary.username,
            email: summary.email,
            role: summary.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
}

impl SignupRequest {
    pub fn to_domain(&self) -> RegisterUserRequest {
        RegisterUserRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role.clone(),
        }
    }
}

// Query parameter structs
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UsernameQuery {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn doctor_dto_serializes_camel_case_with_null_password() {
        let dto = DoctorDto::from(Doctor {
            username: "doc1".to_string(),
            email: Some("doc1@example.com".to_string()),
            first_name: None,
            last_name: None,
            role: "doctor".to_string(),
            organization_name: Some("City Hospital".to_string()),
            organization_address: None,
        });

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["organizationName"], json!("City Hospital"));
        assert_eq!(value["password"], json!(null));
    }

    #[test]
    fn create_patient_request_defaults_role_and_age() {
        let request: CreatePatientRequest = serde_json::from_value(json!({
            "username": "pat1",
            "password": "pw"
        }))
        .unwrap();

        assert_eq!(request.role, "patient");
        assert_eq!(request.age, 0);
    }

    #[test]
    fn user_summary_uses_original_field_names() {
        let dto = UserSummaryDto {
            user_id: "kc-1".to_string(),
            user_name: "doc1".to_string(),
            email: None,
            role: Some("doctor".to_string()),
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["userId"], json!("kc-1"));
        assert_eq!(value["userName"], json!("doc1"));
    }
}
