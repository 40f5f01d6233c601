use crate::{
    dto::{CreatePatientRequest, PatientDto},
    error::AppResult,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn create_patient(
    State(state): State<AppState>,
    Json(request): Json<CreatePatientRequest>,
) -> AppResult<(StatusCode, Json<PatientDto>)> {
    let patient = state
        .patient_service
        .register_patient(&request.to_domain())
        .await?;
    Ok((StatusCode::CREATED, Json(patient.into())))
}

pub async fn get_by_patient_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PatientDto>> {
    let patient = state.patient_service.get_patient_by_id(&id).await?;
    Ok(Json(patient.into()))
}

pub async fn get_by_user_name(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> AppResult<Json<PatientDto>> {
    let patient = state
        .patient_service
        .get_patient_by_username(&user_name)
        .await?;
    Ok(Json(patient.into()))
}

pub async fn get_patients_by_doctor_name(
    State(state): State<AppState>,
    Path(doctor_name): Path<String>,
) -> AppResult<Json<Vec<PatientDto>>> {
    let patients = state
        .patient_service
        .get_patients_by_doctor(&doctor_name)
        .await?;
    Ok(Json(patients.into_iter().map(PatientDto::from).collect()))
}

/// Record the patient on the doctor's patient list. Adding the same patient
/// twice is a no-op.
pub async fn add_doctor(
    State(state): State<AppState>,
    Path((patient_name, doctor_name)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    state
        .patient_service
        .assign_patient_to_doctor(&patient_name, &doctor_name)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
