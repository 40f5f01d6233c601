use crate::{
    dto::{CreateDoctorRequest, DoctorDto, UserSummaryDto},
    error::AppResult,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// Register a doctor and return the account summary for the fresh record.
pub async fn create_doctor(
    State(state): State<AppState>,
    Json(request): Json<CreateDoctorRequest>,
) -> AppResult<(StatusCode, Json<UserSummaryDto>)> {
    state.doctor_service.register_doctor(&request.to_domain()).await?;

    let summary = state
        .user_service
        .find_user_by_username(&request.username)
        .await?;
    Ok((StatusCode::CREATED, Json(summary.into())))
}

pub async fn get_doctor_by_doctor_id(
    State(state): State<AppState>,
    Path(doctor_id): Path<String>,
) -> AppResult<Json<DoctorDto>> {
    let doctor = state.doctor_service.get_doctor_by_id(&doctor_id).await?;
    Ok(Json(doctor.into()))
}

pub async fn get_doctor_by_user_name(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> AppResult<Json<DoctorDto>> {
    let doctor = state
        .doctor_service
        .get_doctor_by_username(&user_name)
        .await?;
    Ok(Json(doctor.into()))
}

pub async fn get_doctors_by_organization_name(
    State(state): State<AppState>,
    Path(organization_name): Path<String>,
) -> AppResult<Json<Vec<DoctorDto>>> {
    let doctors = state
        .doctor_service
        .get_doctors_by_organization(&organization_name)
        .await?;
    Ok(Json(doctors.into_iter().map(DoctorDto::from).collect()))
}
