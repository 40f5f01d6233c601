use crate::{
    dto::{CreateEmployeeRequest, EmployeeDto},
    error::AppResult,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<EmployeeDto>)> {
    state
        .employee_service
        .register_employee(&request.to_domain())
        .await?;

    let employee = state
        .employee_service
        .get_employee_by_username(&request.username)
        .await?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeDto>> {
    let employee = state.employee_service.get_employee_by_id(&id).await?;
    Ok(Json(employee.into()))
}

pub async fn get_employee_by_user_name(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> AppResult<Json<EmployeeDto>> {
    let employee = state
        .employee_service
        .get_employee_by_username(&user_name)
        .await?;
    Ok(Json(employee.into()))
}

pub async fn get_employees_by_organization(
    State(state): State<AppState>,
    Path(org_name): Path<String>,
) -> AppResult<Json<Vec<EmployeeDto>>> {
    let employees = state
        .employee_service
        .get_employees_by_organization(&org_name)
        .await?;
    Ok(Json(employees.into_iter().map(EmployeeDto::from).collect()))
}
