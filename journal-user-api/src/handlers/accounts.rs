use crate::{
    dto::{LoginQuery, SignupRequest, UsernameQuery, UserSummaryDto},
    error::AppResult,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

/// Verify credentials with a password-grant probe, then return the account
/// summary. Failed probes surface as 401 even when the record exists.
pub async fn login(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> AppResult<Json<UserSummaryDto>> {
    let summary = state
        .user_service
        .login(&query.username, &query.password)
        .await?;
    Ok(Json(summary.into()))
}

pub async fn get_user_by_user_name(
    State(state): State<AppState>,
    Query(query): Query<UsernameQuery>,
) -> AppResult<Json<UserSummaryDto>> {
    let summary = state
        .user_service
        .find_user_by_username(&query.username)
        .await?;
    Ok(Json(summary.into()))
}

pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<UserSummaryDto>)> {
    let summary = state.user_service.register_user(&request.to_domain()).await?;
    Ok((StatusCode::CREATED, Json(summary.into())))
}
