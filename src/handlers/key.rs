use axum::{
    extract::State,
    Extension, Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use crate::auth::Caller;
use crate::state::AppState;
use crate::utils::response::{ApiResponse, ApiError};

#[derive(Serialize, ToSchema)]
pub struct KeyAgeResponse {
    pub age_in_days: u64,
}

#[derive(Serialize, ToSchema)]
pub struct KeyRefreshResponse {
    pub key: String,
}

fn require_admin(caller: &Caller) -> Result<(), ApiError> {
    if caller.is_admin() {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}

#[utoipa::path(
    get,
    path = "/key",
    responses(
        (status = 200, description = "Admin key age in days", body = Object),
        (status = 401, description = "Caller is not an admin")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_key_age(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<ApiResponse<KeyAgeResponse>>, ApiError> {
    require_admin(&caller)?;

    let age_in_days = state
        .key_manager
        .get_age_in_days()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(ApiResponse::success(KeyAgeResponse { age_in_days })))
}

#[utoipa::path(
    post,
    path = "/key",
    responses(
        (status = 200, description = "Rotate the admin key and return the new one", body = Object),
        (status = 401, description = "Caller is not an admin")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn refresh_key(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<ApiResponse<KeyRefreshResponse>>, ApiError> {
    require_admin(&caller)?;

    let key = state
        .key_manager
        .refresh_key()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!("Admin key rotated through the API");

    Ok(Json(ApiResponse::success(KeyRefreshResponse { key })))
}
