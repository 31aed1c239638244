use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::Value;
use crate::auth::Caller;
use crate::gateway::{BackendRequest, BackendRequestResponse, GatewayError};
use crate::state::AppState;
use crate::utils::response::gateway_status;

#[utoipa::path(
    post,
    path = "/api/backend",
    request_body = BackendRequest,
    responses(
        (status = 200, description = "Backend call succeeded", body = BackendRequestResponse),
        (status = 400, description = "Malformed request", body = BackendRequestResponse),
        (status = 403, description = "Route not allowed for this caller", body = BackendRequestResponse),
        (status = 500, description = "Backend address not configured", body = BackendRequestResponse),
        (status = 502, description = "Backend unreachable or returned an error", body = BackendRequestResponse)
    ),
    security(
        (),
        ("bearer_auth" = [])
    )
)]
pub async fn proxy(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    body: Result<Json<Value>, JsonRejection>,
) -> (StatusCode, Json<BackendRequestResponse>) {
    let result = match body {
        Ok(Json(raw)) => state.gateway.dispatch_value(raw, caller.session()).await,
        Err(rejection) => {
            tracing::warn!("Rejected unparseable backend request: {}", rejection.body_text());
            Err(GatewayError::Validation(rejection.body_text()))
        }
    };
    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(e) => gateway_status(e),
    };

    (status, Json(result.into()))
}
