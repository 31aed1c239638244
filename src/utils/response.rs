use serde::Serialize;
use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};

use crate::gateway::GatewayError;

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            status: "success".to_string(),
            message: "Operation successful".to_string(),
            data: Some(data),
        }
    }

    pub fn error(message: &str) -> Self {
        ApiResponse {
            status: "error".to_string(),
            message: message.to_string(),
            data: None,
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    Forbidden,
    BadRequest(String),
    BadGateway(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Route problems collapse to 403 regardless of whether the path exists.
pub fn gateway_status(error: &GatewayError) -> StatusCode {
    match error {
        GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
        GatewayError::MissingConfig => StatusCode::INTERNAL_SERVER_ERROR,
        GatewayError::InvalidRoute(_) | GatewayError::Unauthorized(_) => StatusCode::FORBIDDEN,
        GatewayError::Transport(_) | GatewayError::Remote { .. } | GatewayError::Decode(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(e: GatewayError) -> Self {
        let message = e.to_string();
        match gateway_status(&e) {
            StatusCode::BAD_REQUEST => ApiError::BadRequest(message),
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::BAD_GATEWAY => ApiError::BadGateway(message),
            _ => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Unauthorized => "Unauthorized".to_string(),
            ApiError::Forbidden => "Forbidden".to_string(),
            ApiError::BadRequest(m) | ApiError::BadGateway(m) | ApiError::Internal(m) => m.clone(),
        };

        let body = Json(ApiResponse::<()>::error(&message));
        (self.status(), body).into_response()
    }
}
