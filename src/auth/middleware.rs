use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use crate::auth::key_manager::KeyManager;
use crate::auth::session::{Caller, Session};
use crate::utils::response::ApiError;

/// Resolves the caller's session from the bearer token and stores it as a
/// [`Caller`] extension. Requests without credentials pass through anonymously.
pub async fn session_middleware(
    State(key_manager): State<Arc<KeyManager>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req.headers()
        .get(AUTHORIZATION)
        .map(|h| h.to_str().map_err(|_| ApiError::Unauthorized))
        .transpose()?;

    let caller = match auth_header {
        None => Caller(None),
        Some(auth_str) => match auth_str.strip_prefix("Bearer ") {
            Some(token) if key_manager.validate_token(token) => Caller(Some(Session::admin())),
            Some(_) => {
                tracing::warn!("Rejected request with an invalid bearer token");
                return Err(ApiError::Forbidden);
            }
            None => return Err(ApiError::Unauthorized),
        },
    };

    req.extensions_mut().insert(caller);
    Ok(next.run(req).await)
}
