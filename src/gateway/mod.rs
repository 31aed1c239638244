//! Single chokepoint for every call to the external backend.
//!
//! A call is validated, checked against the route allow-list with the
//! caller's session, forwarded once through a [`Transport`], and folded into a
//! [`BackendRequestResponse`]. Nothing is retried.

pub mod error;
pub mod request;
pub mod routes;
pub mod transport;

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::auth::Session;

pub use error::{GatewayError, GatewayResult};
pub use request::{BackendRequest, BackendRequestResponse, Method};
pub use routes::{RouteAccess, RouteTable};
pub use transport::{OutboundRequest, ReqwestTransport, Transport, TransportError, TransportResponse};

#[derive(Clone)]
pub struct Gateway {
    base_url: Option<Arc<str>>,
    routes: Arc<RouteTable>,
    transport: Arc<dyn Transport>,
}

impl Gateway {
    pub fn new(base_url: Option<String>, routes: Arc<RouteTable>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.map(Into::into),
            routes,
            transport,
        }
    }

    /// Forwards `request` and never fails; errors land in the `error` field.
    pub async fn call(&self, request: BackendRequest, session: Option<&Session>) -> BackendRequestResponse {
        self.dispatch(request, session).await.into()
    }

    /// Like [`Gateway::call`] for input that has not been shape-checked yet.
    pub async fn call_value(&self, raw: Value, session: Option<&Session>) -> BackendRequestResponse {
        self.dispatch_value(raw, session).await.into()
    }

    pub async fn dispatch_value(&self, raw: Value, session: Option<&Session>) -> GatewayResult<Value> {
        match BackendRequest::from_value(raw) {
            Ok(request) => self.dispatch(request, session).await,
            Err(e) => {
                warn!("Rejected malformed backend request: {}", e);
                Err(e)
            }
        }
    }

    /// Typed variant of [`Gateway::call`] that keeps the error kind.
    pub async fn dispatch(&self, request: BackendRequest, session: Option<&Session>) -> GatewayResult<Value> {
        let method = request.method;
        let path = request.path.clone();

        let result = self.forward(request, session).await;
        match &result {
            Ok(_) => debug!("{} {} succeeded", method, path),
            Err(e) => warn!("{} {} failed: {:?}", method, path, e),
        }
        result
    }

    async fn forward(&self, request: BackendRequest, session: Option<&Session>) -> GatewayResult<Value> {
        request.validate()?;

        let base_url = self.base_url.as_deref().ok_or(GatewayError::MissingConfig)?;

        self.routes.authorize(&request.path, session)?;

        let outbound = OutboundRequest {
            url: format!("{}{}", base_url, request.path),
            method: request.method,
            content_type: request.content_type,
            body: request.body,
        };

        let response = self
            .transport
            .send(outbound)
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.is_success() {
            return Err(GatewayError::Remote {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}
