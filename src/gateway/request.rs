use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use utoipa::ToSchema;

use crate::gateway::error::{GatewayError, GatewayResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A call the presentation layer wants forwarded to the backend.
///
/// `body` is sent verbatim; structured payloads must be serialized by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackendRequest {
    pub path: String,
    pub method: Method,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl BackendRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            body: None,
            content_type: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn with_body(mut self, body: impl Into<String>, content_type: Option<&str>) -> Self {
        self.body = Some(body.into());
        self.content_type = content_type.map(str::to_string);
        self
    }

    pub fn with_json<T: Serialize>(self, payload: &T) -> serde_json::Result<Self> {
        let body = serde_json::to_string(payload)?;
        Ok(self.with_body(body, Some("application/json")))
    }

    /// Checks an untyped client payload against the request shape.
    pub fn from_value(raw: Value) -> GatewayResult<Self> {
        let request: BackendRequest =
            serde_json::from_value(raw).map_err(|e| GatewayError::Validation(e.to_string()))?;
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> GatewayResult<()> {
        if self.path.is_empty() {
            return Err(GatewayError::Validation("path is empty".to_string()));
        }
        if !self.path.starts_with('/') {
            return Err(GatewayError::Validation(format!(
                "path must start with '/': {}",
                self.path
            )));
        }
        Ok(())
    }
}

/// Uniform result of a gateway call. Exactly one side is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BackendRequestResponse {
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
    pub error: Option<String>,
}

impl BackendRequestResponse {
    pub fn success(data: Value) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: &GatewayError) -> Self {
        Self {
            data: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

impl From<GatewayResult<Value>> for BackendRequestResponse {
    fn from(result: GatewayResult<Value>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => Self::failure(&e),
        }
    }
}
