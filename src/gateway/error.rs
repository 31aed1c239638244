use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    Validation(String),
    MissingConfig,
    InvalidRoute(String),
    Unauthorized(String),
    Transport(String),
    /// Non-2xx response from the backend; holds the response body verbatim.
    Remote { status: u16, body: String },
    Decode(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Validation(msg) => write!(f, "invalid request: {}", msg),
            GatewayError::MissingConfig => write!(f, "configuration missing"),
            GatewayError::InvalidRoute(_) => write!(f, "invalid route"),
            GatewayError::Unauthorized(_) => write!(f, "unauthorized"),
            GatewayError::Transport(msg) => write!(f, "{}", msg),
            GatewayError::Remote { body, .. } => write!(f, "{}", body),
            GatewayError::Decode(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

pub type GatewayResult<T> = Result<T, GatewayError>;
