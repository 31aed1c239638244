use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Caller role. Bearer-key auth only ever yields `Admin`; `User` sessions come
/// from the external identity provider that fronts the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// Authenticated identity of the current caller, resolved server side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
}

impl Session {
    pub fn admin() -> Self {
        Session { role: Role::Admin }
    }

    pub fn user() -> Self {
        Session { role: Role::User }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Request extension set by the session middleware. Anonymous callers carry `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Caller(pub Option<Session>);

impl Caller {
    pub fn session(&self) -> Option<&Session> {
        self.0.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.0.is_some_and(|s| s.is_admin())
    }
}
