use std::collections::HashSet;

use crate::auth::Session;
use crate::gateway::error::{GatewayError, GatewayResult};

pub const PUBLIC_ROUTES: &[&str] = &[
    "/api/novels",
    "/api/novels_stats",
    "/api/random_novels",
];

pub const ADMIN_ROUTES: &[&str] = &[
    "/api/update_novels",
    "/api/upload_novels_backup",
    "/api/create_novel",
    "/api/delete_novel",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Admin,
}

/// Allow-list of backend paths. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct RouteTable {
    public: HashSet<String>,
    admin: HashSet<String>,
}

impl RouteTable {
    pub fn new<P, A, S>(public: P, admin: A) -> Self
    where
        P: IntoIterator<Item = S>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let admin: HashSet<String> = admin.into_iter().map(Into::into).collect();
        // a path listed twice keeps the stricter rule
        let public = public
            .into_iter()
            .map(Into::into)
            .filter(|p| !admin.contains(p))
            .collect();

        Self { public, admin }
    }

    pub fn classify(&self, path: &str) -> Option<RouteAccess> {
        if self.admin.contains(path) {
            Some(RouteAccess::Admin)
        } else if self.public.contains(path) {
            Some(RouteAccess::Public)
        } else {
            None
        }
    }

    pub fn authorize(&self, path: &str, session: Option<&Session>) -> GatewayResult<RouteAccess> {
        match self.classify(path) {
            None => Err(GatewayError::InvalidRoute(path.to_string())),
            Some(RouteAccess::Admin) if !session.is_some_and(Session::is_admin) => {
                Err(GatewayError::Unauthorized(path.to_string()))
            }
            Some(access) => Ok(access),
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(PUBLIC_ROUTES.iter().copied(), ADMIN_ROUTES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_classifies_known_routes() {
        let table = RouteTable::default();
        assert_eq!(table.classify("/api/novels"), Some(RouteAccess::Public));
        assert_eq!(table.classify("/api/delete_novel"), Some(RouteAccess::Admin));
        assert_eq!(table.classify("/api/unknown"), None);
        assert_eq!(table.classify("/api/novels/"), None);
    }

    #[test]
    fn admin_route_requires_admin_session() {
        let table = RouteTable::default();
        assert!(table.authorize("/api/create_novel", None).is_err());
        assert!(table.authorize("/api/create_novel", Some(&Session::user())).is_err());
        assert_eq!(
            table.authorize("/api/create_novel", Some(&Session::admin())),
            Ok(RouteAccess::Admin)
        );
    }

    #[test]
    fn public_route_allows_anyone() {
        let table = RouteTable::default();
        assert_eq!(table.authorize("/api/novels_stats", None), Ok(RouteAccess::Public));
        assert_eq!(
            table.authorize("/api/novels_stats", Some(&Session::user())),
            Ok(RouteAccess::Public)
        );
    }

    #[test]
    fn path_in_both_lists_is_admin() {
        let table = RouteTable::new(["/api/x"], ["/api/x"]);
        assert_eq!(table.classify("/api/x"), Some(RouteAccess::Admin));
        assert!(matches!(
            table.authorize("/api/x", None),
            Err(GatewayError::Unauthorized(_))
        ));
    }

    #[test]
    fn unknown_route_is_rejected_even_for_admin() {
        let table = RouteTable::default();
        assert!(matches!(
            table.authorize("/api/image_to_tetris", Some(&Session::admin())),
            Err(GatewayError::InvalidRoute(_))
        ));
    }
}
