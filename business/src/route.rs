//! Routing shell paths.
//!
//! The shell only needs to know whether the current path mounts the user table.

/// Path the user table is mounted at.
pub const USERS_PATH: &str = "/users";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Users,
    NotFound(String),
}

impl Route {
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed == USERS_PATH {
            Self::Users
        } else {
            Self::NotFound(path.to_string())
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Users => USERS_PATH,
            Self::NotFound(path) => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_default_is_users() {
        assert_eq!(Route::default(), Route::Users);
        assert_eq!(Route::default().path(), "/users");
    }

    #[test]
    fn test_resolve_users_path() {
        assert_eq!(Route::resolve("/users"), Route::Users);
        assert_eq!(Route::resolve("/users/"), Route::Users);
    }

    #[test]
    fn test_resolve_other_paths() {
        assert_eq!(Route::resolve("/"), Route::NotFound("/".to_string()));
        assert_eq!(
            Route::resolve("/users/42"),
            Route::NotFound("/users/42".to_string())
        );
        assert_eq!(Route::resolve("/admin").path(), "/admin");
    }
}
