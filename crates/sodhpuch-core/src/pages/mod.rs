//! Page flows shared by the TUI and the CLI.
//!
//! Each page is a small state machine with no I/O of its own, plus an async
//! helper that drives the whole flow against an [`ApiClient`](crate::api::ApiClient)
//! and a [`TokenStore`](crate::session::TokenStore).

pub mod dashboard;
pub mod home;
pub mod login;

/// The three pages of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Login,
    Dashboard,
}

impl Route {
    /// Navigation order.
    pub const ALL: [Route; 3] = [Route::Home, Route::Login, Route::Dashboard];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
        }
    }

    /// Parses a route path such as `/login`.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/admin"), None);
    }
}
