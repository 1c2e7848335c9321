//! Page routing state.

use serde::{Deserialize, Serialize};

/// Pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Home,
    Map,
    Login,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Map => "/map",
            Route::Login => "/login",
        }
    }

    /// Parses a path. Trailing slashes are ignored; unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim().trim_end_matches('/') {
            "" => Some(Route::Home),
            "/map" => Some(Route::Map),
            "/login" => Some(Route::Login),
            _ => None,
        }
    }

    /// The navbar is hidden on the login page.
    pub fn shows_navbar(self) -> bool {
        self != Route::Login
    }
}

/// Current page.
#[derive(Debug, Default)]
pub struct RouterState {
    current: Route,
}

impl RouterState {
    pub fn new(initial: Route) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Switches page, returning the page that was left.
    pub fn navigate(&mut self, route: Route) -> Route {
        std::mem::replace(&mut self.current, route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Home, Route::Map, Route::Login] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/map/"), Some(Route::Map));
        assert_eq!(Route::from_path("/spots"), None);
    }

    #[test]
    fn test_navbar_hidden_on_login() {
        assert!(Route::Home.shows_navbar());
        assert!(Route::Map.shows_navbar());
        assert!(!Route::Login.shows_navbar());
    }

    #[test]
    fn test_navigate_returns_previous() {
        let mut router = RouterState::new(Route::Home);
        assert_eq!(router.navigate(Route::Map), Route::Home);
        assert_eq!(router.current(), Route::Map);
    }
}
