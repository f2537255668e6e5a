// ============================================================================
// ROUTER - Paths, guards and render/redirect decisions
// ============================================================================

use crate::stores::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Schedule,
    Dashboard,
    Admin,
    Register,
    Login,
    NotFound,
}

/// Which guard a route sits behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Needs an active session
    Private,
    /// Only for visitors without a session
    Public,
    /// No session check (admin has its own two-factor flow)
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(Route),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let path = path.trim_end_matches('/');
        match path {
            "" => Route::Root,
            "/schedule" => Route::Schedule,
            "/dashboard" => Route::Dashboard,
            "/admin" => Route::Admin,
            "/register" => Route::Register,
            "/login" => Route::Login,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Schedule => "/schedule",
            Route::Dashboard => "/dashboard",
            Route::Admin => "/admin",
            Route::Register => "/register",
            Route::Login => "/login",
            Route::NotFound => "/404",
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Schedule | Route::Dashboard => Access::Private,
            Route::Login | Route::Register => Access::Public,
            Route::Root | Route::Admin | Route::NotFound => Access::Open,
        }
    }

    /// Navbar is hidden on the auth screens and the admin page
    pub fn shows_navbar(&self) -> bool {
        !matches!(self, Route::Login | Route::Register | Route::Admin)
    }
}

pub fn require_session(session: &Session) -> RouteDecision {
    if session.is_active() {
        RouteDecision::Render
    } else {
        RouteDecision::Redirect(Route::Login)
    }
}

pub fn redirect_if_session(session: &Session) -> RouteDecision {
    if session.is_active() {
        RouteDecision::Redirect(Route::Schedule)
    } else {
        RouteDecision::Render
    }
}

/// Decision for `route` given the current session
pub fn resolve(route: Route, session: &Session) -> RouteDecision {
    if route == Route::Root {
        return RouteDecision::Redirect(Route::Schedule);
    }
    match route.access() {
        Access::Private => require_session(session),
        Access::Public => redirect_if_session(session),
        Access::Open => RouteDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sessions() -> Vec<(Session, bool)> {
        let values = [None, Some(""), Some("value")];
        let mut out = Vec::new();
        for token in values {
            for username in values {
                let session = Session {
                    token: token.map(str::to_string),
                    username: username.map(str::to_string),
                };
                let active = token == Some("value") && username == Some("value");
                out.push((session, active));
            }
        }
        out
    }

    #[test]
    fn test_require_session_all_combinations() {
        for (session, active) in sessions() {
            let expected = if active {
                RouteDecision::Render
            } else {
                RouteDecision::Redirect(Route::Login)
            };
            assert_eq!(require_session(&session), expected, "{:?}", session);
        }
    }

    #[test]
    fn test_redirect_if_session_is_complement() {
        for (session, active) in sessions() {
            let expected = if active {
                RouteDecision::Redirect(Route::Schedule)
            } else {
                RouteDecision::Render
            };
            assert_eq!(redirect_if_session(&session), expected, "{:?}", session);
            assert_ne!(
                require_session(&session) == RouteDecision::Render,
                redirect_if_session(&session) == RouteDecision::Render
            );
        }
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Schedule,
            Route::Dashboard,
            Route::Admin,
            Route::Register,
            Route::Login,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::from_path("/"), Route::Root);
        assert_eq!(Route::from_path(""), Route::Root);
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_path("/login?next=/dashboard"), Route::Login);
        assert_eq!(Route::from_path("/settings"), Route::NotFound);
    }

    #[test]
    fn test_resolve_per_route() {
        let anonymous = Session::default();
        let active = Session::new("T", "a@b.com");

        assert_eq!(resolve(Route::Root, &anonymous), RouteDecision::Redirect(Route::Schedule));
        assert_eq!(resolve(Route::Schedule, &anonymous), RouteDecision::Redirect(Route::Login));
        assert_eq!(resolve(Route::Dashboard, &active), RouteDecision::Render);
        assert_eq!(resolve(Route::Login, &active), RouteDecision::Redirect(Route::Schedule));
        assert_eq!(resolve(Route::Register, &anonymous), RouteDecision::Render);
        assert_eq!(resolve(Route::Admin, &anonymous), RouteDecision::Render);
        assert_eq!(resolve(Route::Admin, &active), RouteDecision::Render);
    }

    #[test]
    fn test_navbar_visibility() {
        assert!(Route::Schedule.shows_navbar());
        assert!(Route::Dashboard.shows_navbar());
        assert!(!Route::Login.shows_navbar());
        assert!(!Route::Register.shows_navbar());
        assert!(!Route::Admin.shows_navbar());
    }
}
