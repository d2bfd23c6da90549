//! Navigable routes of the nodebird front end.

/// A route the application can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// Landing page.
    Home,
    /// Page hosting the login form.
    Login,
    /// Account registration page.
    Signup,
}

impl AppRoute {
    /// Returns the URL path for this route.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_route_path_is_exact() {
        assert_eq!(AppRoute::Signup.path(), "/signup");
    }

    #[test]
    fn paths_are_unique() {
        let routes = [AppRoute::Home, AppRoute::Login, AppRoute::Signup];
        let mut paths: Vec<_> = routes.iter().map(AppRoute::path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), routes.len());
    }
}
