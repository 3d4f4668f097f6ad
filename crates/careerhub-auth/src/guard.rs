//! Route gate deciding which pages require a signed-in session.

/// Outcome of a route check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Proceed.
    Allow,
    /// Send the user to `/login`.
    RedirectToLogin,
}

/// Path-based access rules for the careers site.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGate;

impl RouteGate {
    /// Routes reachable without a session (exact match).
    pub const PUBLIC_ROUTES: [&'static str; 3] = ["/", "/login", "/register"];

    /// Route prefixes that require a session.
    pub const PROTECTED_PREFIXES: [&'static str; 4] =
        ["/dashboard", "/create-company", "/jobs", "/company-slug"];

    /// Where unauthenticated users are sent.
    pub const LOGIN_PATH: &'static str = "/login";

    /// Decide whether `path` may be visited.
    ///
    /// Public careers pages (`/{slug}/careers`) are always allowed.
    pub fn check(path: &str, authenticated: bool) -> RouteDecision {
        if Self::PUBLIC_ROUTES.contains(&path) || path.contains("/careers") {
            return RouteDecision::Allow;
        }

        let protected = Self::PROTECTED_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix));

        if protected && !authenticated {
            RouteDecision::RedirectToLogin
        } else {
            RouteDecision::Allow
        }
    }
}
