//! Route table and guard. [`resolve`] is a pure function from the requested
//! path, the session flag and any pending [`NavigationIntent`] to either the
//! screen to render or a redirect, so the guard can be tested without a UI.
//! Guarding is UX only; the API behind the authenticator owns access control.

use std::fmt;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const MODULES_PATH: &str = "/ModulesPage";
pub const CONTACT_PATH: &str = "/contact";
pub const HEALTH_WORKER_PROFILE_PATH: &str = "/healthworker-profile";
pub const SEARCH_PATH: &str = "/search";
pub const REPORTING_PATH: &str = "/reporting";
pub const AUDIT_LOGS_PATH: &str = "/audit-logs";

/// Where an authenticated user lands by default.
pub const LANDING_PATH: &str = MODULES_PATH;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Login,
    Modules,
    Contact,
    HealthWorkerProfile,
    Search,
    Reporting,
    AuditLogs,
    NotFound,
}

impl Route {
    pub const ALL: [Self; 8] = [
        Self::Root,
        Self::Login,
        Self::Modules,
        Self::Contact,
        Self::HealthWorkerProfile,
        Self::Search,
        Self::Reporting,
        Self::AuditLogs,
    ];

    /// Matches a path, ignoring trailing slashes. Unknown paths map to
    /// [`Route::NotFound`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => ROOT_PATH,
            value => value,
        };

        Self::ALL
            .into_iter()
            .find(|route| route.path() == Some(normalized))
            .unwrap_or(Self::NotFound)
    }

    #[must_use]
    pub const fn path(self) -> Option<&'static str> {
        match self {
            Self::Root => Some(ROOT_PATH),
            Self::Login => Some(LOGIN_PATH),
            Self::Modules => Some(MODULES_PATH),
            Self::Contact => Some(CONTACT_PATH),
            Self::HealthWorkerProfile => Some(HEALTH_WORKER_PROFILE_PATH),
            Self::Search => Some(SEARCH_PATH),
            Self::Reporting => Some(REPORTING_PATH),
            Self::AuditLogs => Some(AUDIT_LOGS_PATH),
            Self::NotFound => None,
        }
    }

    /// Routes that require a signed-in session.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        !matches!(self, Self::Root | Self::Login | Self::NotFound)
    }
}

/// Originally requested path, kept across a redirect to the login screen and
/// consumed once the user gets there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    path: String,
}

impl NavigationIntent {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for NavigationIntent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.path)
    }
}

/// Guard decision for one navigation. Redirects always replace the current
/// history entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect {
        to: String,
        /// Intent to remember before following the redirect.
        intent: Option<NavigationIntent>,
    },
}

impl Navigation {
    fn redirect(to: &str) -> Self {
        Self::Redirect {
            to: to.to_string(),
            intent: None,
        }
    }
}

/// Decides what to do with a navigation to `path`.
#[must_use]
pub fn resolve(path: &str, authenticated: bool, intent: Option<&NavigationIntent>) -> Navigation {
    let route = Route::from_path(path);

    match route {
        Route::Root if authenticated => Navigation::redirect(LANDING_PATH),
        Route::Root => Navigation::redirect(LOGIN_PATH),
        Route::Login if authenticated => {
            Navigation::redirect(&post_login_destination(intent))
        }
        Route::Login | Route::NotFound => Navigation::Render(route),
        _ if authenticated => Navigation::Render(route),
        _ => Navigation::Redirect {
            to: LOGIN_PATH.to_string(),
            intent: Some(NavigationIntent::new(path.trim())),
        },
    }
}

/// Where to send the user after a successful login.
#[must_use]
pub fn post_login_destination(intent: Option<&NavigationIntent>) -> String {
    intent
        .map(NavigationIntent::path)
        .filter(|path| is_safe_destination(path))
        .unwrap_or(LANDING_PATH)
        .to_string()
}

/// Only local, non-login paths are followed after login.
fn is_safe_destination(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !matches!(Route::from_path(path), Route::Login | Route::Root)
}
