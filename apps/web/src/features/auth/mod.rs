//! Auth feature: the reactive session context and the route guard. The session
//! itself is loaded and persisted by the library's `SessionStore`; this module
//! only mirrors it into signals so views react to login and logout.

mod guards;
pub(crate) mod state;

pub(crate) use guards::RouteGuard;
