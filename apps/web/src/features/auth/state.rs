//! Auth session state and context for the frontend. The provider loads the
//! persisted session once on mount and exposes derived signals for the guard
//! and routes. The pending navigation intent lives here too, so it survives
//! the trip through the login screen.

use crate::app_lib::session_store;
use hwr_portal::routing::NavigationIntent;
use hwr_portal::session::Session;
use leptos::prelude::*;
use tracing::warn;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Session>,
    pub is_authenticated: Signal<bool>,
    pub intent: RwSignal<Option<NavigationIntent>>,
}

impl AuthContext {
    fn new(session: Session) -> Self {
        let session = RwSignal::new(session);
        let is_authenticated = Signal::derive(move || session.with(Session::is_authenticated));
        Self {
            session,
            is_authenticated,
            intent: RwSignal::new(None),
        }
    }

    /// Publishes a session that has already been persisted.
    pub fn set_session(&self, session: Session) {
        self.session.set(session);
    }

    /// Clears the persisted session and the in-memory copy.
    pub fn logout(&self) {
        if let Err(err) = session_store().clear() {
            warn!("Failed to clear persisted session: {err}");
        }
        self.intent.set(None);
        self.session.set(Session::anonymous());
    }

    /// Records where to go once the user has signed in.
    pub fn remember_intent(&self, intent: NavigationIntent) {
        self.intent.set(Some(intent));
    }

    pub fn clear_intent(&self) {
        if self.intent.with_untracked(Option::is_some) {
            self.intent.set(None);
        }
    }
}

/// Provides auth context seeded from storage.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(session_store().load());
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback signed-out context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(Session::anonymous()))
}
