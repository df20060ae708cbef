//! Not-found screen for paths outside the route table. Signed-in users are
//! offered the module list, everyone else the login screen.

use crate::components::{AppShell, Button, ButtonVariant};
use crate::features::auth::state::use_auth;
use hwr_portal::routing::{LANDING_PATH, LOGIN_PATH};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <NotFoundContent />
        </AppShell>
    }
}

/// Not-found body without the shell, for pages that already render one.
#[component]
pub fn NotFoundContent() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    let (target, label) = if auth.is_authenticated.get_untracked() {
        (LANDING_PATH, "Back to modules")
    } else {
        (LOGIN_PATH, "Go to login")
    };
    let go_back = Callback::new(move |()| navigate(target, Default::default()));

    view! {
        <section class="mx-auto max-w-lg rounded-lg border border-gray-200 bg-white p-8 text-center shadow-sm">
            <span class="material-symbols-outlined text-5xl text-amber-600">"travel_explore"</span>
            <h1 class="mt-4 text-xl font-bold text-gray-900">"Page not found"</h1>
            <p class="mt-2 text-sm text-gray-600">
                "There is no registry page at "
                <code class="rounded bg-gray-100 px-1">{move || location.pathname.get()}</code>
                "."
            </p>
            <div class="mt-6 flex justify-center">
                <Button variant=ButtonVariant::Secondary on_press=go_back>
                    {label}
                </Button>
            </div>
        </section>
    }
}
