//! Registry page frame: a header with the signed-in user and logout action,
//! the content container, and the support footer. Logout clears the stored
//! session before navigating to the login screen.

use crate::app_lib::GIT_SHA;
use crate::features::auth::state::use_auth;
use hwr_portal::routing::{CONTACT_PATH, LANDING_PATH, LOGIN_PATH};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use tracing::info;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let display_name = move || {
        auth.session
            .with(|session| session.display_name().map(str::to_string))
            .unwrap_or_else(|| "Signed in".to_string())
    };

    let on_logout = move |_| {
        auth.logout();
        info!("User logged out");
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="bg-gray-900 text-white">
                <div class="max-w-screen-xl mx-auto flex flex-wrap items-center justify-between p-4">
                    <A href=LANDING_PATH {..} class="flex flex-col">
                        <span class="text-lg font-bold tracking-wide">
                            "UGANDA HEALTH WORKERS REGISTRY"
                        </span>
                        <span class="text-xs text-amber-300">
                            "Comprehensive Management System for Health Professionals"
                        </span>
                    </A>
                    <Show when=move || auth.is_authenticated.get()>
                        <div class="flex items-center gap-4 text-sm">
                            <span class="flex items-center gap-1">
                                <span class="material-symbols-outlined text-base">
                                    "account_circle"
                                </span>
                                {display_name}
                            </span>
                            <button
                                type="button"
                                class="flex items-center gap-1 rounded-md border border-gray-600 px-3 py-1.5 hover:bg-gray-800"
                                on:click=on_logout.clone()
                            >
                                <span class="material-symbols-outlined text-base">"logout"</span>
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </header>
            <main class="flex-1">
                <div class="max-w-screen-xl mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="border-t border-gray-200 bg-white">
                <div class="max-w-screen-xl mx-auto flex flex-wrap items-center justify-between gap-2 p-4 text-xs text-gray-500">
                    <span>"Uganda Ministry of Health - Health Worker Registry System"</span>
                    <span class="flex flex-wrap items-center gap-4">
                        <a href="/privacy-policy">"Privacy Policy"</a>
                        <a href="/terms-of-service">"Terms of Service"</a>
                        <A href=CONTACT_PATH>"Contact Support"</A>
                        <span title="Build">{GIT_SHA}</span>
                    </span>
                </div>
            </footer>
        </div>
    }
}
