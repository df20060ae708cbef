//! Landing screen: one card per registry module. Opening a module re-checks
//! the session so a logout in another tab sends the user to the login screen
//! with the module remembered.

use crate::components::AppShell;
use crate::features::auth::state::use_auth;
use hwr_portal::catalog::{ModuleDescriptor, MODULES};
use hwr_portal::routing::{NavigationIntent, LOGIN_PATH};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use tracing::debug;

#[component]
pub fn ModulesPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let open_module = move |path: &'static str| {
        if auth.is_authenticated.get_untracked() {
            navigate(path, Default::default());
        } else {
            debug!(path, "Module requested without a session");
            auth.remember_intent(NavigationIntent::new(path));
            navigate(LOGIN_PATH, Default::default());
        }
    };

    view! {
        <AppShell>
            <div class="grid gap-6 md:grid-cols-2">
                {MODULES
                    .iter()
                    .map(|module| {
                        let open_module = open_module.clone();
                        view! {
                            <ModuleCard
                                module=module
                                on_open=move || open_module(module.path)
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </AppShell>
    }
}

#[component]
fn ModuleCard(
    module: &'static ModuleDescriptor,
    on_open: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="flex flex-col rounded-lg border border-gray-200 bg-white shadow-sm">
            <div class="flex items-center gap-3 border-b border-gray-100 p-5">
                <span class="material-symbols-outlined text-3xl text-amber-600">{module.icon}</span>
                <h2 class="text-lg font-semibold text-gray-900">{module.title}</h2>
            </div>
            <div class="flex-1 p-5 text-sm text-gray-600">
                <p>{module.description}</p>
                <ul class="mt-4 space-y-1">
                    {module
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="flex items-center gap-2">
                                    <span class="text-emerald-600">"✓"</span>
                                    {*feature}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="border-t border-gray-100 p-5">
                <button
                    type="button"
                    class="w-full rounded-md bg-gray-900 px-4 py-2 text-sm font-medium text-white hover:bg-gray-700"
                    on:click=move |_| on_open()
                >
                    "Access Module"
                </button>
            </div>
        </div>
    }
}
