use crate::components::{Alert, AlertKind, AppShell};
use crate::routes::NotFoundContent;
use hwr_portal::catalog::find_by_path;
use hwr_portal::routing::LANDING_PATH;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Placeholder screen for a registry module, looked up by the current path.
#[component]
pub fn ModulePage() -> impl IntoView {
    let location = use_location();
    let module = Memo::new(move |_| location.pathname.with(|path| find_by_path(path)));

    view! {
        <AppShell>
            {move || match module.get() {
                Some(module) => {
                    view! {
                        <section class="space-y-4">
                            <div class="flex items-center gap-3">
                                <span class="material-symbols-outlined text-3xl text-amber-600">
                                    {module.icon}
                                </span>
                                <h1 class="text-2xl font-bold text-gray-900">{module.title}</h1>
                            </div>
                            <p class="text-gray-600">{module.description}</p>
                            <Alert
                                kind=AlertKind::Info
                                message="This module is not available yet."
                            />
                            <A href=LANDING_PATH {..} class="inline-block text-sm text-amber-700 hover:underline">
                                "Back to modules"
                            </A>
                        </section>
                    }
                        .into_any()
                }
                None => view! { <NotFoundContent /> }.into_any(),
            }}
        </AppShell>
    }
}
