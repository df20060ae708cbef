use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <AppShell>
            <section class="max-w-xl space-y-4">
                <h1 class="text-2xl font-bold text-gray-900">"Contact Support"</h1>
                <p class="text-gray-600">
                    "For account access, corrections to health worker records or technical problems, reach the registry support desk."
                </p>
                <ul class="space-y-2 text-sm text-gray-700">
                    <li>
                        "Email: "
                        <a class="text-amber-700 underline" href="mailto:support@healthregistry.go.ug">
                            "support@healthregistry.go.ug"
                        </a>
                    </li>
                    <li>"Ministry of Health, Plot 6 Lourdel Road, Kampala"</li>
                </ul>
            </section>
        </AppShell>
    }
}
