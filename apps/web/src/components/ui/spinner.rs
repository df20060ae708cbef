use leptos::prelude::*;

/// Inline progress indicator sized to sit next to button text.
#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <span
            class="inline-block h-4 w-4 animate-spin rounded-full border-2 border-gray-400 border-t-gray-900"
            role="status"
            aria-live="polite"
            aria-label=label.unwrap_or("Loading")
        ></span>
    }
}
