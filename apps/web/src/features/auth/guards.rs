use crate::features::auth::state::use_auth;
use hwr_portal::routing::{resolve, Navigation};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use tracing::debug;

/// Applies the route table to every navigation. Content renders only when the
/// current path resolves to a screen; redirects replace the history entry.
/// UX only; real access control must live on the API.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        let authenticated = auth.is_authenticated.get();
        auth.intent
            .with(|intent| resolve(&path, authenticated, intent.as_ref()))
    });

    Effect::new(move |_| match decision.get() {
        Navigation::Redirect { to, intent } => {
            if let Some(intent) = intent {
                auth.remember_intent(intent);
            }
            debug!(to = %to, "Redirecting");
            navigate(
                &to,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
        Navigation::Render(route) => {
            if route.is_protected() {
                auth.clear_intent();
            }
        }
    });

    view! {
        <Show when=move || matches!(decision.get(), Navigation::Render(_))>
            {children()}
        </Show>
    }
}
