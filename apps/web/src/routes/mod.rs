mod contact;
mod login;
mod module_page;
mod modules;
mod not_found;

pub(crate) use contact::ContactPage;
pub(crate) use login::LoginPage;
pub(crate) use module_page::ModulePage;
pub(crate) use modules::ModulesPage;
pub(crate) use not_found::{NotFoundContent, NotFoundPage};

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route table. Paths mirror `hwr_portal::routing`; the guard around it has
/// already redirected `/` and anything the session does not allow.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=|| () />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/ModulesPage") view=ModulesPage />
            <Route path=path!("/contact") view=ContactPage />
            <Route path=path!("/healthworker-profile") view=ModulePage />
            <Route path=path!("/search") view=ModulePage />
            <Route path=path!("/reporting") view=ModulePage />
            <Route path=path!("/audit-logs") view=ModulePage />
        </Routes>
    }
}
