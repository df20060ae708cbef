//! Alert banners for login failures and notices. Messages are rendered as
//! text and must never include tokens or passwords.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Info,
}

impl AlertKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Error => {
                "flex items-start gap-2 rounded-md border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
            }
            Self::Info => {
                "flex items-start gap-2 rounded-md border border-sky-200 bg-sky-50 px-4 py-3 text-sm text-sky-800"
            }
        }
    }

    const fn icon(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class=kind.class() role="alert">
            <span class="material-symbols-outlined text-base">{kind.icon()}</span>
            <span>{message}</span>
        </div>
    }
}
