use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum ButtonVariant {
    /// Amber call to action, used for submitting forms.
    #[default]
    Primary,
    /// Dark outline used for navigation and secondary actions.
    Secondary,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => {
                "inline-flex items-center justify-center gap-2 rounded-md bg-amber-500 px-5 py-2.5 text-sm font-semibold text-gray-900 hover:bg-amber-400 focus:outline-none focus:ring-4 focus:ring-amber-200"
            }
            Self::Secondary => {
                "inline-flex items-center justify-center gap-2 rounded-md border border-gray-900 px-5 py-2.5 text-sm font-medium text-gray-900 hover:bg-gray-900 hover:text-white focus:outline-none focus:ring-4 focus:ring-gray-200"
            }
        }
    }
}

/// Registry action button. While `disabled` is set it stays visible, dims
/// and ignores clicks, which the login form relies on during submission.
#[component]
pub fn Button(
    #[prop(optional)] submit: bool,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let button_type = if submit { "submit" } else { "button" };
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <button
            type=button_type
            class=variant.class()
            class:w-full=full_width
            class:cursor-not-allowed=is_disabled
            class:opacity-60=is_disabled
            disabled=is_disabled
            on:click=move |_| {
                if let Some(on_press) = on_press {
                    on_press.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
