use crate::app_lib::{config, session_store};
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::state::use_auth;
use hwr_portal::authenticator::AuthBackend;
use hwr_portal::errors::{Field, LoginError};
use hwr_portal::login::{complete_login, Credentials, LoginScreen, LoginSuccess};
use hwr_portal::routing::NavigationIntent;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use tracing::error;

const INPUT_CLASS: &str = "block w-full rounded-md border border-gray-300 bg-white p-2.5 text-sm text-gray-900 focus:border-amber-500 focus:ring-amber-500 disabled:bg-gray-100";
const FIELD_ERROR_CLASS: &str = "mt-1 text-sm text-red-600";

#[derive(Clone)]
struct LoginAttempt {
    credentials: Credentials,
    remember: bool,
}

/// Builds the configured authenticator and runs one login attempt against it.
async fn authenticate(
    attempt: LoginAttempt,
    intent: Option<NavigationIntent>,
) -> Result<LoginSuccess, LoginError> {
    let backend = config::load()
        .and_then(|config| AuthBackend::from_config(&config))
        .map_err(|err| {
            error!("Authenticator is misconfigured: {err}");
            LoginError::Config(err)
        })?;

    complete_login(
        &backend,
        &session_store(),
        &attempt.credentials,
        attempt.remember,
        intent.as_ref(),
    )
    .await
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let screen = RwSignal::new(LoginScreen::mount(&session_store()));
    let loading = Signal::derive(move || screen.with(LoginScreen::is_loading));

    let login_action = Action::new_local(move |attempt: &LoginAttempt| {
        authenticate(attempt.clone(), auth.intent.get_untracked())
    });

    Effect::new(move |_| {
        login_action.value().with(|result| {
            let Some(result) = result else {
                return;
            };
            screen.update(|screen| screen.finish(result.as_ref()));
            if let Ok(success) = result {
                auth.set_session(success.session.clone());
                navigate(
                    &success.destination,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        });
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let Some(credentials) = screen.try_update(LoginScreen::begin_submit).flatten() else {
            return;
        };
        let remember = screen.with_untracked(|screen| screen.form.remember);
        login_action.dispatch(LoginAttempt {
            credentials,
            remember,
        });
    };

    let field_error = move |field: Field| {
        move || {
            screen
                .with(|screen| screen.field_error(field))
                .map(|message| view! { <p class=FIELD_ERROR_CLASS>{message}</p> })
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100 px-4">
            <div class="w-full max-w-md overflow-hidden rounded-lg bg-white shadow-lg">
                <div class="bg-gray-900 px-6 py-5 text-center text-white">
                    <h1 class="text-lg font-bold tracking-wide">
                        "UGANDA HEALTH WORKERS REGISTRY"
                    </h1>
                    <p class="text-sm text-amber-300">"Ministry of Health - Secure Login Portal"</p>
                </div>

                <div class="px-6 py-6">
                    <div class="mb-6 flex justify-center">
                        <img src="/arms.jpg" class="h-20" alt="Uganda Government Logo" />
                    </div>

                    <form class="space-y-5" on:submit=on_submit novalidate>
                        {move || {
                            screen
                                .with(|screen| screen.message().map(str::to_string))
                                .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                        }}

                        <div>
                            <label class="mb-2 block text-sm font-medium text-gray-900" for="username">
                                "Username"
                            </label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                class=INPUT_CLASS
                                placeholder="Enter your username"
                                autocomplete="username"
                                prop:value=move || screen.with(|screen| screen.form.username.clone())
                                on:input=move |event| {
                                    screen.update(|screen| screen.form.username = event_target_value(&event));
                                }
                                disabled=move || loading.get()
                            />
                            {field_error(Field::Username)}
                        </div>

                        <div>
                            <label class="mb-2 block text-sm font-medium text-gray-900" for="password">
                                "Password"
                            </label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                class=INPUT_CLASS
                                placeholder="Enter your password"
                                autocomplete="current-password"
                                prop:value=move || screen.with(|screen| screen.form.password.clone())
                                on:input=move |event| {
                                    screen.update(|screen| screen.form.password = event_target_value(&event));
                                }
                                disabled=move || loading.get()
                            />
                            {field_error(Field::Password)}
                        </div>

                        <div class="flex items-center justify-between text-sm">
                            <label class="flex items-center gap-2 text-gray-700" for="remember">
                                <input
                                    id="remember"
                                    name="remember"
                                    type="checkbox"
                                    prop:checked=move || screen.with(|screen| screen.form.remember)
                                    on:change=move |event| {
                                        screen.update(|screen| screen.form.remember = event_target_checked(&event));
                                    }
                                    disabled=move || loading.get()
                                />
                                "Remember me"
                            </label>
                            <a class="text-amber-700 hover:underline" href="/forgot-password">
                                "Forgot password?"
                            </a>
                        </div>

                        <Button submit=true disabled=loading full_width=true>
                            <Show when=move || loading.get() fallback=|| "Login">
                                <Spinner label="Logging in" />
                                "Logging in..."
                            </Show>
                        </Button>
                    </form>
                </div>

                <div class="border-t border-gray-200 bg-gray-50 px-6 py-4 text-center text-xs text-gray-500 space-y-1">
                    <p>
                        "By logging in, you agree to our "
                        <a class="underline" href="/terms">"Terms of Service"</a>
                        " and "
                        <a class="underline" href="/privacy">"Privacy Policy"</a>
                    </p>
                    <p>
                        "Need help? Contact "
                        <a class="underline" href="mailto:support@healthregistry.go.ug">
                            "support@healthregistry.go.ug"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
