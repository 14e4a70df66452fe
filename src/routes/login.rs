use crate::components::{AlertKind, MessageAlert, SubmitButton, TextField};
use crate::features::auth::{
    forms::LoginForm,
    service::{AuthService, login_outcome},
    types::LoginCredentials,
};
use crate::features::forms::FieldRule;
use crate::features::session::context::use_session;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};
use tracing::{info, warn};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let page = RwSignal::new(LoginForm::new());

    let login_action = Action::new_local(move |credentials: &LoginCredentials| {
        let credentials = credentials.clone();
        async move { AuthService::browser().validate_login(&credentials).await }
    });

    Effect::new(move |_| {
        let Some(result) = login_action.value().get() else {
            return;
        };
        let outcome = match result.and_then(|response| login_outcome(&response)) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "login request failed");
                return;
            }
        };
        let Some(token) = page.try_update(|page| page.apply(outcome)).flatten() else {
            return;
        };
        match session.sign_in(&token) {
            Ok(()) => {
                info!("login accepted");
                navigate(paths::AFTER_LOGIN, Default::default());
            }
            Err(err) => warn!(error = %err, "failed to store session token"),
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(credentials) = page.try_update(LoginForm::submit).flatten() {
            login_action.dispatch(credentials);
        }
    };

    let invalid = move |name: &'static str| {
        Signal::derive(move || page.with(|page| page.form.shows_error(name, FieldRule::Required)))
    };

    view! {
        <form class="max-w-sm mx-auto" on:submit=on_submit novalidate>
            <h1 class="mb-6 text-2xl font-bold text-gray-900 dark:text-white">"Login"</h1>
            <TextField
                id="email"
                label="Email"
                input_type="email"
                autocomplete="email"
                placeholder="name@example.com"
                invalid=invalid("email")
                on_input=move |value: String| {
                    page.update(|page| {
                        page.form.set("email", value);
                    })
                }
            />
            <TextField
                id="password"
                label="Password"
                input_type="password"
                autocomplete="current-password"
                invalid=invalid("password")
                on_input=move |value: String| {
                    page.update(|page| {
                        page.form.set("password", value);
                    })
                }
            />
            <div class="flex items-center justify-between">
                <SubmitButton pending=login_action.pending()>
                    "Login"
                </SubmitButton>
                <A
                    href=paths::FORGET_PASSWORD
                    {..}
                    class="text-sm text-blue-700 hover:underline dark:text-blue-500"
                >
                    "Forgot password?"
                </A>
            </div>
            <MessageAlert
                kind=AlertKind::Info
                message=Signal::derive(move || page.with(|page| page.message.clone()))
            />
        </form>
    }
}
