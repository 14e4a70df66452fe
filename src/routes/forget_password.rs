use crate::components::{AlertKind, MessageAlert, SubmitButton, TextField};
use crate::features::auth::{
    forms::ForgetPasswordForm, service::AuthService, types::ForgetPasswordRequest,
};
use crate::features::forms::FieldRule;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use tracing::warn;

#[component]
pub fn ForgetPasswordPage() -> impl IntoView {
    let page = RwSignal::new(ForgetPasswordForm::new());

    let reset_action = Action::new_local(move |request: &ForgetPasswordRequest| {
        let request = request.clone();
        async move { AuthService::browser().forget_password(&request).await }
    });

    Effect::new(move |_| match reset_action.value().get() {
        Some(Ok(outcome)) => page.update(|page| page.apply(outcome)),
        Some(Err(err)) => warn!(error = %err, "password reset request failed"),
        None => {}
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(request) = page.try_update(ForgetPasswordForm::submit).flatten() {
            reset_action.dispatch(request);
        }
    };

    view! {
        <form class="max-w-sm mx-auto" on:submit=on_submit novalidate>
            <h1 class="mb-2 text-2xl font-bold text-gray-900 dark:text-white">"Forgot Password"</h1>
            <p class="mb-6 text-sm text-gray-500 dark:text-gray-400">
                "Enter your account email and we will send you a reset link."
            </p>
            <TextField
                id="email"
                label="Email"
                input_type="email"
                autocomplete="email"
                placeholder="name@example.com"
                invalid=Signal::derive(move || {
                    page.with(|page| page.form.shows_error("email", FieldRule::Required))
                })
                on_input=move |value: String| {
                    page.update(|page| {
                        page.form.set("email", value);
                    })
                }
            />
            <div class="flex items-center justify-between">
                <SubmitButton pending=reset_action.pending()>
                    "Send"
                </SubmitButton>
                <A href=paths::LOGIN {..} class="text-sm text-blue-700 hover:underline dark:text-blue-500">
                    "Back to login"
                </A>
            </div>
            <MessageAlert
                kind=AlertKind::Success
                message=Signal::derive(move || page.with(|page| page.message.clone()))
            />
        </form>
    }
}
