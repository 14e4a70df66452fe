use crate::components::{AlertKind, MessageAlert, SubmitButton, TextField};
use crate::features::auth::{
    RequireToken, forms::ChangePasswordForm, service::AuthService, types::ChangePasswordRequest,
};
use crate::features::forms::FieldRule;
use crate::features::session::context::use_session;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tracing::warn;

/// Guarded entry point for `/change-password`.
#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    view! {
        <RequireToken>
            <ChangePasswordContent />
        </RequireToken>
    }
}

#[component]
fn ChangePasswordContent() -> impl IntoView {
    let session = use_session();
    let page = RwSignal::new(ChangePasswordForm::new(session.session().token()));

    let change_action = Action::new_local(move |request: &ChangePasswordRequest| {
        let request = request.clone();
        async move { AuthService::browser().change_password(&request).await }
    });

    Effect::new(move |_| match change_action.value().get() {
        Some(Ok(outcome)) => page.update(|page| page.apply(outcome)),
        Some(Err(err)) => warn!(error = %err, "change password request failed"),
        None => {}
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(request) = page.try_update(ChangePasswordForm::submit).flatten() {
            change_action.dispatch(request);
        }
    };

    let invalid = move |name: &'static str| {
        Signal::derive(move || page.with(|page| page.form.shows_error(name, FieldRule::Required)))
    };
    let set_field = move |name: &'static str| {
        move |value: String| {
            page.update(|page| {
                page.form.set(name, value);
            })
        }
    };

    view! {
        <form class="max-w-sm mx-auto" on:submit=on_submit novalidate>
            <h1 class="mb-6 text-2xl font-bold text-gray-900 dark:text-white">"Change Password"</h1>
            <TextField
                id="old_password"
                label="Old password"
                input_type="password"
                autocomplete="current-password"
                invalid=invalid("old_password")
                on_input=set_field("old_password")
            />
            <TextField
                id="new_password"
                label="New password"
                input_type="password"
                autocomplete="new-password"
                invalid=invalid("new_password")
                on_input=set_field("new_password")
            />
            <TextField
                id="confirm_password"
                label="Confirm password"
                input_type="password"
                autocomplete="new-password"
                invalid=invalid("confirm_password")
                on_input=set_field("confirm_password")
            />
            <SubmitButton pending=change_action.pending()>
                "Change Password"
            </SubmitButton>
            <MessageAlert
                kind=AlertKind::Info
                message=Signal::derive(move || page.with(|page| page.message.clone()))
            />
        </form>
    }
}
