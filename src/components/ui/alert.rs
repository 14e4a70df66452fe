//! Alert banners for server messages. Transport errors never reach these;
//! only the `message` field of an API body is rendered.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Success,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Success => {
                "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
            }
            AlertKind::Info => {
                "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200"
            }
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    view! { <div class=kind.class() role="alert">{message}</div> }
}

/// Renders `message` in an alert while it is set.
#[component]
pub fn MessageAlert(kind: AlertKind, #[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|message| {
            view! {
                <div class="mt-4">
                    <Alert kind=kind message=message />
                </div>
            }
        })
    }
}
