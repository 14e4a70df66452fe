//! Form submit button. While `pending` it is disabled and shows an inline
//! spinner, so a form cannot be sent twice from the same click.

use super::spinner::{Spinner, SpinnerSize};
use leptos::prelude::*;

#[component]
pub fn SubmitButton(#[prop(into)] pending: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="inline-flex items-center justify-center gap-2 rounded-md bg-indigo-600 px-5 py-2.5 text-sm font-semibold text-white shadow-sm hover:bg-indigo-500 focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-indigo-600 disabled:cursor-wait disabled:opacity-60"
            disabled=move || pending.get()
            aria-busy=move || pending.get().to_string()
        >
            <Show when=move || pending.get()>
                <Spinner size=SpinnerSize::Inline />
            </Show>
            {children()}
        </button>
    }
}
