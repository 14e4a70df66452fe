//! Labelled input bound to one form field. The required-field error shows
//! only once the owning form has been submitted.

use leptos::prelude::*;

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(into)] invalid: Signal<bool>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="mb-5">
            <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for=id>
                {label}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class=INPUT_CLASS
                class:border-red-500=move || invalid.get()
                autocomplete=autocomplete
                placeholder=placeholder
                aria-invalid=move || invalid.get().to_string()
                on:input=move |event| on_input.run(event_target_value(&event))
            />
            <Show when=move || invalid.get()>
                <p class="mt-2 text-sm text-red-600 dark:text-red-500">{label} " is required"</p>
            </Show>
        </div>
    }
}
