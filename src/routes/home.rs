use crate::features::session::context::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let is_logged_in = use_session().is_logged_in;

    view! {
        <section class="max-w-2xl mx-auto text-center">
            <h1 class="mb-4 text-3xl font-extrabold text-gray-900 dark:text-white">
                "Exam Portal"
            </h1>
            <p class="mb-6 text-gray-500 dark:text-gray-400">
                "Sign in to view your exam results and manage your account."
            </p>
            <Show
                when=move || is_logged_in.get()
                fallback=|| {
                    view! {
                        <A
                            href=paths::LOGIN
                            {..}
                            class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
                        >
                            "Login"
                        </A>
                    }
                }
            >
                <A
                    href=paths::RESULT
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
                >
                    "View result"
                </A>
            </Show>
        </section>
    }
}
