use crate::app_lib::build_info;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    let commit = build_info::git_commit_hash();

    view! {
        <footer class="border-t border-gray-200 dark:border-gray-700">
            <div class="max-w-screen-xl mx-auto p-4 flex flex-col sm:flex-row items-center justify-between text-sm text-gray-500 dark:text-gray-400">
                <span>{format!("© {year} Exam Portal. All rights reserved.")}</span>
                <span class="font-mono" title="Build commit">
                    {format!("v{} ({commit})", build_info::version())}
                </span>
            </div>
        </footer>
    }
}
