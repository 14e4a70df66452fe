//! Top navigation. Links follow the session signal, so logging in or out
//! swaps them without a reload. Hiding links is cosmetic; the API enforces
//! access.

use crate::features::session::context::use_session;
use crate::routes::paths::{self, RouteId};
use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::{
    components::A,
    hooks::{use_location, use_navigate},
};
use tracing::{info, warn};

const LINK_CLASS: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let is_logged_in = session.is_logged_in;
    let navigate = use_navigate();
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_: MouseEvent| set_menu_open.set(false);
    let pathname = use_location().pathname;
    let is_current = move |route: RouteId| RouteId::resolve(&pathname.get()) == route;

    // Storage is cleared even if the in-memory copy was already empty.
    let logout = Callback::new(move |()| {
        if let Err(err) = session.logout() {
            warn!(error = %err, "failed to clear session storage");
        }
        info!("logged out");
        set_menu_open.set(false);
        navigate(paths::AFTER_LOGOUT, Default::default());
    });

    view! {
        <header class="border-b border-gray-200 dark:bg-gray-900 dark:border-gray-700">
            <nav class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                <A href=paths::HOME {..} class="flex items-center space-x-3" on:click=close_menu>
                    <span class="text-xl font-semibold whitespace-nowrap dark:text-white">
                        "Exam Portal"
                    </span>
                </A>
                <button
                    type="button"
                    class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                    aria-controls="navbar-default"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="sr-only">"Open main menu"</span>
                    <svg
                        class="w-5 h-5"
                        aria-hidden="true"
                        xmlns="http://www.w3.org/2000/svg"
                        fill="none"
                        viewBox="0 0 17 14"
                    >
                        <path
                            stroke="currentColor"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M1 1h15M1 7h15M1 13h15"
                        ></path>
                    </svg>
                </button>
                <div
                    id="navbar-default"
                    class="w-full md:block md:w-auto"
                    class:hidden=move || !menu_open.get()
                >
                    <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                        <Show
                            when=move || is_logged_in.get()
                            fallback=move || {
                                view! {
                                    <li>
                                        <A
                                            href=paths::LOGIN
                                            {..}
                                            class=LINK_CLASS
                                            class:text-blue-700=move || is_current(RouteId::Login)
                                            on:click=close_menu
                                        >
                                            "Login"
                                        </A>
                                    </li>
                                }
                            }
                        >
                            <li>
                                <A
                                    href=paths::CHANGE_PASSWORD
                                    {..}
                                    class=LINK_CLASS
                                    class:text-blue-700=move || is_current(RouteId::ChangePassword)
                                    on:click=close_menu
                                >
                                    "Change Password"
                                </A>
                            </li>
                            <li>
                                <A
                                    href=paths::RESULT
                                    {..}
                                    class=LINK_CLASS
                                    class:text-blue-700=move || is_current(RouteId::Result)
                                    on:click=close_menu
                                >
                                    "Result"
                                </A>
                            </li>
                            <li>
                                <button type="button" class=LINK_CLASS on:click=move |_| logout.run(())>
                                    "Logout"
                                </button>
                            </li>
                        </Show>
                    </ul>
                </div>
            </nav>
        </header>
    }
}
