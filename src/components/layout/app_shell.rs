//! Frame around every route: header, content container, footer.

use super::{Footer, Header};
use leptos::prelude::*;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Header />
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <Footer />
        </div>
    }
}
