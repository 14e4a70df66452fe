pub(crate) mod paths;

#[cfg(target_arch = "wasm32")]
mod change_password;
#[cfg(target_arch = "wasm32")]
mod forget_password;
#[cfg(target_arch = "wasm32")]
mod home;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
#[cfg(target_arch = "wasm32")]
mod result;

#[cfg(target_arch = "wasm32")]
pub(crate) use view::AppRoutes;

#[cfg(target_arch = "wasm32")]
mod view {
    use super::change_password::ChangePasswordPage;
    use super::forget_password::ForgetPasswordPage;
    use super::home::HomePage;
    use super::login::LoginPage;
    use super::not_found::NotFoundPage;
    use super::result::ResultPage;
    use leptos::prelude::*;
    use leptos_router::components::{Route, Routes};
    use leptos_router::path;

    /// Route table; keep in sync with `paths::RouteId`.
    #[component]
    pub fn AppRoutes() -> impl IntoView {
        view! {
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/change-password") view=ChangePasswordPage />
                <Route path=path!("/forget-password") view=ForgetPasswordPage />
                <Route path=path!("/result") view=ResultPage />
                <Route path=path!("/*any") view=NotFoundPage />
            </Routes>
        }
    }
}
